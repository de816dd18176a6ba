//! Resolution configuration parsing.

use std::fs;
use std::path::Path;

use super::error::MixError;

/// Configuration used by [`Prototype::new`](super::prototype::Prototype::new).
pub const DEFAULT_CONFIG: MixConfig = MixConfig::new();

/// How record keys are compared against requested member names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Full Unicode lowercase folding.
    Unicode,
    /// ASCII-only folding; non-ASCII characters must match exactly.
    Ascii,
}

impl CaseFold {
    /// Does `key` match `name` under this folding policy?
    pub fn matches(&self, key: &str, name: &str) -> bool {
        match self {
            CaseFold::Unicode => key
                .chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars().flat_map(char::to_lowercase)),
            CaseFold::Ascii => key.eq_ignore_ascii_case(name),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "unicode" => Some(CaseFold::Unicode),
            "ascii" => Some(CaseFold::Ascii),
            _ => None,
        }
    }
}

impl Default for CaseFold {
    fn default() -> Self {
        CaseFold::Unicode
    }
}

/// Complete resolution configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MixConfig {
    /// Folding policy for case-insensitive member lookup.
    pub case_fold: CaseFold,
}

impl MixConfig {
    pub const fn new() -> Self {
        MixConfig {
            case_fold: CaseFold::Unicode,
        }
    }

    pub fn with_case_fold(mut self, case_fold: CaseFold) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Load configuration from a file.
    ///
    /// Expected format:
    /// ```text
    /// # comments are allowed
    /// case_fold = "ascii"
    /// ```
    pub fn load(path: &Path) -> Result<Self, MixError> {
        let content = fs::read_to_string(path)
            .map_err(|e| MixError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from a string of `key = value` lines.
    pub fn parse(content: &str) -> Result<Self, MixError> {
        let mut config = MixConfig::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = Self::parse_entry(line).ok_or_else(|| {
                MixError::ConfigError(format!("line {}: expected `key = value`", line_no + 1))
            })?;

            match key {
                "case_fold" => {
                    config.case_fold = CaseFold::parse(value).ok_or_else(|| {
                        MixError::ConfigError(format!(
                            "line {}: unknown case_fold `{}`",
                            line_no + 1,
                            value
                        ))
                    })?;
                }
                _ => {
                    return Err(MixError::ConfigError(format!(
                        "line {}: unknown key `{}`",
                        line_no + 1,
                        key
                    )))
                }
            }
        }

        Ok(config)
    }

    /// Split a line like `case_fold = "ascii"` into its key and unquoted value.
    fn parse_entry(line: &str) -> Option<(&str, &str)> {
        let mut parts = line.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim().trim_matches('"');
        if key.is_empty() || value.is_empty() {
            None
        } else {
            Some((key, value))
        }
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self::new()
    }
}
