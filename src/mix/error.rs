use std::fmt::Display;

use thiserror::Error;

/// Errors raised while resolving or invoking members of a mix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixError {
    /// The name matched neither a declared member nor any record key.
    #[error("This mix does not respond to the property {name}.")]
    UnresolvedMember { name: String, mix: String },

    /// A call was made on a name bound to a non-function value.
    #[error("The member {name} of this mix is not callable.")]
    NotCallable { name: String },

    #[error("Uncaught type error: {0}.")]
    TypeError(String),

    #[error("Mix config error: {0}")]
    ConfigError(String),
}

impl MixError {
    pub fn unresolved(name: &str, mix: impl Display) -> Self {
        MixError::UnresolvedMember {
            name: name.to_string(),
            mix: mix.to_string(),
        }
    }

    pub fn not_callable(name: &str) -> Self {
        MixError::NotCallable {
            name: name.to_string(),
        }
    }

    /// The member name this error is about, if any.
    pub fn member_name(&self) -> Option<&str> {
        match self {
            MixError::UnresolvedMember { name, .. } => Some(name),
            MixError::NotCallable { name } => Some(name),
            MixError::TypeError(_) | MixError::ConfigError(_) => None,
        }
    }
}
