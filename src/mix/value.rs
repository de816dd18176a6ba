use std::fmt;
use std::fmt::{Display, Formatter};

use crate::mix::error::MixError;
use crate::mix::function::{MixFunction, NativeFn};

pub const TYPE_STR_NULL: &str = "null";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_FUNCTION: &str = "function";

/// A value bound to a name in a dynamic record.
pub enum MixValue {
    Null,
    Boolean(bool),
    String(String),
    Number(MixNumberType),
    Function(MixFunction),
}
impl Clone for MixValue {
    fn clone(&self) -> Self {
        match self {
            MixValue::Null => MixValue::Null,
            MixValue::Boolean(b) => MixValue::Boolean(*b),
            MixValue::String(s) => MixValue::String(s.to_string()),
            MixValue::Number(n) => MixValue::Number(n.clone()),
            MixValue::Function(f) => MixValue::Function(f.clone()),
        }
    }
}
impl Display for MixValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MixValue::Null => write!(f, "{}", TYPE_STR_NULL),
            MixValue::Boolean(b) => write!(f, "{}", b),
            MixValue::String(s) => write!(f, "{}", s),
            MixValue::Number(n) => write!(f, "{}", n),
            MixValue::Function(func) => write!(f, "{}", func),
        }
    }
}

impl fmt::Debug for MixValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MixValue::Null => write!(f, "MixValue::Null"),
            MixValue::Boolean(b) => write!(f, "MixValue::Boolean({})", b),
            MixValue::String(s) => write!(f, "MixValue::String({:?})", s),
            MixValue::Number(n) => write!(f, "MixValue::Number({:?})", n),
            MixValue::Function(func) => write!(f, "MixValue::Function({:?})", func),
        }
    }
}

impl PartialEq for MixValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MixValue::Null, MixValue::Null) => true,
            (MixValue::Boolean(a), MixValue::Boolean(b)) => a == b,
            (MixValue::String(a), MixValue::String(b)) => a == b,
            (MixValue::Number(a), MixValue::Number(b)) => a == b,
            (MixValue::Function(a), MixValue::Function(b)) => a.same_function(b),
            _ => false,
        }
    }
}

impl MixValue {
    /// Wraps a plain function pointer as a callable value.
    pub fn native(func: NativeFn) -> Self {
        MixValue::Function(MixFunction::Native(func))
    }

    /// Wraps a closure as a callable value.
    pub fn closure<F>(func: F) -> Self
    where
        F: Fn(Vec<MixValue>) -> Result<MixValue, MixError> + 'static,
    {
        MixValue::Function(MixFunction::closure(func))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            MixValue::Null => TYPE_STR_NULL,
            MixValue::Boolean(_) => TYPE_STR_BOOLEAN,
            MixValue::String(_) => TYPE_STR_STRING,
            MixValue::Number(_) => TYPE_STR_NUMBER,
            MixValue::Function(_) => TYPE_STR_FUNCTION,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MixValue::Null)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, MixValue::Function(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MixValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MixValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&MixFunction> {
        match self {
            MixValue::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<&str> for MixValue {
    fn from(s: &str) -> Self {
        MixValue::String(s.to_string())
    }
}

impl From<String> for MixValue {
    fn from(s: String) -> Self {
        MixValue::String(s)
    }
}

impl From<bool> for MixValue {
    fn from(b: bool) -> Self {
        MixValue::Boolean(b)
    }
}

impl From<i64> for MixValue {
    fn from(i: i64) -> Self {
        MixValue::Number(MixNumberType::Integer(i))
    }
}

impl From<f64> for MixValue {
    fn from(f: f64) -> Self {
        MixValue::Number(MixNumberType::Float(f))
    }
}

impl From<MixFunction> for MixValue {
    fn from(f: MixFunction) -> Self {
        MixValue::Function(f)
    }
}

#[derive(Debug, PartialEq)]
pub enum MixNumberType {
    Integer(i64),
    Float(f64),
}
impl Display for MixNumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MixNumberType::Integer(i) => write!(f, "{}", i),
            MixNumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}
impl Clone for MixNumberType {
    fn clone(&self) -> Self {
        match self {
            MixNumberType::Integer(i) => MixNumberType::Integer(*i),
            MixNumberType::Float(nf) => MixNumberType::Float(*nf),
        }
    }
}
