//! Callable values that can be bound to a name in a dynamic record.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::mix::error::MixError;
use crate::mix::value::MixValue;

/// Function signature for natives bound into a record.
pub type NativeFn = fn(args: Vec<MixValue>) -> Result<MixValue, MixError>;

/// A callable stored as a record value.
///
/// Cloning is cheap: closures are reference counted, so every clone of a
/// `MixFunction` invokes the same underlying code.
pub enum MixFunction {
    /// Direct function pointer.
    Native(NativeFn),

    /// Caller-provided closure, possibly capturing state.
    Closure(Rc<dyn Fn(Vec<MixValue>) -> Result<MixValue, MixError>>),
}

impl MixFunction {
    pub fn native(func: NativeFn) -> Self {
        MixFunction::Native(func)
    }

    pub fn closure<F>(func: F) -> Self
    where
        F: Fn(Vec<MixValue>) -> Result<MixValue, MixError> + 'static,
    {
        MixFunction::Closure(Rc::new(func))
    }

    /// Invoke this function with the supplied arguments.
    pub fn call(&self, args: Vec<MixValue>) -> Result<MixValue, MixError> {
        match self {
            MixFunction::Native(f) => f(args),
            MixFunction::Closure(f) => f(args),
        }
    }

    /// Identity comparison: two functions are the same only if they run the same code object.
    pub fn same_function(&self, other: &MixFunction) -> bool {
        match (self, other) {
            (MixFunction::Native(a), MixFunction::Native(b)) => *a as usize == *b as usize,
            (MixFunction::Closure(a), MixFunction::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Clone for MixFunction {
    fn clone(&self) -> Self {
        match self {
            MixFunction::Native(f) => MixFunction::Native(*f),
            MixFunction::Closure(f) => MixFunction::Closure(Rc::clone(f)),
        }
    }
}

impl Display for MixFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "function")
    }
}

impl fmt::Debug for MixFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MixFunction::Native(_) => write!(f, "MixFunction::Native(...)"),
            MixFunction::Closure(_) => write!(f, "MixFunction::Closure(...)"),
        }
    }
}
