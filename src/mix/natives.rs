//! Ready-made callables for binding into records.
//!
//! ```
//! use protomix::mix::{natives, Mix, MixValue, Prototype};
//!
//! let mix = Prototype::empty();
//! mix.set("Shout", MixValue::native(natives::upper)).unwrap();
//! let loud = mix.call("shout", vec![MixValue::from("hello")]).unwrap();
//! assert_eq!(loud, MixValue::from("HELLO"));
//! ```

use crate::mix::error::MixError;
use crate::mix::value::MixValue;

/// Get the single string argument of a native.
fn string_arg<'a>(name: &str, args: &'a [MixValue]) -> Result<&'a str, MixError> {
    match args.first() {
        Some(MixValue::String(s)) => Ok(s.as_str()),
        Some(other) => Err(MixError::TypeError(format!(
            "{} expects a string, got {}",
            name,
            other.type_name()
        ))),
        None => Err(MixError::TypeError(format!("{} expects one argument", name))),
    }
}

pub fn upper(args: Vec<MixValue>) -> Result<MixValue, MixError> {
    Ok(MixValue::from(string_arg("upper", &args)?.to_uppercase()))
}

pub fn lower(args: Vec<MixValue>) -> Result<MixValue, MixError> {
    Ok(MixValue::from(string_arg("lower", &args)?.to_lowercase()))
}

/// First character of the argument, or an empty string.
pub fn first_letter(args: Vec<MixValue>) -> Result<MixValue, MixError> {
    let s = string_arg("first_letter", &args)?;
    Ok(MixValue::from(s.chars().next().map(String::from).unwrap_or_default()))
}

/// Last character of the argument, or an empty string.
pub fn last_letter(args: Vec<MixValue>) -> Result<MixValue, MixError> {
    let s = string_arg("last_letter", &args)?;
    Ok(MixValue::from(s.chars().last().map(String::from).unwrap_or_default()))
}
