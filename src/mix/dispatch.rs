//! Member dispatch for mixes.
//!
//! Every mix implements [`Mix`]. A derived mix embeds its parent mix and returns
//! it from [`Mix::base`]; the provided methods walk that chain before falling
//! back to the wrapped record:
//!
//! ```text
//! BlogEntry::get("Body")
//!   1. BlogEntry::declared_get("Body")      → Some(..) wins
//!   2. base().declared_get("Body") ...      → first Some(..) wins
//!   3. Prototype::try_get_member("Body")    → record, case-insensitive
//! ```
//!
//! Declared members match their name exactly; only the record fallback ignores case.

use tracing::trace;

use crate::mix::error::MixError;
use crate::mix::prototype::Prototype;
use crate::mix::record::SharedRecord;
use crate::mix::value::MixValue;

/// A type composed from a [`Prototype`], optionally declaring its own members.
pub trait Mix {
    /// The prototype at the root of this mix's chain.
    fn prototype(&self) -> &Prototype;

    /// The parent mix whose declared members this mix inherits.
    fn base(&self) -> Option<&dyn Mix> {
        None
    }

    /// Names of the properties and methods declared directly on this mix.
    ///
    /// Must list exactly the names answered by `declared_get`, `declared_set`
    /// and `declared_call`, or `declares`/`has_member` disagree with dispatch.
    fn declared_names(&self) -> &[&'static str] {
        &[]
    }

    /// Read a property declared directly on this mix.
    fn declared_get(&self, _name: &str) -> Option<Result<MixValue, MixError>> {
        None
    }

    /// Write a property declared directly on this mix.
    ///
    /// Returning `None` lets the write fall through to the record, which is what
    /// happens for read-only declared properties too.
    fn declared_set(&self, _name: &str, _value: &MixValue) -> Option<Result<(), MixError>> {
        None
    }

    /// Invoke a method declared directly on this mix.
    fn declared_call(
        &self,
        _name: &str,
        _args: &[MixValue],
    ) -> Option<Result<MixValue, MixError>> {
        None
    }

    fn expando(&self) -> &SharedRecord {
        self.prototype().expando()
    }

    /// Does the wrapped record know `name`, ignoring case? Declared members are not consulted.
    fn responds_to(&self, name: &str) -> bool {
        self.prototype().responds_to(name)
    }

    /// Record value for `name`, ignoring case and bypassing declared members.
    fn get_value_for(&self, name: &str) -> Result<MixValue, MixError> {
        self.prototype().get_value_for(name)
    }

    /// Is `name` declared on this mix or any of its bases?
    fn declares(&self, name: &str) -> bool {
        self.declared_names().contains(&name) || self.base().map_or(false, |b| b.declares(name))
    }

    /// Does a member named `name` exist, declared or in the record?
    fn has_member(&self, name: &str) -> bool {
        self.declares(name) || self.responds_to(name)
    }

    fn lookup_declared_get(&self, name: &str) -> Option<Result<MixValue, MixError>> {
        self.declared_get(name)
            .or_else(|| self.base().and_then(|b| b.lookup_declared_get(name)))
    }

    fn lookup_declared_set(&self, name: &str, value: &MixValue) -> Option<Result<(), MixError>> {
        self.declared_set(name, value)
            .or_else(|| self.base().and_then(|b| b.lookup_declared_set(name, value)))
    }

    fn lookup_declared_call(
        &self,
        name: &str,
        args: &[MixValue],
    ) -> Option<Result<MixValue, MixError>> {
        self.declared_call(name, args)
            .or_else(|| self.base().and_then(|b| b.lookup_declared_call(name, args)))
    }

    /// Generic property read.
    fn get(&self, name: &str) -> Result<MixValue, MixError> {
        if let Some(result) = self.lookup_declared_get(name) {
            debug_assert!(self.declares(name), "{} answered but not declared", name);
            trace!(name, "declared property read");
            return result;
        }
        self.prototype().try_get_member(name)
    }

    /// Generic property write.
    ///
    /// Never fails for undeclared names: unknown names are added to the record.
    fn set(&self, name: &str, value: MixValue) -> Result<(), MixError> {
        if let Some(result) = self.lookup_declared_set(name, &value) {
            debug_assert!(self.declares(name), "{} answered but not declared", name);
            trace!(name, "declared property write");
            return result;
        }
        self.prototype().try_set_member(name, value);
        Ok(())
    }

    /// Generic method call.
    fn call(&self, name: &str, args: Vec<MixValue>) -> Result<MixValue, MixError> {
        if let Some(result) = self.lookup_declared_call(name, &args) {
            debug_assert!(self.declares(name), "{} answered but not declared", name);
            trace!(name, "declared method call");
            return result;
        }
        self.prototype().try_invoke_member(name, args)
    }
}

impl Mix for Prototype {
    fn prototype(&self) -> &Prototype {
        self
    }
}
