//! The resolution proxy.
//!
//! A [`Prototype`] wraps a shared [`DynamicRecord`] and exposes its entries as
//! members with case-insensitive name resolution. Reads of unknown names fail
//! with [`MixError::UnresolvedMember`]; writes of unknown names create the entry.
//!
//! ```text
//! mix.get("title")
//!      ↓
//! 1. Declared members of the mix (exact case)  → see `Mix`
//! 2. Declared members of its base mixes        → see `Mix::base`
//! 3. Record keys, case-insensitive, first match → here
//! 4. UnresolvedMember
//! ```

use std::fmt;
use std::fmt::{Display, Formatter};

use tracing::{debug, trace};
use uuid::Uuid;

use crate::mix::config::{MixConfig, DEFAULT_CONFIG};
use crate::mix::error::MixError;
use crate::mix::expando::ExpandoObject;
use crate::mix::record::SharedRecord;
use crate::mix::value::MixValue;

/// Wraps a record so that its entries resolve as members of the mix.
///
/// The record is shared, never copied: writes made through the prototype are
/// visible to every other holder of the same handle, and vice versa.
pub struct Prototype {
    id: Uuid,
    config: MixConfig,
    expando: SharedRecord,
}

impl Prototype {
    pub fn new(expando: SharedRecord) -> Self {
        Self::with_config(expando, DEFAULT_CONFIG.clone())
    }

    pub fn with_config(expando: SharedRecord, config: MixConfig) -> Self {
        Prototype {
            id: Uuid::new_v4(),
            config,
            expando,
        }
    }

    /// A prototype over a fresh, empty record.
    pub fn empty() -> Self {
        let expando: SharedRecord = ExpandoObject::shared();
        Self::new(expando)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MixConfig {
        &self.config
    }

    /// Handle to the wrapped record, for tacking on members after construction.
    pub fn expando(&self) -> &SharedRecord {
        &self.expando
    }

    /// Does the record hold a key matching `name`, ignoring case?
    ///
    /// Declared members of derived mixes are not consulted.
    pub fn responds_to(&self, name: &str) -> bool {
        self.expando
            .borrow()
            .find_key(name, self.config.case_fold)
            .is_some()
    }

    /// Value bound to the first record key matching `name`, ignoring case.
    pub fn get_value_for(&self, name: &str) -> Result<MixValue, MixError> {
        self.try_get_member(name)
    }

    /// Read fallback, entered when no declared member matched.
    ///
    /// Callables are returned as values so the caller can invoke them later.
    pub fn try_get_member(&self, name: &str) -> Result<MixValue, MixError> {
        let expando = self.expando.borrow();
        match expando.find_key(name, self.config.case_fold) {
            Some(key) => {
                trace!(mix = %self.id, name, key = %key, "resolved member");
                expando
                    .get_exact(&key)
                    .ok_or_else(|| MixError::unresolved(name, self))
            }
            None => {
                debug!(mix = %self.id, name, "unresolved member");
                Err(MixError::unresolved(name, self))
            }
        }
    }

    /// Call fallback: resolves `name` and invokes the bound callable.
    pub fn try_invoke_member(
        &self,
        name: &str,
        args: Vec<MixValue>,
    ) -> Result<MixValue, MixError> {
        // The record borrow is released before the call so the callable may use the record.
        match self.try_get_member(name)? {
            MixValue::Function(f) => f.call(args),
            _ => Err(MixError::not_callable(name)),
        }
    }

    /// Write fallback. Overwrites a matching key in place, keeping its casing,
    /// or inserts `name` exactly as given.
    pub fn try_set_member(&self, name: &str, value: MixValue) {
        let key = self
            .expando
            .borrow_mut()
            .assign_with(name, value, self.config.case_fold);
        trace!(mix = %self.id, name, key = %key, "assigned member");
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Prototype({})", self.id)
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("keys", &self.expando.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}
