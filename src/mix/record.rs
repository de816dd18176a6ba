//! The dynamic record contract a [`Prototype`](super::prototype::Prototype) wraps.
//!
//! A record is case-sensitive storage: keys are unique under exact matching and
//! keep the casing they were inserted with. Case-insensitive lookup is layered on
//! top by the provided methods of [`DynamicRecord`].
//!
//! Records holding two keys that differ only by case are unsupported. Lookup
//! returns whichever such key enumerates first, which carries no meaning.

use std::cell::RefCell;
use std::rc::Rc;

use crate::mix::config::CaseFold;
use crate::mix::value::MixValue;

/// Shared handle to a record. The caller and every mix wrapping it see the same instance.
pub type SharedRecord = Rc<RefCell<dyn DynamicRecord>>;

/// An ordered, open-ended mapping from string keys to values.
pub trait DynamicRecord {
    /// Current keys in enumeration order, with their original casing.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Lookup by exact key.
    fn get_exact(&self, key: &str) -> Option<MixValue>;

    /// Insert or overwrite by exact key.
    fn insert_exact(&mut self, key: String, value: MixValue);

    /// Current `(key, value)` pairs in enumeration order.
    fn entries(&self) -> Vec<(String, MixValue)> {
        self.keys()
            .filter_map(|k| self.get_exact(k).map(|v| (k.to_string(), v)))
            .collect()
    }

    /// First key matching `name` under `fold`.
    fn find_key(&self, name: &str, fold: CaseFold) -> Option<String> {
        self.keys()
            .find(|k| fold.matches(k, name))
            .map(|k| k.to_string())
    }

    fn try_resolve_with(&self, name: &str, fold: CaseFold) -> Option<MixValue> {
        let key = self.find_key(name, fold)?;
        self.get_exact(&key)
    }

    /// Case-insensitive read.
    fn try_resolve(&self, name: &str) -> Option<MixValue> {
        self.try_resolve_with(name, CaseFold::default())
    }

    /// Overwrites the matching key, keeping its casing, or inserts `name` as given.
    /// Returns the key that was written.
    fn assign_with(&mut self, name: &str, value: MixValue, fold: CaseFold) -> String {
        let key = self
            .find_key(name, fold)
            .unwrap_or_else(|| name.to_string());
        self.insert_exact(key.clone(), value);
        key
    }

    /// Case-insensitive write.
    fn assign(&mut self, name: &str, value: MixValue) -> String {
        self.assign_with(name, value, CaseFold::default())
    }
}
