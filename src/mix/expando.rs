use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::mix::record::DynamicRecord;
use crate::mix::value::MixValue;

/// An insertion-ordered record that accepts new entries at any time.
#[derive(Debug, Clone, Default)]
pub struct ExpandoObject {
    entries: IndexMap<String, MixValue>,
}

impl ExpandoObject {
    pub fn new() -> Self {
        ExpandoObject {
            entries: IndexMap::new(),
        }
    }

    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, MixValue)>,
        K: Into<String>,
    {
        ExpandoObject {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// A fresh, empty record behind a shared handle.
    pub fn shared() -> Rc<RefCell<Self>> {
        Self::new().into_shared()
    }

    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes an entry by exact key, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<MixValue> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MixValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl DynamicRecord for ExpandoObject {
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.keys().map(String::as_str))
    }

    fn get_exact(&self, key: &str) -> Option<MixValue> {
        self.entries.get(key).cloned()
    }

    fn insert_exact(&mut self, key: String, value: MixValue) {
        self.entries.insert(key, value);
    }
}
