/// Vanilla IDs — Persisted Records
///
/// A persisted record is a string-keyed map owned by the persistence layer.
/// The alias table only ever renames keys in it; values are never read.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Key-rename access to a saved key/value record.
pub trait PersistedRecord {
    fn contains_key(&self, key: &str) -> bool;

    /// Move the value stored under `from` to `to`.
    ///
    /// An existing `to` entry is replaced by the moved value. Order-sensitive
    /// records keep the moved value at the position `from` occupied.
    /// Returns `false` (and changes nothing) when `from` is absent.
    fn rename_key(&mut self, from: &str, to: &str) -> bool;
}

impl PersistedRecord for Map<String, Value> {
    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    fn rename_key(&mut self, from: &str, to: &str) -> bool {
        if !Map::contains_key(self, from) {
            return false;
        }
        if from == to {
            return true;
        }

        // Rebuild in place so the renamed entry keeps its slot.
        let old = std::mem::take(self);
        for (key, value) in old {
            if key == from {
                self.insert(to.to_string(), value);
            } else if key != to {
                self.insert(key, value);
            }
        }
        true
    }
}

impl<V> PersistedRecord for BTreeMap<String, V> {
    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn rename_key(&mut self, from: &str, to: &str) -> bool {
        match self.remove(from) {
            Some(value) => {
                self.insert(to.to_string(), value);
                true
            }
            None => false,
        }
    }
}
