use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// The per-query key/value bag shared by every resolver, validator and the
/// timeout policy of one query.
///
/// Clones share the same entries. Writes from different resolvers are
/// last-writer-wins.
#[derive(Clone, Debug, Default)]
pub struct QueryContext {
    entries: Arc<Mutex<IndexMap<String, Value>>>,
}
impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.lock().shift_remove(key)
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.lock().insert(key.into(), value.into())
    }

    pub fn snapshot(&self) -> IndexMap<String, Value> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Value>> {
        // A panicking resolver can't leave a plain map half-updated.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
impl<K: Into<String>, V: Into<Value>> std::iter::FromIterator<(K, V)> for QueryContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}
