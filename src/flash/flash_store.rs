use serde_json::Value;
use std::collections::{HashMap, BTreeMap};

/// Key/value bag provided by the host, usually the flash (or temp) data of a session
///
/// The host decides how long the entries live, normally until the request that follows the one that wrote them. Values are arbitrary json values because a host might place raw values in the bag; entries written by this crate are always [Value::String].
///
/// Implementations exist for `HashMap<String, Value>` and `BTreeMap<String, Value>`, which are enough for tests or for hosts that keep the flash data as a plain map.
pub trait FlashStore {
    /// Sets the value under the key, overwriting any previous entry
    fn set(&mut self, key: String, value: Value);
    /// Looks up the value stored under the key, without modifying the bag
    fn try_get(&self, key: &str) -> Option<&Value>;
    /// Removes the entry under the key, returning it if there was one
    fn remove(&mut self, key: &str) -> Option<Value>;
}

impl FlashStore for HashMap<String, Value> {
    fn set(&mut self, key: String, value: Value) {
        HashMap::insert(self, key, value);
    }

    fn try_get(&self, key: &str) -> Option<&Value> {
        HashMap::get(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        HashMap::remove(self, key)
    }
}

impl FlashStore for BTreeMap<String, Value> {
    fn set(&mut self, key: String, value: Value) {
        BTreeMap::insert(self, key, value);
    }

    fn try_get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        BTreeMap::remove(self, key)
    }
}

impl<S: FlashStore + ?Sized> FlashStore for &mut S {
    fn set(&mut self, key: String, value: Value) {
        (**self).set(key, value)
    }

    fn try_get(&self, key: &str) -> Option<&Value> {
        (**self).try_get(key)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        (**self).remove(key)
    }
}
