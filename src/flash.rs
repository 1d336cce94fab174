pub use self::flash_store::FlashStore;
pub use self::flash_parser::FlashParser;
pub use self::json_flash_parser::JsonFlashParser;
mod flash_store;
mod flash_parser;
mod json_flash_parser;

use crate::Error;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Writes a value in the flash store as json text
///
/// Any previous entry under the key gets overwritten. The value is serialized before the store is touched, so an [Error::Encode] leaves the store as it was. Only `Serialize` is required, the value can borrow its data.
///
/// ```rust
/// use flashbag::flash;
/// use std::collections::HashMap;
///
/// let mut bag: HashMap<String, serde_json::Value> = HashMap::new();
/// flash::store(&mut bag, "ids", &[1, 2, 3][..]).unwrap();
/// assert_eq!(bag["ids"], serde_json::Value::String("[1,2,3]".to_string()));
/// ```
pub fn store<T, S>(store: &mut S, key: impl Into<String>, value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
    S: FlashStore + ?Sized
{
    store_with::<JsonFlashParser, T, S>(store, key, value)
}

/// Reads a value back from the flash store
///
/// Returns `Ok(None)` when there is no entry under the key. Text that is not json, or that does not match `T`, results in an [Error::Decode]. The store is never modified.
///
/// ```rust
/// use flashbag::flash;
/// use std::collections::HashMap;
///
/// let mut bag: HashMap<String, serde_json::Value> = HashMap::new();
/// flash::store(&mut bag, "ids", &vec![1u32, 2, 3]).unwrap();
///
/// let ids: Option<Vec<u32>> = flash::extract(&bag, "ids").unwrap();
/// assert_eq!(ids, Some(vec![1, 2, 3]));
/// assert!(flash::extract::<Vec<u32>, _>(&bag, "missing").unwrap().is_none());
/// ```
pub fn extract<T, S>(store: &S, key: &str) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
    S: FlashStore + ?Sized
{
    extract_with::<JsonFlashParser, T, S>(store, key)
}

/// Reads a value back from the flash store, removing the entry
///
/// The entry is only removed once it decoded properly, a failure leaves the store untouched.
pub fn take<T, S>(store: &mut S, key: &str) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
    S: FlashStore + ?Sized
{
    take_with::<JsonFlashParser, T, S>(store, key)
}

/// Same as [store], with a custom [FlashParser]
pub fn store_with<P, T, S>(store: &mut S, key: impl Into<String>, value: &T) -> Result<(), Error>
where
    P: FlashParser,
    T: Serialize + ?Sized,
    S: FlashStore + ?Sized
{
    let key = key.into();
    let content = P::to_string(value)?;
    log::trace!("storing {} bytes in flash entry `{}`", content.len(), key);
    store.set(key, Value::String(content));
    Ok(())
}

/// Same as [extract], with a custom [FlashParser]
pub fn extract_with<P, T, S>(store: &S, key: &str) -> Result<Option<T>, Error>
where
    P: FlashParser,
    T: DeserializeOwned,
    S: FlashStore + ?Sized
{
    let found = match store.try_get(key) {
        Some(Value::String(content)) => {
            log::trace!("extracting {} bytes from flash entry `{}`", content.len(), key);
            return P::from_str(content).map(Some)
        },
        None => {
            log::debug!("no flash entry under `{}`", key);
            return Ok(None)
        },
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object"
    };
    // Something else than this crate wrote the entry, we do not guess how to read it
    log::warn!("flash entry `{}` holds a json {} instead of text", key, found);
    Err(Error::NotText{key: key.to_string(), found})
}

/// Same as [take], with a custom [FlashParser]
pub fn take_with<P, T, S>(store: &mut S, key: &str) -> Result<Option<T>, Error>
where
    P: FlashParser,
    T: DeserializeOwned,
    S: FlashStore + ?Sized
{
    let value = extract_with::<P, T, S>(store, key)?;
    if value.is_some() {
        store.remove(key);
        log::debug!("flash entry `{}` consumed", key);
    }
    Ok(value)
}

/// Method flavour of the codec functions, available on every [FlashStore]
///
/// ```rust
/// use flashbag::flash::Flash;
/// use std::collections::BTreeMap;
///
/// let mut bag: BTreeMap<String, serde_json::Value> = BTreeMap::new();
/// bag.store("greeting", "hello").unwrap();
///
/// let greeting: Option<String> = bag.take("greeting").unwrap();
/// assert_eq!(greeting.as_deref(), Some("hello"));
/// assert!(bag.is_empty());
/// ```
pub trait Flash: FlashStore {
    /// See [store]
    fn store<T: Serialize + ?Sized>(&mut self, key: impl Into<String>, value: &T) -> Result<(), Error> {
        store_with::<JsonFlashParser, T, Self>(self, key, value)
    }

    /// See [extract]
    fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        extract_with::<JsonFlashParser, T, Self>(self, key)
    }

    /// See [take]
    fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, Error> {
        take_with::<JsonFlashParser, T, Self>(self, key)
    }
}

impl<S: FlashStore + ?Sized> Flash for S {}
