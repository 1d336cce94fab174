use super::FlashParser;
use crate::Error;
use serde::{Serialize, de::DeserializeOwned};

/// Json implementation of a [FlashParser].
///
/// Produces compact json, so any other json reader can consume the flash entries.
pub struct JsonFlashParser;

impl FlashParser for JsonFlashParser {
    fn to_string<T: Serialize + ?Sized>(source: &T) -> Result<String, Error> {
        serde_json::to_string(source).map_err(Error::Encode)
    }

    fn from_str<T: DeserializeOwned>(source: &str) -> Result<T, Error> {
        serde_json::from_str(source).map_err(Error::Decode)
    }
}
