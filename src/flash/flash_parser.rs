use crate::Error;
use serde::{Serialize, de::DeserializeOwned};

/// FlashParser trait for turning values into flash text and back
///
/// The crate provides a json implementation, [JsonFlashParser](super::JsonFlashParser), which is the one used by [store](super::store) and [extract](super::extract). Other parsers can be plugged in through [store_with](super::store_with) and [extract_with](super::extract_with), as long as they produce a `String`.
///
/// Writing only asks for `Serialize`, so view models that borrow their data can be placed in the flash store and read back later as an owned shape.
pub trait FlashParser {
    /// Function to call when a value is about to be placed in the [FlashStore](super::FlashStore).
    ///
    /// Failures should be reported as [Error::Encode], or with [Error::custom] if the parser is not json based.
    fn to_string<T: Serialize + ?Sized>(source: &T) -> Result<String, Error>;
    /// Function to call when text has been obtained from the [FlashStore](super::FlashStore).
    ///
    /// Failures should be reported as [Error::Decode], or with [Error::custom] if the parser is not json based.
    fn from_str<T: DeserializeOwned>(source: &str) -> Result<T, Error>;
}
