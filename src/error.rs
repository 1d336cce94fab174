/// Errors returned by this library
#[derive(Debug)]
pub enum Error {
    /// The value could not be written as json
    Encode(serde_json::Error),
    /// The stored text is not json, or does not match the requested shape
    Decode(serde_json::Error),
    /// The entry under the key is not a string, so it was not written by this crate
    NotText {
        /// Key that was looked up
        key: String,
        /// Json kind of the value that was found instead
        found: &'static str
    },
    /// Custom error, meant for third party [FlashParser](crate::flash::FlashParser) implementations
    Custom(String)
}

impl Error {
    /// Creates a custom error with a custom message
    pub fn custom<A: Into<String>>(message: A) -> Error {
        Error::Custom(message.into())
    }

    /// Indicates if the error happened while writing a value
    ///
    /// [Error::Custom] is never classified, as a custom parser might use it for any direction. Parsers that want these helpers to work should report [Error::Encode] and [Error::Decode] instead.
    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }

    /// Indicates if the error happened while reading a value back
    ///
    /// Covers [Error::NotText] too. Like [is_encode](Error::is_encode), it returns false for [Error::Custom].
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::NotText{..})
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let content = match self {
            Error::Encode(e) => format!("flash encode error: {}", e),
            Error::Decode(e) => format!("flash decode error: {}", e),
            Error::NotText{key, found} => format!("flash entry `{}` holds a json {}, expected a string", key, found),
            Error::Custom(e) => format!("{}", e)
        };
        write!(formatter, "{}", content)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encode(e) | Error::Decode(e) => Some(e),
            _ => None
        }
    }
}
