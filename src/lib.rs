//! # Flashbag: typed values in flash data
//!
//! Flash data only holds strings reliably. This crate writes any `Serialize` value into a flash bag as json text, and reads it back into the shape the caller asks for.
//!
//! ```rust
//! use flashbag::flash::Flash;
//! use serde::{Serialize, Deserialize};
//! use std::collections::HashMap;
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Notice {
//!     message: String
//! }
//!
//! let mut bag: HashMap<String, serde_json::Value> = HashMap::new();
//! bag.store("notice", &Notice{message: "saved".to_string()}).unwrap();
//!
//! let notice: Option<Notice> = bag.extract("notice").unwrap();
//! assert_eq!(notice, Some(Notice{message: "saved".to_string()}));
//! ```
pub use self::error::Error;
mod error;

/// Flash store seam, parsers and codec functions
pub mod flash;
