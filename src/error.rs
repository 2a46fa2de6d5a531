//! Error types for document-to-JSON conversion.
//!
//! Conversion has a single failure in its base contract: a value whose type has
//! no JSON scalar counterpart ([`Error::UnsupportedType`]). Everything else here
//! comes from the optional depth limit or from reading and writing JSON text.
//!
//! ## Examples
//!
//! ```rust
//! use docjson::{convert_scalar, DocValue, Error};
//!
//! let result = convert_scalar(&DocValue::Null);
//! assert!(matches!(result, Err(Error::UnsupportedType { kind: "null", .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting or (de)serializing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value whose type is not string, 64-bit integer, double or boolean
    /// reached the scalar conversion step.
    #[error("Unsupported value type for: {value} ({kind})")]
    UnsupportedType { kind: &'static str, value: String },

    /// The input nests containers deeper than the configured limit.
    #[error("Nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    /// IO error while writing JSON text
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text or a serializer failure
    #[error("JSON error: {0}")]
    Json(String),

    /// A JSON value of the wrong kind passed to a `TryFrom` extractor
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for the given kind and rendered value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docjson::Error;
    ///
    /// let err = Error::unsupported_type("null", "null");
    /// assert!(err.to_string().contains("Unsupported value type for: null"));
    /// ```
    pub fn unsupported_type(kind: &'static str, value: impl fmt::Display) -> Self {
        Error::UnsupportedType {
            kind,
            value: value.to_string(),
        }
    }

    /// Creates a depth limit error.
    pub fn depth_limit_exceeded(limit: usize) -> Self {
        Error::DepthLimitExceeded { limit }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for [`Error::UnsupportedType`].
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Json(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
