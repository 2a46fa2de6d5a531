//! # docjson
//!
//! Convert the in-memory object graph a document-database driver produces
//! (arrays, documents and primitive scalars) into a generic JSON element tree.
//!
//! ## What gets converted?
//!
//! | Input ([`DocValue`])          | Output ([`JsonValue`])          |
//! |-------------------------------|---------------------------------|
//! | `Array`                       | `Array`, same length and order  |
//! | `Document`                    | `Object`, same keys and order   |
//! | `String`                      | `String`                        |
//! | `Int64`                       | `Number(Number::Integer)`       |
//! | `Double`                      | `Number(Number::Float)`         |
//! | `Boolean`                     | `Bool`                          |
//! | `Null`, `DateTime`, `ObjectId`, `Binary` | [`Error::UnsupportedType`] |
//!
//! The output is always freshly allocated and structurally identical to the
//! input. An unsupported value anywhere in the graph aborts the whole
//! conversion; no partially built tree is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use docjson::{convert, doc, to_string};
//!
//! let person = doc!({
//!     "name": "Ann",
//!     "age": 30,
//!     "tags": ["x", "y"],
//!     "active": true
//! });
//!
//! let json = convert(&person).unwrap();
//! assert_eq!(
//!     to_string(&json).unwrap(),
//!     r#"{"name":"Ann","age":30,"tags":["x","y"],"active":true}"#
//! );
//! ```
//!
//! ## Handling unsupported values
//!
//! ```rust
//! use docjson::{convert, doc, Error};
//!
//! let graph = doc!({"ok": 1, "inner": [{"missing": null}]});
//! match convert(&graph) {
//!     Err(Error::UnsupportedType { kind, .. }) => assert_eq!(kind, "null"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Key order
//!
//! [`Document`] and [`JsonMap`] both keep insertion order, and the converter
//! visits fields in that order, so objects come out with their keys exactly as
//! the source document listed them.

pub mod convert;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use convert::{convert, convert_list, convert_map, convert_scalar, convert_with_options};
pub use document::{DocValue, Document};
pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::ConvertOptions;
pub use value::{JsonValue, Number};

use std::io;

/// Convert a document graph and serialize the result as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use docjson::{doc, to_json};
///
/// assert_eq!(to_json(&doc!([1, 2.5, "x"])).unwrap(), r#"[1,2.5,"x"]"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the graph holds a value with no JSON
/// counterpart.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json(value: &DocValue) -> Result<String> {
    to_string(&convert(value)?)
}

/// Serialize a JSON element tree to a compact string.
///
/// Non-finite floats are written as `null`.
///
/// # Errors
///
/// Returns an error if the serializer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a JSON element tree to an indented string.
///
/// # Examples
///
/// ```rust
/// use docjson::{to_string_pretty, JsonValue};
///
/// let value = JsonValue::from(vec![JsonValue::from(1)]);
/// assert_eq!(to_string_pretty(&value).unwrap(), "[\n  1\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the serializer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a JSON element tree to a writer as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use docjson::{to_writer, JsonValue};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &JsonValue::from(true)).unwrap();
/// assert_eq!(buffer, b"true");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &JsonValue) -> Result<()>
where
    W: io::Write,
{
    serde_json::to_writer(writer, value)?;
    Ok(())
}

/// Parse JSON text into a JSON element tree.
///
/// # Examples
///
/// ```rust
/// use docjson::from_str;
///
/// let value = from_str(r#"{"a": [1, 2.0]}"#).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<JsonValue> {
    Ok(serde_json::from_str(s)?)
}
