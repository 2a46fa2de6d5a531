//! Conversion from a document graph to a JSON element tree.
//!
//! [`convert_list`], [`convert_map`] and [`convert_scalar`] are mutually
//! recursive: each container element or field value is dispatched to one of
//! the three by its variant. Results are collected bottom-up, so a failure
//! anywhere in the subtree discards everything built so far and the caller
//! never sees a partial tree.
//!
//! ## Examples
//!
//! ```rust
//! use docjson::{convert_map, doc, DocValue};
//!
//! let person = doc!({"name": "Ann", "age": 30, "tags": ["x", "y"], "active": true});
//! let DocValue::Document(fields) = person else { unreachable!() };
//!
//! let object = convert_map(&fields).unwrap();
//! assert_eq!(object.get("age").and_then(|v| v.as_i64()), Some(30));
//! ```

use crate::error::{Error, Result};
use crate::{ConvertOptions, DocValue, Document, JsonMap, JsonValue, Number};
use tracing::{debug, trace};

/// Converts an array into the elements of a JSON array, preserving order.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if any value at any depth below the
/// array has no JSON scalar counterpart.
///
/// # Examples
///
/// ```rust
/// use docjson::{convert_list, DocValue, JsonValue};
///
/// let items = vec![DocValue::from("x"), DocValue::from(1)];
/// let array = convert_list(&items).unwrap();
/// assert_eq!(array, vec![JsonValue::from("x"), JsonValue::from(1)]);
/// ```
pub fn convert_list(items: &[DocValue]) -> Result<Vec<JsonValue>> {
    Walker::UNBOUNDED.list(items, 1)
}

/// Converts a document into a JSON object with the same keys, in the same order.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if any value at any depth below the
/// document has no JSON scalar counterpart.
pub fn convert_map(doc: &Document) -> Result<JsonMap> {
    Walker::UNBOUNDED.map(doc, 1)
}

/// Converts a single scalar into a JSON scalar.
///
/// Strings, 64-bit integers, doubles and booleans are accepted, in that order
/// of precedence; every other variant, containers included, is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] naming the kind and the offending value.
///
/// # Examples
///
/// ```rust
/// use docjson::{convert_scalar, DocValue, JsonValue, Number};
///
/// assert_eq!(
///     convert_scalar(&DocValue::Double(2.5)).unwrap(),
///     JsonValue::Number(Number::Float(2.5))
/// );
/// assert!(convert_scalar(&DocValue::ObjectId([0; 12])).is_err());
/// ```
pub fn convert_scalar(value: &DocValue) -> Result<JsonValue> {
    match value {
        DocValue::String(s) => Ok(JsonValue::String(s.clone())),
        DocValue::Int64(i) => Ok(JsonValue::Number(Number::Integer(*i))),
        DocValue::Double(f) => Ok(JsonValue::Number(Number::Float(*f))),
        DocValue::Boolean(b) => Ok(JsonValue::Bool(*b)),
        DocValue::Array(_)
        | DocValue::Document(_)
        | DocValue::Null
        | DocValue::DateTime(_)
        | DocValue::ObjectId(_)
        | DocValue::Binary(_) => {
            debug!(kind = value.kind(), "value has no JSON scalar counterpart");
            Err(Error::unsupported_type(value.kind(), value))
        }
    }
}

/// Converts any node, dispatching arrays, documents and scalars.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the node, or any value below it, has
/// no JSON scalar counterpart.
///
/// # Examples
///
/// ```rust
/// use docjson::{convert, doc};
///
/// let json = convert(&doc!([1, {"a": true}])).unwrap();
/// assert_eq!(json.to_string(), r#"[1,{"a":true}]"#);
/// ```
pub fn convert(value: &DocValue) -> Result<JsonValue> {
    trace!(kind = value.kind(), "converting document graph");
    Walker::UNBOUNDED.element(value, 0)
}

/// Converts any node while honouring the given [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::DepthLimitExceeded`] if containers nest deeper than
/// `options.max_depth`, or [`Error::UnsupportedType`] as [`convert`] does.
pub fn convert_with_options(value: &DocValue, options: &ConvertOptions) -> Result<JsonValue> {
    trace!(
        kind = value.kind(),
        max_depth = ?options.max_depth,
        "converting document graph"
    );
    Walker {
        max_depth: options.max_depth,
    }
    .element(value, 0)
}

/// Recursion state shared by the three conversions: only the depth limit.
#[derive(Clone, Copy)]
struct Walker {
    max_depth: Option<usize>,
}

impl Walker {
    const UNBOUNDED: Walker = Walker { max_depth: None };

    fn enter(&self, depth: usize) -> Result<()> {
        match self.max_depth {
            Some(limit) if depth > limit => {
                debug!(limit, "document graph nests too deeply");
                Err(Error::depth_limit_exceeded(limit))
            }
            _ => Ok(()),
        }
    }

    fn list(&self, items: &[DocValue], depth: usize) -> Result<Vec<JsonValue>> {
        self.enter(depth)?;
        items.iter().map(|item| self.element(item, depth)).collect()
    }

    fn map(&self, doc: &Document, depth: usize) -> Result<JsonMap> {
        self.enter(depth)?;
        doc.iter()
            .map(|(key, value)| self.element(value, depth).map(|json| (key.clone(), json)))
            .collect()
    }

    /// Dispatches a value held by a container at `depth`.
    fn element(&self, value: &DocValue, depth: usize) -> Result<JsonValue> {
        match value {
            DocValue::Array(items) => self.list(items, depth + 1).map(JsonValue::Array),
            DocValue::Document(doc) => self.map(doc, depth + 1).map(JsonValue::Object),
            _ => convert_scalar(value),
        }
    }
}

impl TryFrom<&DocValue> for JsonValue {
    type Error = Error;

    fn try_from(value: &DocValue) -> Result<Self> {
        convert(value)
    }
}

impl TryFrom<DocValue> for JsonValue {
    type Error = Error;

    fn try_from(value: DocValue) -> Result<Self> {
        convert(&value)
    }
}
