//! In-memory document graph, as a document-database driver materializes it.
//!
//! [`DocValue`] is the input side of the conversion. Besides arrays, documents
//! and the four convertible scalars it also carries the driver values that have
//! no JSON scalar counterpart (`Null`, `DateTime`, `ObjectId`, `Binary`), so a
//! graph can be modelled faithfully and rejected precisely.
//!
//! ## Examples
//!
//! ```rust
//! use docjson::{DocValue, Document};
//!
//! let mut doc = Document::new();
//! doc.insert("name", "Ann");
//! doc.insert("age", 30);
//!
//! let value = DocValue::from(doc);
//! assert!(value.is_document());
//! assert_eq!(value.kind(), "document");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use std::fmt;

/// A node in a document-database object graph.
#[derive(Clone, Debug, PartialEq)]
pub enum DocValue {
    Array(Vec<DocValue>),
    Document(Document),
    String(String),
    Int64(i64),
    Double(f64),
    Boolean(bool),
    Null,
    DateTime(DateTime<Utc>),
    ObjectId([u8; 12]),
    Binary(Vec<u8>),
}

impl DocValue {
    /// Returns a stable name for the variant, used in error reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docjson::DocValue;
    ///
    /// assert_eq!(DocValue::Int64(1).kind(), "int64");
    /// assert_eq!(DocValue::Binary(vec![]).kind(), "binary");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            DocValue::Array(_) => "array",
            DocValue::Document(_) => "document",
            DocValue::String(_) => "string",
            DocValue::Int64(_) => "int64",
            DocValue::Double(_) => "double",
            DocValue::Boolean(_) => "boolean",
            DocValue::Null => "null",
            DocValue::DateTime(_) => "datetime",
            DocValue::ObjectId(_) => "objectId",
            DocValue::Binary(_) => "binary",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, DocValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self, DocValue::Document(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }

    /// Returns `true` for the four scalar types that have a JSON counterpart.
    #[inline]
    #[must_use]
    pub const fn is_json_scalar(&self) -> bool {
        matches!(
            self,
            DocValue::String(_) | DocValue::Int64(_) | DocValue::Double(_) | DocValue::Boolean(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[DocValue]> {
        match self {
            DocValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            DocValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DocValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DocValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// Renders the value in a shell-like notation, close to what driver tooling prints.
impl fmt::Display for DocValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            DocValue::Document(doc) => write!(f, "{}", doc),
            DocValue::String(s) => write!(f, "{:?}", s),
            DocValue::Int64(i) => write!(f, "{}", i),
            DocValue::Double(d) => write!(f, "{:?}", d),
            DocValue::Boolean(b) => write!(f, "{}", b),
            DocValue::Null => f.write_str("null"),
            DocValue::DateTime(dt) => write!(
                f,
                "ISODate(\"{}\")",
                dt.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            DocValue::ObjectId(oid) => {
                f.write_str("ObjectId(\"")?;
                write_hex(f, oid)?;
                f.write_str("\")")
            }
            DocValue::Binary(bytes) => {
                f.write_str("Binary(")?;
                write_hex(f, bytes)?;
                f.write_str(")")
            }
        }
    }
}

impl From<bool> for DocValue {
    fn from(value: bool) -> Self {
        DocValue::Boolean(value)
    }
}

impl From<i8> for DocValue {
    fn from(value: i8) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<i16> for DocValue {
    fn from(value: i16) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<i32> for DocValue {
    fn from(value: i32) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<i64> for DocValue {
    fn from(value: i64) -> Self {
        DocValue::Int64(value)
    }
}

impl From<u8> for DocValue {
    fn from(value: u8) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<u16> for DocValue {
    fn from(value: u16) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<u32> for DocValue {
    fn from(value: u32) -> Self {
        DocValue::Int64(i64::from(value))
    }
}

impl From<f32> for DocValue {
    fn from(value: f32) -> Self {
        DocValue::Double(f64::from(value))
    }
}

impl From<f64> for DocValue {
    fn from(value: f64) -> Self {
        DocValue::Double(value)
    }
}

impl From<String> for DocValue {
    fn from(value: String) -> Self {
        DocValue::String(value)
    }
}

impl From<&str> for DocValue {
    fn from(value: &str) -> Self {
        DocValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for DocValue {
    fn from(value: DateTime<Utc>) -> Self {
        DocValue::DateTime(value)
    }
}

impl From<Vec<DocValue>> for DocValue {
    fn from(value: Vec<DocValue>) -> Self {
        DocValue::Array(value)
    }
}

impl From<Document> for DocValue {
    fn from(value: Document) -> Self {
        DocValue::Document(value)
    }
}

/// A string-keyed document, iterated in insertion order.
///
/// # Examples
///
/// ```rust
/// use docjson::{DocValue, Document};
///
/// let mut doc = Document::new();
/// doc.insert("b", 1);
/// doc.insert("a", 2);
///
/// let keys: Vec<_> = doc.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(doc.get("a"), Some(&DocValue::Int64(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document(IndexMap<String, DocValue>);

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DocValue>) -> Option<DocValue> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, DocValue> {
        self.0.keys()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, DocValue> {
        self.0.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {:?}: {}", key, value)?;
        }
        if self.0.is_empty() {
            f.write_str("}")
        } else {
            f.write_str(" }")
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, DocValue);
    type IntoIter = indexmap::map::IntoIter<String, DocValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a DocValue);
    type IntoIter = indexmap::map::Iter<'a, String, DocValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, DocValue)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, DocValue)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}
