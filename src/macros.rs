/// Builds a [`DocValue`](crate::DocValue) graph with JSON-like syntax.
///
/// Object keys must be string literals. Any other token tree is converted with
/// `DocValue::from`, so integer literals become `Int64`, float literals
/// `Double`, and string literals `String`. Negative literals such as `-1` may
/// appear as array elements and field values.
///
/// ```rust
/// use docjson::{doc, DocValue};
///
/// let value = doc!({"name": "Ann", "tags": ["x", "y"], "missing": null});
/// assert!(value.is_document());
/// assert_eq!(value.as_document().and_then(|d| d.get("missing")), Some(&DocValue::Null));
///
/// let offsets = doc!([-1, 0, 2.5]);
/// assert_eq!(offsets.as_array().map(|a| a[0].clone()), Some(DocValue::Int64(-1)));
/// ```
#[macro_export]
macro_rules! doc {
    // Element-by-element munching, used when an array holds a negative literal.
    (@array [$($done:expr,)*]) => {
        $crate::DocValue::Array(vec![$($done),*])
    };

    (@array [$($done:expr,)*] - $num:literal $(, $($rest:tt)*)?) => {
        $crate::doc!(@array [$($done,)* $crate::DocValue::from(-$num),] $($($rest)*)?)
    };

    (@array [$($done:expr,)*] $elem:tt $(, $($rest:tt)*)?) => {
        $crate::doc!(@array [$($done,)* $crate::doc!($elem),] $($($rest)*)?)
    };

    // Field-by-field munching, used when a document holds a negative literal.
    (@object $document:ident) => {};

    (@object $document:ident $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $document.insert($key, $crate::DocValue::from(-$num));
        $crate::doc!(@object $document $($($rest)*)?);
    };

    (@object $document:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $document.insert($key, $crate::doc!($value));
        $crate::doc!(@object $document $($($rest)*)?);
    };

    (null) => {
        $crate::DocValue::Null
    };

    (true) => {
        $crate::DocValue::Boolean(true)
    };

    (false) => {
        $crate::DocValue::Boolean(false)
    };

    ([]) => {
        $crate::DocValue::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::DocValue::Array(vec![$($crate::doc!($elem)),*])
    };

    ([ $($elems:tt)+ ]) => {
        $crate::doc!(@array [] $($elems)+)
    };

    ({}) => {
        $crate::DocValue::Document($crate::Document::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            document.insert($key, $crate::doc!($value));
        )*
        $crate::DocValue::Document(document)
    }};

    ({ $($fields:tt)+ }) => {{
        let mut document = $crate::Document::new();
        $crate::doc!(@object document $($fields)+);
        $crate::DocValue::Document(document)
    }};

    ($value:expr) => {
        $crate::DocValue::from($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::{DocValue, Document};

    #[test]
    fn test_doc_macro_primitives() {
        assert_eq!(doc!(null), DocValue::Null);
        assert_eq!(doc!(true), DocValue::Boolean(true));
        assert_eq!(doc!(42), DocValue::Int64(42));
        assert_eq!(doc!(3.5), DocValue::Double(3.5));
        assert_eq!(doc!("hello"), DocValue::String("hello".to_string()));
    }

    #[test]
    fn test_doc_macro_negative_literals() {
        assert_eq!(
            doc!([-1, 2, -3.5]),
            DocValue::Array(vec![
                DocValue::Int64(-1),
                DocValue::Int64(2),
                DocValue::Double(-3.5),
            ])
        );

        let value = doc!({"a": -1, "b": [-2], "c": "x",});
        let doc = value.as_document().unwrap();
        assert_eq!(doc.get("a"), Some(&DocValue::Int64(-1)));
        assert_eq!(doc.get("b"), Some(&DocValue::Array(vec![DocValue::Int64(-2)])));
        assert_eq!(doc.get("c"), Some(&DocValue::from("x")));
    }

    #[test]
    fn test_doc_macro_containers() {
        assert_eq!(doc!([]), DocValue::Array(vec![]));
        assert_eq!(doc!({}), DocValue::Document(Document::new()));

        let value = doc!({"a": [1, {"b": false}]});
        let inner = value
            .as_document()
            .and_then(|d| d.get("a"))
            .and_then(|a| a.as_array())
            .unwrap();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0], DocValue::Int64(1));
        assert!(inner[1].is_document());
    }
}
