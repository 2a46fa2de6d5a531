use chrono::{TimeZone, Utc};
use docjson::{
    convert, convert_list, convert_map, convert_scalar, convert_with_options, doc, from_str,
    to_json, to_string, ConvertOptions, DocValue, Document, Error, JsonMap, JsonValue, Number,
};

fn fields(value: DocValue) -> Document {
    match value {
        DocValue::Document(doc) => doc,
        other => panic!("Expected document, got {}", other),
    }
}

fn items(value: DocValue) -> Vec<DocValue> {
    match value {
        DocValue::Array(items) => items,
        other => panic!("Expected array, got {}", other),
    }
}

#[test]
fn test_person_document() {
    let person = fields(doc!({"name": "Ann", "age": 30, "tags": ["x", "y"], "active": true}));

    let object = convert_map(&person).unwrap();

    let keys: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "age", "tags", "active"]);
    assert_eq!(object.get("name"), Some(&JsonValue::String("Ann".to_string())));
    assert_eq!(
        object.get("age"),
        Some(&JsonValue::Number(Number::Integer(30)))
    );
    assert_eq!(
        object.get("tags"),
        Some(&JsonValue::Array(vec![
            JsonValue::String("x".to_string()),
            JsonValue::String("y".to_string()),
        ]))
    );
    assert_eq!(object.get("active"), Some(&JsonValue::Bool(true)));

    assert_eq!(
        to_string(&JsonValue::Object(object)).unwrap(),
        r#"{"name":"Ann","age":30,"tags":["x","y"],"active":true}"#
    );
}

#[test]
fn test_list_keeps_length_and_order() {
    let list = items(doc!(["a", 1, 2.5, false, [], {}]));

    let array = convert_list(&list).unwrap();

    assert_eq!(
        array,
        vec![
            JsonValue::from("a"),
            JsonValue::Number(Number::Integer(1)),
            JsonValue::Number(Number::Float(2.5)),
            JsonValue::Bool(false),
            JsonValue::Array(vec![]),
            JsonValue::Object(JsonMap::new()),
        ]
    );
}

#[test]
fn test_empty_containers() {
    assert_eq!(convert_list(&[]).unwrap(), Vec::<JsonValue>::new());
    assert!(convert_map(&Document::new()).unwrap().is_empty());

    assert_eq!(to_json(&doc!([])).unwrap(), "[]");
    assert_eq!(to_json(&doc!({})).unwrap(), "{}");
}

#[test]
fn test_deep_mixed_nesting() {
    let graph = doc!([
        {"outer": [ {"inner": ["a", 1, [true, 2.5]]} ]},
        [[["leaf"]]]
    ]);

    let json = convert(&graph).unwrap();

    assert_eq!(
        to_string(&json).unwrap(),
        r#"[{"outer":[{"inner":["a",1,[true,2.5]]}]},[[["leaf"]]]]"#
    );

    let inner = json.as_array().unwrap()[0]
        .as_object()
        .and_then(|o| o.get("outer"))
        .and_then(|v| v.as_array())
        .and_then(|a| a[0].as_object())
        .and_then(|o| o.get("inner"))
        .and_then(|v| v.as_array())
        .unwrap();
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[2], JsonValue::Array(vec![JsonValue::Bool(true), JsonValue::from(2.5)]));
}

#[test]
fn test_integer_and_double_stay_distinct() {
    let json = convert(&doc!([1, 1.0])).unwrap();
    let array = json.as_array().unwrap();
    assert!(array[0].as_number().unwrap().is_integer());
    assert!(array[1].as_number().unwrap().is_float());
    assert_eq!(to_string(&json).unwrap(), "[1,1.0]");
}

#[test]
fn test_extreme_scalars() {
    let list = vec![
        DocValue::Int64(i64::MIN),
        DocValue::Int64(i64::MAX),
        DocValue::Double(-0.0),
        DocValue::from(""),
        DocValue::from("emoji \u{1F600} and \"quotes\""),
    ];

    let array = convert_list(&list).unwrap();

    assert_eq!(array[0].as_i64(), Some(i64::MIN));
    assert_eq!(array[1].as_i64(), Some(i64::MAX));
    assert!(array[2].as_f64().unwrap().is_sign_negative());
    assert_eq!(array[3].as_str(), Some(""));
    assert_eq!(array[4].as_str(), Some("emoji \u{1F600} and \"quotes\""));

    let text = to_string(&JsonValue::Array(array.clone())).unwrap();
    assert_eq!(from_str(&text).unwrap(), JsonValue::Array(array));
}

#[test]
fn test_unsupported_scalar_reports_value() {
    let oid = DocValue::ObjectId([
        0x50, 0x7f, 0x1f, 0x77, 0xbc, 0xf8, 0x6c, 0xd7, 0x99, 0x43, 0x90, 0x11,
    ]);

    let err = convert_scalar(&oid).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unsupported value type for: ObjectId(\"507f1f77bcf86cd799439011\") (objectId)"
    );
}

#[test]
fn test_unsupported_nested_in_list_aborts() {
    let when = Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap();
    let list = vec![
        DocValue::from(1),
        DocValue::Array(vec![DocValue::from("ok"), DocValue::DateTime(when)]),
    ];

    let err = convert_list(&list).unwrap_err();

    assert!(matches!(err, Error::UnsupportedType { kind: "datetime", .. }));
}

#[test]
fn test_unsupported_nested_in_map_aborts() {
    let mut inner = Document::new();
    inner.insert("payload", DocValue::Binary(vec![1, 2, 3]));
    let mut outer = Document::new();
    outer.insert("name", "Ann");
    outer.insert("files", vec![DocValue::from(inner)]);

    let err = convert_map(&outer).unwrap_err();

    assert_eq!(
        err,
        Error::UnsupportedType {
            kind: "binary",
            value: "Binary(010203)".to_string(),
        }
    );
}

#[test]
fn test_null_field_rejected() {
    let err = convert(&doc!({"a": 1, "b": null})).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { kind: "null", .. }));
}

#[test]
fn test_input_is_left_untouched() {
    let graph = doc!({"k": [1, {"j": "v"}]});
    let before = graph.clone();

    let first = convert(&graph).unwrap();
    let second = convert(&graph).unwrap();

    assert_eq!(graph, before);
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_insert_keeps_first_position() {
    let mut doc = Document::new();
    doc.insert("a", 1);
    doc.insert("b", 2);
    doc.insert("a", 3);

    let object = convert_map(&doc).unwrap();

    let entries: Vec<_> = object
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_i64().unwrap()))
        .collect();
    assert_eq!(entries, vec![("a", 3), ("b", 2)]);
}

#[test]
fn test_depth_limit() {
    let three_deep = doc!([[[1]]]);

    let at_limit = ConvertOptions::new().with_max_depth(3);
    assert_eq!(
        convert_with_options(&three_deep, &at_limit).unwrap(),
        convert(&three_deep).unwrap()
    );

    let below = ConvertOptions::new().with_max_depth(2);
    assert_eq!(
        convert_with_options(&three_deep, &below),
        Err(Error::DepthLimitExceeded { limit: 2 })
    );

    assert!(convert_with_options(&three_deep, &ConvertOptions::default()).is_ok());
}

#[test]
fn test_depth_limit_counts_documents() {
    let graph = doc!({"a": {"b": {"c": 1}}});
    let options = ConvertOptions::new().with_max_depth(2);
    assert_eq!(
        convert_with_options(&graph, &options),
        Err(Error::DepthLimitExceeded { limit: 2 })
    );
}

#[test]
fn test_very_deep_graph_without_limit() {
    let mut graph = DocValue::from("bottom");
    for _ in 0..200 {
        graph = DocValue::Array(vec![graph]);
    }

    let json = convert(&graph).unwrap();
    let mut current = &json;
    let mut depth = 0;
    while let JsonValue::Array(inner) = current {
        assert_eq!(inner.len(), 1);
        current = &inner[0];
        depth += 1;
    }
    assert_eq!(depth, 200);
    assert_eq!(current.as_str(), Some("bottom"));
}

#[test]
fn test_converted_tree_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocValue>();
    assert_send_sync::<JsonValue>();
    assert_send_sync::<Error>();

    let graph = doc!({"shared": [1, 2, 3]});
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            std::thread::spawn(move || to_json(&graph).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), r#"{"shared":[1,2,3]}"#);
    }
}
