//! What happens when a document holds values that JSON has no scalar for.
//!
//! Run with: cargo run --example unsupported_values

use chrono::Utc;
use docjson::{convert, convert_with_options, doc, ConvertOptions, DocValue, Document, Error};

fn main() {
    let mut event = Document::new();
    event.insert("name", "login");
    event.insert("_id", DocValue::ObjectId([0x5f; 12]));
    event.insert("at", Utc::now());

    match convert(&DocValue::Document(event)) {
        Ok(json) => println!("converted: {}", json),
        Err(Error::UnsupportedType { kind, value }) => {
            println!("rejected a {} value: {}", kind, value);
        }
        Err(other) => println!("failed: {}", other),
    }

    let deep = doc!({"a": {"b": {"c": {"d": 1}}}});
    let options = ConvertOptions::new().with_max_depth(3);
    match convert_with_options(&deep, &options) {
        Ok(json) => println!("converted: {}", json),
        Err(err) => println!("{}", err),
    }
}
