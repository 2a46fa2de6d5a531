//! Walking a converted tree with several levels of nesting.
//!
//! Run with: cargo run --example nested_documents

use docjson::{convert, convert_list, DocValue, Document, JsonValue};
use std::error::Error;

fn line_item(sku: &str, price: f64, quantity: i64) -> DocValue {
    let mut item = Document::new();
    item.insert("sku", sku);
    item.insert("price", price);
    item.insert("quantity", quantity);
    DocValue::Document(item)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut customer = Document::new();
    customer.insert("name", "Ann");
    customer.insert("vip", true);

    let mut order = Document::new();
    order.insert("order_id", 12345i64);
    order.insert("customer", customer);
    order.insert(
        "items",
        vec![line_item("WIDGET-001", 29.99, 2), line_item("GADGET-002", 49.99, 1)],
    );

    let json = convert(&DocValue::Document(order))?;

    if let JsonValue::Object(obj) = &json {
        for (key, value) in obj {
            println!("{:>10}: {}", key, value);
        }
    }

    let orders = vec![DocValue::from("header"), line_item("SPARE-003", 1.5, 10)];
    let array = convert_list(&orders)?;
    println!("\n{} elements converted from a bare list", array.len());

    Ok(())
}
