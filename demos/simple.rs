//! Convert a single document to JSON.
//!
//! Run with: cargo run --example simple

use docjson::{convert, doc, to_string, to_string_pretty};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let person = doc!({
        "name": "Ann",
        "age": 30,
        "tags": ["x", "y"],
        "active": true
    });

    println!("Document:\n{}\n", person);

    let json = convert(&person)?;
    println!("JSON:\n{}\n", to_string(&json)?);
    println!("Pretty JSON:\n{}", to_string_pretty(&json)?);

    Ok(())
}
