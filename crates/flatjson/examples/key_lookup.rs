//! Example of navigating a parsed document with the value facade.
//!
//! cargo run --package flatjson --example key_lookup

use flatjson::{AllocationStrategy, TypedValue, parse_str};

fn main() -> Result<(), flatjson::ParseError> {
    let doc = parse_str(
        AllocationStrategy::Single,
        r#"{"users": [{"name": "Amy"}, {"name": "Bob"}], "total": 2}"#,
    )?;

    let root = doc.root();

    // root["users"][1]["name"]
    let users = root.value_of_key("users").expect("users key exists");
    let second = users.array_element(1).expect("two users");
    let name = second.value_of_key("name").expect("name key exists");
    println!("second user: {}", name.as_str().expect("name is a string"));

    // Keys are stored sorted (length-major), so lookups are binary searches.
    let index = root.find_object_key("total");
    println!(
        "total sits at member index {index}: {:?}",
        root.object_value(index).expect("total key exists")
    );

    // Pattern-matching traversal over every member.
    for (key, member) in root.entries() {
        match member.typed() {
            TypedValue::Integer(n) => println!("{key}: integer {n}"),
            TypedValue::Array(a) => println!("{key}: array of {}", a.len()),
            other => println!("{key}: {other:?}"),
        }
    }

    Ok(())
}
