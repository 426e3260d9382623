//! Demonstration driver for the chained table.
//!
//! Fills a two-bucket table beyond capacity (forcing a collision chain),
//! retrieves everything, then resizes and retrieves everything again. Run
//! with `RUST_LOG=debug` (the default set below) to see the resize log line.

use chained_hashtable::HashTable;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut table = HashTable::new(2)?;

    table.insert("line_1".to_string(), "Tiny hash table".to_string());
    table.insert("line_2".to_string(), "Filled beyond capacity".to_string());
    table.insert("line_3".to_string(), "Linked list saves the day!".to_string());

    println!("{}", table.get("line_1").unwrap_or("(missing)"));
    println!("{}", table.get("line_2").unwrap_or("(missing)"));
    println!("{}", table.get("line_3").unwrap_or("(missing)"));

    let old_capacity = table.capacity();
    let table = table.resize();
    println!(
        "\nResizing hash table from {old_capacity} to {}.",
        table.capacity()
    );

    for key in ["line_1", "line_2", "line_3"] {
        println!("{key} -> {}", table.get(key).unwrap_or("(missing)"));
    }

    Ok(())
}
