//! Demonstration driver for the basic (non-chaining) table.
//!
//! Mirrors the classic insert/retrieve/remove flow, plus the collision the
//! variant cannot survive: run with `RUST_LOG=warn` (or the default set
//! below) to see the data-loss warning before the overwrite proceeds.

use chained_hashtable::BasicHashTable;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut table = BasicHashTable::new(16)?;

    table.insert("line".to_string(), "Here today...".to_string());
    println!("{}", table.get("line").unwrap_or("(missing)"));

    table.remove("line")?;
    if table.get("line").is_none() {
        println!("...gone tomorrow. (success)");
    }

    // "bar" and "baz" share a bucket at this capacity; the second insert
    // warns and evicts the first. This is the variant's documented weakness.
    let mut table = BasicHashTable::new(4)?;
    table.insert("bar".to_string(), "kept?".to_string());
    table.insert("baz".to_string(), "kept!".to_string());
    println!("bar -> {:?}", table.get("bar"));
    println!("baz -> {:?}", table.get("baz"));

    Ok(())
}
