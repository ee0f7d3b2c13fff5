//! Basic usage example.
//!
//! This example demonstrates:
//! - Creating a client from an API key
//! - Pinging the API
//! - Subscribing a member with merge fields
//! - Reading the member back with case-insensitive lookup
//!
//! Run with:
//! ```bash
//! MAILCHIMP_API_KEY=xxx-us1 LIST_ID=... cargo run --example basic
//! ```

use std::collections::BTreeMap;

use chimp::{Client, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("MAILCHIMP_API_KEY")
        .expect("MAILCHIMP_API_KEY environment variable required");
    let list_id = std::env::var("LIST_ID").expect("LIST_ID environment variable required");

    // Create client
    println!("Creating client...");
    let client = Client::new(&api_key)?;
    println!("Datacenter: {}", client.datacenter());

    // Ping
    println!("\nPinging the API...");
    println!("{:?}", client.helper().ping()?);

    // Subscribe a member
    println!("\nSubscribing al@example.com...");
    let merge = Value::Struct(BTreeMap::from([
        ("FNAME".to_string(), Value::from("Al")),
        ("LNAME".to_string(), Value::from("Chimp")),
    ]));
    let result = client
        .lists()
        .subscribe(&list_id, "al@example.com", &merge, "html")?;
    println!("Subscribed: {result:?}");

    // Read the member back
    let info = client.lists().member_info(&list_id, "al@example.com")?;
    println!(
        "Status: {:?}",
        info.at("status").and_then(|status| status.as_str())
    );

    Ok(())
}
