//! Bulk export example.
//!
//! Downloads every subscribed member of a list through the export API and
//! prints the email column.
//!
//! Run with:
//! ```bash
//! MAILCHIMP_API_KEY=xxx-us1 LIST_ID=... cargo run --example export_list
//! ```

use chimp::Client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("MAILCHIMP_API_KEY")
        .expect("MAILCHIMP_API_KEY environment variable required");
    let list_id = std::env::var("LIST_ID").expect("LIST_ID environment variable required");

    let client = Client::new(&api_key)?;

    let records = client.lists().export(&list_id, Some("subscribed"))?;
    println!("Exported {} records", records.len());

    for record in &records {
        println!("{:?}", record.get("Email_Address"));
    }

    Ok(())
}
