//! # chimp
//!
//! Rust SDK for the MailChimp XML-RPC API (v1.2) and the bulk Export API
//! (v1.0).
//!
//! The account API key carries a `-<datacenter>` suffix that selects the
//! regional endpoint; the client resolves it at construction and then speaks
//! XML-RPC for procedure calls and newline-delimited JSON for bulk exports.
//! Every operation is one blocking round trip; the client is cheap to clone
//! and safe to share across threads.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use chimp::{Client, Value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key-us1")?;
//!
//!     // Subscribe a member, with merge fields
//!     let merge = Value::Struct(BTreeMap::from([(
//!         "FNAME".to_string(),
//!         Value::from("Al"),
//!     )]));
//!     client.lists().subscribe("list-id", "al@example.com", &merge, "html")?;
//!
//!     // Bulk-export the whole list
//!     for record in client.lists().export("list-id", Some("subscribed"))? {
//!         println!("{:?}", record.get("Email_Address"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ChimpError>`. Remote faults are
//! classified by their fault-code range, so a list-level problem can be
//! told apart from a validation problem without inspecting raw codes:
//!
//! ```rust,no_run
//! use chimp::{ChimpError, Client, Value};
//!
//! fn main() {
//!     let client = Client::new("your-api-key-us1").unwrap();
//!     let merge = Value::Struct(Default::default());
//!
//!     match client.lists().subscribe("list-id", "al@example.com", &merge, "html") {
//!         Ok(result) => println!("subscribed: {result:?}"),
//!         Err(ChimpError::List { code, message }) => {
//!             println!("list problem ({code}): {message}")
//!         }
//!         Err(ChimpError::Validation { message, .. }) => {
//!             println!("rejected: {message}")
//!         }
//!         Err(err) => println!("error: {err}"),
//!     }
//! }
//! ```
//!
//! ## Calling procedures directly
//!
//! Every v1.2 procedure not covered by the typed wrappers can be invoked
//! through [`Client::call`]; the API key is prepended automatically and the
//! decoded [`Value`] is returned as-is.

pub mod campaigns;
pub mod client;
mod endpoint;
pub mod error;
pub mod export;
pub mod helper;
pub mod lists;
pub mod merge;
pub mod project;
pub mod security;

// Re-export the main types at the crate root
pub use client::{Client, ClientConfig};
pub use endpoint::{API_VERSION, EXPORT_API_VERSION};
pub use error::{ChimpError, Result};
pub use export::ExportRecord;
pub use merge::clean_merge_tags;
pub use project::{Projected, ProjectedMap, project};

pub use campaigns::CampaignsClient;
pub use helper::HelperClient;
pub use lists::ListsClient;
pub use security::SecurityClient;

/// Dynamic XML-RPC value, re-exported from the transport crate.
pub use xmlrpc::Value;
