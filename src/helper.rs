//! Account-level helper operations.

use crate::client::Client;
use crate::error::Result;
use crate::project::{Projected, project};
use xmlrpc::Value;

/// Client for account-level helpers.
///
/// Access via `client.helper()`.
pub struct HelperClient {
    client: Client,
}

impl HelperClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Round-trip connectivity check (`ping`).
    pub fn ping(&self) -> Result<Value> {
        self.client.call("ping", &[])
    }

    /// Details of the account (`getAccountDetails`), projected for
    /// case-insensitive field lookup.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chimp::Client;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key-us1")?;
    ///     let details = client.helper().account_details()?;
    ///     println!("{:?}", details.at("contact.email").and_then(|v| v.as_str()));
    ///     Ok(())
    /// }
    /// ```
    pub fn account_details(&self) -> Result<Projected> {
        let value = self.client.call("getAccountDetails", &[])?;
        Ok(project(&value))
    }

    /// Renders the plain-text version of an HTML block (`generateText`).
    ///
    /// `content_type` is one of `html`, `template`, `url`.
    pub fn generate_text(&self, content_type: &str, content: &str) -> Result<Value> {
        self.client
            .call("generateText", &[content_type.into(), content.into()])
    }

    /// Inlines the CSS of an HTML document (`inlineCss`).
    pub fn inline_css(&self, html: &str, strip_css: bool) -> Result<Value> {
        self.client
            .call("inlineCss", &[html.into(), strip_css.into()])
    }
}
