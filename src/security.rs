//! API-key management operations.
//!
//! These v1.2 procedures authenticate with the account username and password
//! in addition to the API key.

use xmlrpc::Value;

use crate::client::Client;
use crate::error::Result;

/// Client for API-key management.
///
/// Access via `client.security()`.
pub struct SecurityClient {
    client: Client,
}

impl SecurityClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// API keys of the account (`apikeys`).
    ///
    /// Set `include_expired` to also return keys that have been expired.
    pub fn api_keys(&self, username: &str, password: &str, include_expired: bool) -> Result<Value> {
        self.client.call(
            "apikeys",
            &[username.into(), password.into(), include_expired.into()],
        )
    }

    /// Creates an additional API key for the account (`apikeyAdd`).
    pub fn add_api_key(&self, username: &str, password: &str) -> Result<Value> {
        self.client
            .call("apikeyAdd", &[username.into(), password.into()])
    }

    /// Expires the API key this client was constructed with (`apikeyExpire`).
    pub fn expire_api_key(&self, username: &str, password: &str) -> Result<Value> {
        self.client
            .call("apikeyExpire", &[username.into(), password.into()])
    }
}
