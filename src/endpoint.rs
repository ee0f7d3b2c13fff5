//! Datacenter-scoped endpoint resolution.
//!
//! MailChimp routes every account to a regional datacenter, identified by the
//! suffix after the last `-` of the API key. The datacenter selects the host
//! for both the XML-RPC endpoint and the bulk export endpoint.

use crate::error::{ChimpError, Result};

/// XML-RPC API version spoken by this client.
pub const API_VERSION: &str = "1.2";

/// Bulk export API version.
pub const EXPORT_API_VERSION: &str = "1.0";

const API_DOMAIN: &str = "api.mailchimp.com";

/// Resolved connection target for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    scheme: &'static str,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Derives the endpoint for `api_key`, validating the key first.
    ///
    /// Validation happens here, before any transport is built: an empty key
    /// or a key without a `-<datacenter>` suffix is a configuration error.
    pub(crate) fn resolve(api_key: &str, secure: bool) -> Result<Endpoint> {
        let dc = datacenter(api_key)?;
        let (scheme, port) = if secure { ("https", 443) } else { ("http", 80) };
        Ok(Endpoint {
            scheme,
            host: format!("{dc}.{API_DOMAIN}"),
            port,
        })
    }

    /// Base URL of the XML-RPC endpoint.
    pub(crate) fn rpc_url(&self) -> String {
        format!("{}://{}/{}/", self.scheme, self.host, API_VERSION)
    }

    /// Full URL of the list export endpoint.
    pub(crate) fn export_url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, export_path())
    }
}

/// Path of the list export endpoint.
pub(crate) fn export_path() -> String {
    format!("/export/{EXPORT_API_VERSION}/list/")
}

/// Extracts the datacenter suffix: the substring after the last `-`.
pub(crate) fn datacenter(api_key: &str) -> Result<&str> {
    if api_key.is_empty() {
        return Err(ChimpError::Configuration(
            "missing API key".to_string(),
        ));
    }
    match api_key.rsplit_once('-') {
        Some((_, dc)) => Ok(dc),
        None => Err(ChimpError::Configuration(format!(
            "malformed API key {api_key:?}: expected a -<datacenter> suffix"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datacenter_is_suffix_after_last_dash() {
        assert_eq!(datacenter("abc-us1").unwrap(), "us1");
        assert_eq!(datacenter("a-b-us3").unwrap(), "us3");
    }

    #[test]
    fn test_key_without_dash_is_rejected() {
        assert!(matches!(
            datacenter("abc123"),
            Err(ChimpError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(datacenter(""), Err(ChimpError::Configuration(_))));
    }

    #[test]
    fn test_insecure_endpoint() {
        let endpoint = Endpoint::resolve("abc-us1", false).unwrap();
        assert_eq!(endpoint.rpc_url(), "http://us1.api.mailchimp.com/1.2/");
        assert_eq!(
            endpoint.export_url(),
            "http://us1.api.mailchimp.com:80/export/1.0/list/"
        );
    }

    #[test]
    fn test_secure_endpoint() {
        let endpoint = Endpoint::resolve("abc-us1", true).unwrap();
        assert_eq!(endpoint.rpc_url(), "https://us1.api.mailchimp.com/1.2/");
        assert_eq!(
            endpoint.export_url(),
            "https://us1.api.mailchimp.com:443/export/1.0/list/"
        );
    }

    #[test]
    fn test_resolve_rejects_malformed_key_before_building_urls() {
        assert!(Endpoint::resolve("abc123", true).is_err());
    }
}
