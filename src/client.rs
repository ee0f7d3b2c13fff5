//! MailChimp API client.
//!
//! The main entry point: resolves the datacenter endpoints from the API key,
//! dispatches XML-RPC calls with the key prepended, and classifies failures.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::debug;
use xmlrpc::{Request, Value};

use crate::campaigns::CampaignsClient;
use crate::endpoint::{self, Endpoint};
use crate::error::{ChimpError, Result, classify_transport_failure};
use crate::helper::HelperClient;
use crate::lists::ListsClient;
use crate::security::SecurityClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// MailChimp API client.
///
/// # Example
///
/// ```rust,no_run
/// use chimp::Client;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("your-api-key-us1")?;
///
///     let lists = client.lists().all()?;
///     println!("{lists:?}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) config: ClientConfig,
    pub(crate) rpc_url: String,
    pub(crate) export_url: String,
}

/// Configuration options for the client.
///
/// The behavioral flags mirror the account-level defaults of the v1.2 API
/// and are consumed by the list subscription methods.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account API key, `<key>-<datacenter>`.
    pub api_key: String,
    /// Use HTTPS (port 443) instead of HTTP (port 80).
    pub secure: bool,
    /// Require double opt-in on subscribe (default: false).
    pub double_opt_in: bool,
    /// Default merge-field values, for callers to fold into subscriptions.
    pub merge_tags: BTreeMap<String, Value>,
    /// Replace interest groups instead of extending them (default: true).
    pub replace_interests: bool,
    /// Send the goodbye email on unsubscribe (default: false).
    pub send_goodbye: bool,
    /// Notify the list owner on unsubscribe (default: false).
    pub send_notify: bool,
    /// Send the welcome email on subscribe (default: false).
    pub send_welcome: bool,
    /// Update an existing member on subscribe instead of failing (default: true).
    pub update_existing: bool,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// Endpoint base override, e.g. a local mock or proxy. When set, both the
    /// RPC and export URLs are rooted here instead of the datacenter host.
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Configuration carrying the account defaults of the v1.2 API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secure: false,
            double_opt_in: false,
            merge_tags: BTreeMap::new(),
            replace_interests: true,
            send_goodbye: false,
            send_notify: false,
            send_welcome: false,
            update_existing: true,
            timeout: None,
            user_agent: None,
            endpoint: None,
        }
    }
}

impl Client {
    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`ChimpError::Configuration`] if the API key is empty or
    /// carries no `-<datacenter>` suffix. The key is validated before any
    /// transport is built.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chimp::Client;
    ///
    /// let client = Client::new("your-api-key-us1").unwrap();
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chimp::{Client, ClientConfig};
    ///
    /// let mut config = ClientConfig::new("your-api-key-us1");
    /// config.secure = true;
    /// config.double_opt_in = true;
    /// let client = Client::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let endpoint = Endpoint::resolve(&config.api_key, config.secure)?;
        let (rpc_url, export_url) = match &config.endpoint {
            Some(base) => {
                let base = base.trim_end_matches('/');
                (
                    format!("{base}/{}/", endpoint::API_VERSION),
                    format!("{base}{}", endpoint::export_path()),
                )
            }
            None => (endpoint.rpc_url(), endpoint.export_url()),
        };

        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("chimp-rust/{}", env!("CARGO_PKG_VERSION")));
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|err| ChimpError::Configuration(err.to_string()))?;

        Ok(Self {
            http,
            config,
            rpc_url,
            export_url,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Datacenter suffix of the account key.
    pub fn datacenter(&self) -> &str {
        self.config
            .api_key
            .rsplit_once('-')
            .map(|(_, dc)| dc)
            .unwrap_or_default()
    }

    /// Base URL of the XML-RPC endpoint.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Full URL of the list export endpoint.
    pub fn export_url(&self) -> &str {
        &self.export_url
    }

    /// List operations.
    pub fn lists(&self) -> ListsClient {
        ListsClient::new(self.clone())
    }

    /// Campaign operations.
    pub fn campaigns(&self) -> CampaignsClient {
        CampaignsClient::new(self.clone())
    }

    /// API-key management operations.
    pub fn security(&self) -> SecurityClient {
        SecurityClient::new(self.clone())
    }

    /// Account-level helper operations.
    pub fn helper(&self) -> HelperClient {
        HelperClient::new(self.clone())
    }

    /// Invokes a remote procedure, prepending the account API key as the
    /// first positional argument.
    ///
    /// The decoded response is returned as-is (struct, array, or scalar).
    /// A structured remote fault is classified by its code range: 100-199
    /// [`User`](ChimpError::User), 200-299 [`List`](ChimpError::List),
    /// 300-399 [`Campaign`](ChimpError::Campaign), 500-599
    /// [`Validation`](ChimpError::Validation), anything else
    /// [`Api`](ChimpError::Api). Every other failure surfaces as
    /// [`Communication`](ChimpError::Communication). Exactly one attempt is
    /// made; nothing is retried.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chimp::{Client, Value};
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key-us1")?;
    ///     let stats = client.call("campaignStats", &[Value::from("campaign-id")])?;
    ///     println!("{stats:?}");
    ///     Ok(())
    /// }
    /// ```
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        debug!(method, "dispatching remote call");
        let mut request = Request::new(method).arg(self.config.api_key.as_str());
        for arg in args {
            request = request.arg(arg.clone());
        }
        match request.call(self.http.post(&self.rpc_url)) {
            Ok(value) => Ok(value),
            Err(err) => match err.fault() {
                Some(fault) => Err(ChimpError::from_fault(fault)),
                None => Err(classify_transport_failure(err.to_string(), args)),
            },
        }
    }
}
