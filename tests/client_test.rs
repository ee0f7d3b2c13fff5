//! Integration tests for client construction and configuration.

use std::time::Duration;

use chimp::{ChimpError, Client, ClientConfig};

#[test]
fn test_client_creation() {
    let client = Client::new("abc-us1").unwrap();
    assert_eq!(client.datacenter(), "us1");
    assert!(client.rpc_url().starts_with("http://us1.api.mailchimp.com"));
}

#[test]
fn test_client_with_custom_config() {
    let mut config = ClientConfig::new("abc-us1");
    config.secure = true;
    config.timeout = Some(Duration::from_secs(60));
    config.user_agent = Some("test-agent/1.0".to_string());
    let client = Client::with_config(config).unwrap();
    assert!(client.rpc_url().starts_with("https://"));
    assert!(client.config().secure);
}

#[test]
fn test_missing_api_key_fails_construction() {
    let err = Client::new("").unwrap_err();
    assert!(matches!(err, ChimpError::Configuration(_)));
}

#[test]
fn test_malformed_api_key_fails_construction() {
    let err = Client::new("abc123").unwrap_err();
    assert!(matches!(err, ChimpError::Configuration(_)));
    assert!(!err.is_fault());
}

#[test]
fn test_datacenter_is_taken_after_the_last_dash() {
    let client = Client::new("a-b-us3").unwrap();
    assert_eq!(client.datacenter(), "us3");
}

#[test]
fn test_default_config() {
    let config = ClientConfig::new("abc-us1");
    assert!(!config.double_opt_in);
    assert!(config.update_existing);
    assert!(config.replace_interests);
    assert!(!config.send_welcome);
    assert!(config.timeout.is_none());
    assert!(config.user_agent.is_none());
    assert!(config.endpoint.is_none());
}
