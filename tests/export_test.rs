//! Integration tests for the bulk export decoder.

use chimp::{ChimpError, Client, ClientConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

fn test_client(server: &MockServer) -> Client {
    let mut config = ClientConfig::new("test-key-us1");
    config.endpoint = Some(server.uri());
    Client::with_config(config).unwrap()
}

#[test]
fn test_export_decodes_header_and_rows() {
    let (rt, server) = start_server();
    let body = "[\"Email Address\",\"First Name\"]\n\
                [\"al@example.com\",\"Al\"]\n\
                [\"bo@example.com\",\"Bo\"]\n";
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .and(query_param("apikey", "test-key-us1"))
            .and(query_param("id", "list-1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/plain"))
            .mount(&server),
    );

    let client = test_client(&server);
    let records = client.export_list("list-1", None).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get("Email_Address"),
        Some(&json!("al@example.com"))
    );
    assert_eq!(records[0].get("First_Name"), Some(&json!("Al")));
    assert_eq!(
        records[1].get("Email_Address"),
        Some(&json!("bo@example.com"))
    );
}

#[test]
fn test_status_filter_is_passed_as_query_parameter() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .and(query_param("id", "list-1"))
            .and(query_param("status", "unsubscribed"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("[\"Email\"]\n", "text/plain"),
            )
            .mount(&server),
    );

    let client = test_client(&server);
    let records = client
        .export_list("list-1", Some("unsubscribed"))
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_status_is_omitted_when_not_given() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("[\"Email\"]\n", "text/plain"),
            )
            .mount(&server),
    );

    let client = test_client(&server);
    client.export_list("list-1", None).unwrap();

    let requests = rt.block_on(server.received_requests()).unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("status="), "unexpected status in {query}");
}

#[test]
fn test_http_failure_becomes_a_communication_error() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server),
    );

    let client = test_client(&server);
    let err = client.export_list("list-1", None).unwrap_err();
    assert!(matches!(err, ChimpError::Communication(_)), "got {err:?}");
}

#[test]
fn test_undecodable_body_becomes_a_communication_error() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("[\"Email\"]\nnot json\n", "text/plain"),
            )
            .mount(&server),
    );

    let client = test_client(&server);
    let err = client.export_list("list-1", None).unwrap_err();
    assert!(matches!(err, ChimpError::Communication(_)), "got {err:?}");
}

#[test]
fn test_export_is_reachable_through_the_lists_client() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/export/1.0/list/"))
            .and(query_param("id", "list-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("[\"Email\"]\n[\"al@example.com\"]\n", "text/plain"),
            )
            .mount(&server),
    );

    let client = test_client(&server);
    let records = client.lists().export("list-1", None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Email"), Some(&json!("al@example.com")));
}
