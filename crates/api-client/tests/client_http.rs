//! Integration tests for the Tremendous API client.
//!
//! These tests use wiremock to mock HTTP responses and verify request
//! construction and response normalization end to end.

use serde_json::{json, Value};
use tremendous_api_client::{JsonObject, QueryParams, TremendousClient};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TremendousClient {
    TremendousClient::new("1234", server.uri()).unwrap()
}

/// End-to-end scenario: list organizations against a 200 response.
#[tokio::test]
async fn test_get_organizations_success() {
    let mock_server = MockServer::start().await;
    let body = json!({"organizations": [{"id": "ORG1", "name": "Acme"}]});

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).organizations().list().await;

    assert!(response.is_success());
    assert!(!response.is_error());
    assert_eq!(response.status_code(), Some(200));
    assert_eq!(Value::Object(response.json()), body);
}

/// Response headers are exposed on the wrapper; a failed transport
/// leaves them empty.
#[tokio::test]
async fn test_response_headers_are_exposed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "99")
                .set_body_json(json!({"orders": []})),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).orders().list(None).await;
    assert_eq!(
        response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok()),
        Some("99")
    );

    let refused = TremendousClient::new("1234", "http://127.0.0.1:9").unwrap();
    let response = refused.orders().list(None).await;
    assert!(response.headers().is_empty());
}

/// Every request carries the fixed header set.
#[tokio::test]
async fn test_required_headers_are_sent() {
    let mock_server = MockServer::start().await;
    let user_agent = format!("tremendous-api-client/{}", env!("CARGO_PKG_VERSION"));

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("Authorization", "Bearer 1234"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).products().list(None).await;
    assert!(response.is_success());
}

/// An error status is reported as data, never as a raised error.
#[tokio::test]
async fn test_error_status_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rewards/MISSING"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"errors": {"message": "not found"}})),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).rewards().get("MISSING").await;

    assert!(!response.is_success());
    assert!(response.is_error());
    assert_eq!(response.status_code(), Some(404));
    assert_eq!(response.json()["errors"]["message"], "not found");
}

#[tokio::test]
async fn test_server_error_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).orders().list(None).await;

    assert_eq!(response.status_code(), Some(500));
    assert!(!response.is_success());
    assert!(response.is_error());
    assert!(response.json().is_empty());
}

/// A transport failure yields a wrapper with no status and the error.
#[tokio::test]
async fn test_transport_failure_is_normalized() {
    // Nothing listens on the discard port.
    let client = TremendousClient::new("1234", "http://127.0.0.1:9").unwrap();

    let response = client.organizations().list().await;

    assert_eq!(response.status_code(), None);
    assert!(!response.is_success());
    assert!(response.is_error());
    assert!(response.error().is_some());
    assert!(response.json().is_empty());
}

/// A create-order call sends the payload as a JSON body, not a query.
#[tokio::test]
async fn test_create_order_sends_json_body() {
    let mock_server = MockServer::start().await;
    let payload_json = json!({
        "payment": {"funding_source_id": "FS1"},
        "reward": {
            "value": {"denomination": 25, "currency_code": "USD"},
            "recipient": {"email": "kapil@example.com"}
        }
    });
    let payload: JsonObject = payload_json.as_object().unwrap().clone();

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(payload_json.clone()))
        .and(query_param_is_missing("payment"))
        .and(query_param_is_missing("reward"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": {"id": "O1"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).orders().create(&payload).await;

    assert!(response.is_success());
    assert_eq!(response.json()["order"]["id"], "O1");
}

/// A get-order call interpolates the identifier into the path.
#[tokio::test]
async fn test_get_order_targets_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/QABSTARTSFSIO"))
        .and(query_param_is_missing("id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"order": {"id": "QABSTARTSFSIO"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).orders().get("QABSTARTSFSIO").await;

    assert!(response.is_success());
    assert_eq!(response.json()["order"]["id"], "QABSTARTSFSIO");
}

/// GET query parameters are appended as a URL query string.
#[tokio::test]
async fn test_get_query_params_are_appended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/funding_sources"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"funding_sources": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut params = QueryParams::new();
    params.insert("offset".to_string(), "10".to_string());
    params.insert("limit".to_string(), "5".to_string());

    let response = client_for(&mock_server)
        .funding_sources()
        .list(Some(&params))
        .await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_get_funding_source_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/funding_sources/FS1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"funding_source": {"id": "FS1", "method": "balance"}})),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).funding_sources().get("FS1").await;

    assert!(response.is_success());
    assert_eq!(response.json()["funding_source"]["method"], "balance");
}

#[tokio::test]
async fn test_create_organization() {
    let mock_server = MockServer::start().await;
    let payload_json = json!({"name": "Acme", "website": "https://acme.example.com"});
    let payload: JsonObject = payload_json.as_object().unwrap().clone();

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .and(body_json(payload_json))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"organization": {"id": "ORG2"}})),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .organizations()
        .create(&payload)
        .await;

    assert!(response.is_success());
    assert_eq!(response.status_code(), Some(201));
}

/// A malformed body decodes to the empty mapping, never an error.
#[tokio::test]
async fn test_malformed_body_yields_empty_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rewards/R1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).rewards().get("R1").await;

    assert!(response.is_success());
    assert!(response.json().is_empty());
}

/// A trailing slash on the supplied base address does not double the
/// separator.
#[tokio::test]
async fn test_trailing_slash_base_address() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TremendousClient::new("1234", format!("{}/", mock_server.uri())).unwrap();
    let response = client.products().list(None).await;
    assert!(response.is_success());
}
