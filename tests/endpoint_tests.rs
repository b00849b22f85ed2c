//! End-to-end tests for the endpoint operations against a stub server.
//!
//! Each test starts a `wiremock` server, points a `RestClient` at it and
//! checks both the outgoing request and the returned body.

use gbif::clients::SDK_VERSION;
use gbif::rest::resources::{
    DatasetParams, NameBackboneParams, NameUsageParams, OccurrenceSearchParams, Registry,
    RegistryParams, Species,
};
use gbif::rest::{DatasetData, NetworkData, NodeData, OrganizationData, PageMeta};
use gbif::{
    BaseUrl, CallOptions, GbifConfig, GbifError, HttpError, Occurrences, Password, RestClient,
    TransportOptions,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NETWORK_UUID: &str = "2b7c7b4f-4d4f-40d3-94de-c28b6fa054a6";

fn client_for(server: &MockServer) -> RestClient {
    let config = GbifConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn helianthus() -> serde_json::Value {
    json!({
        "usageKey": 3119134,
        "scientificName": "Helianthus L.",
        "canonicalName": "Helianthus",
        "rank": "GENUS",
        "status": "ACCEPTED",
        "confidence": 97,
        "matchType": "EXACT",
        "kingdom": "Plantae"
    })
}

// ============================================================================
// Species
// ============================================================================

#[tokio::test]
async fn test_name_backbone_returns_fixture_and_sends_only_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/species/match"))
        .and(query_param("name", "Helianthus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helianthus()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = Species::name_backbone(&client, &NameBackboneParams::new("Helianthus"), None)
        .await
        .unwrap();

    assert_eq!(body["usageKey"], 3119134);
    assert_eq!(body["canonicalName"], "Helianthus");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, vec!["name"]);
}

#[tokio::test]
async fn test_name_backbone_sends_blank_name_and_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/species/match"))
        .and(query_param("name", "   "))
        .respond_with(ResponseTemplate::new(400).set_body_string("name is required"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Species::name_backbone(&client, &NameBackboneParams::new("   "), None)
        .await
        .unwrap_err();

    assert!(!error.is_validation());
    assert!(matches!(
        error,
        GbifError::Http(HttpError::BadRequest(ref details)) if details.message == "name is required"
    ));
}

#[tokio::test]
async fn test_name_usage_keeps_trailing_slash_and_default_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/species/"))
        .and(query_param("limit", "100"))
        .and(query_param("language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "limit": 100, "endOfRecords": false, "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = NameUsageParams {
        language: Some("de".to_string()),
        ..Default::default()
    };
    let body = Species::name_usage(&client, &params, None).await.unwrap();

    let meta = PageMeta::from_value(&body).unwrap();
    assert_eq!(meta.next_offset(), Some(100));
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/species/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helianthus()))
        .expect(1)
        .mount(&server)
        .await;

    let config = GbifConfig::builder()
        .base_url(BaseUrl::new(format!("{}/v1/", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let body = Species::name_backbone(&client, &NameBackboneParams::new("Helianthus"), None)
        .await
        .unwrap();
    assert_eq!(body["usageKey"], 3119134);
}

// ============================================================================
// Occurrences
// ============================================================================

#[tokio::test]
async fn test_occurrence_search_repeats_list_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/occurrence/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "limit": 300,
            "endOfRecords": true,
            "count": 0,
            "results": [],
            "facets": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = OccurrenceSearchParams {
        issue: vec!["A".to_string(), "B".to_string()],
        ..Default::default()
    };
    let body = Occurrences::search(&client, &params, None).await.unwrap();

    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["offset", "limit", "endOfRecords", "count", "results", "facets"]
    );

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("issue=A&issue=B"), "{query}");
    assert!(!query.contains("%5B"), "{query}");

    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("limit".to_string(), "300".to_string())));
    assert!(pairs.contains(&("offset".to_string(), "0".to_string())));
}

// ============================================================================
// Registry
// ============================================================================

#[tokio::test]
async fn test_registry_routes_reach_expected_paths() {
    let server = MockServer::start().await;

    for route in [
        "/network",
        "/network/2b7c7b4f-4d4f-40d3-94de-c28b6fa054a6/constituents",
        "/node/country/US",
        "/organization/deleted",
        "/dataset/metadata/1234/document",
        "/dataset/2b7c7b4f-4d4f-40d3-94de-c28b6fa054a6/metrics",
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"route": route})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let params = RegistryParams::default();

    let body = Registry::networks(&client, NetworkData::All, None, &params, None)
        .await
        .unwrap();
    assert_eq!(body["route"], "/network");

    let body = Registry::networks(
        &client,
        NetworkData::Constituents,
        Some(NETWORK_UUID),
        &params,
        None,
    )
    .await
    .unwrap();
    assert_eq!(body["route"], format!("/network/{NETWORK_UUID}/constituents"));

    let body = Registry::nodes(&client, NodeData::Country, None, Some("US"), &params, None)
        .await
        .unwrap();
    assert_eq!(body["route"], "/node/country/US");

    let body = Registry::organizations(&client, OrganizationData::Deleted, None, &params, None)
        .await
        .unwrap();
    assert_eq!(body["route"], "/organization/deleted");

    let body = Registry::datasets(
        &client,
        DatasetData::Metadata,
        None,
        Some("1234"),
        &DatasetParams::default(),
        None,
    )
    .await
    .unwrap();
    assert_eq!(body["route"], "/dataset/metadata/1234/document");

    let body = Registry::dataset_metrics(&client, NETWORK_UUID, None)
        .await
        .unwrap();
    assert_eq!(body["route"], format!("/dataset/{NETWORK_UUID}/metrics"));
}

#[tokio::test]
async fn test_validation_errors_send_no_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RegistryParams::default();

    let result = Registry::organizations(&client, OrganizationData::Contact, None, &params, None).await;
    assert!(matches!(result, Err(GbifError::MissingIdentifier { .. })));

    let result = Registry::nodes(&client, NodeData::Country, None, Some("USA"), &params, None).await;
    assert!(matches!(result, Err(GbifError::InvalidCountryCode { .. })));

    let result = client.get("/", None, None).await;
    assert!(matches!(
        result,
        Err(GbifError::Http(HttpError::InvalidRequest(_)))
    ));
}

// ============================================================================
// Executor behavior
// ============================================================================

#[tokio::test]
async fn test_status_codes_map_to_typed_errors() {
    for code in [400_u16, 404, 429, 500, 502, 503, 504] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/species/match"))
            .respond_with(
                ResponseTemplate::new(code)
                    .set_body_string("upstream said no")
                    .insert_header("x-request-id", "req-42"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = Species::name_backbone(&client, &NameBackboneParams::new("Puma"), None)
            .await
            .unwrap_err();

        let GbifError::Http(http) = &error else {
            panic!("expected HTTP error for {code}, got {error:?}");
        };
        let matched = match code {
            400 => matches!(http, HttpError::BadRequest(_)),
            404 => matches!(http, HttpError::NotFound(_)),
            500 => matches!(http, HttpError::InternalServerError(_)),
            502 => matches!(http, HttpError::BadGateway(_)),
            503 => matches!(http, HttpError::ServiceUnavailable(_)),
            504 => matches!(http, HttpError::GatewayTimeout(_)),
            _ => matches!(http, HttpError::Response(_)),
        };
        assert!(matched, "unexpected variant for {code}: {http:?}");

        let details = http.response().unwrap();
        assert_eq!(details.code, code);
        assert_eq!(details.message, "upstream said no");
        assert_eq!(details.error_reference.as_deref(), Some("req-42"));
        assert_eq!(error.status(), Some(code));
    }
}

#[tokio::test]
async fn test_empty_body_is_null_and_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/node"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/network"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let body = client.get("node", None, None).await.unwrap();
    assert!(body.is_null());

    let error = client.get("network", None, None).await.unwrap_err();
    assert!(matches!(
        error,
        GbifError::Http(HttpError::Decode { ref path, .. }) if path == "network"
    ));
}

#[tokio::test]
async fn test_user_agent_and_accept_headers() {
    let server = MockServer::start().await;
    let user_agent = format!("field-app/2.0 | gbif-rust/v{SDK_VERSION} reqwest/v0.11");

    Mock::given(method("GET"))
        .and(header("user-agent", user_agent.as_str()))
        .and(header("x-user-agent", user_agent.as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = GbifConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("field-app/2.0")
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    client.get("occurrence/search", None, None).await.unwrap();
}

#[tokio::test]
async fn test_basic_auth_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dataset"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = GbifConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_name("alice")
        .password(Password::new("secret").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    Registry::datasets(
        &client,
        DatasetData::All,
        None,
        None,
        &DatasetParams::default(),
        None,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_per_call_timeout_surfaces_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CallOptions::new()
        .verbose(true)
        .transport(TransportOptions::new().timeout(Duration::from_millis(50)));

    let error = client.get("node", None, Some(options)).await.unwrap_err();
    assert!(matches!(error, GbifError::Http(HttpError::Network(_))));
}

#[tokio::test]
async fn test_per_call_transport_builds_dedicated_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/installation/deleted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CallOptions::new().transport(
        TransportOptions::new()
            .timeout(Duration::from_secs(5))
            .open_timeout(Duration::from_secs(2)),
    );

    let body = client
        .get("/installation/deleted", None, Some(options))
        .await
        .unwrap();
    assert_eq!(body["count"], 3);
}
