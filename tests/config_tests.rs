//! Configuration tests: the process-wide default and transport overrides.
//!
//! The global configuration is shared by every test in this binary, so all
//! assertions that touch it live in a single test.

use gbif::{
    BaseUrl, BindOptions, ConfigError, GbifConfig, HttpClient, Password, ProxyOptions,
    RestClient, TransportOptions,
};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Global configuration
// ============================================================================

#[tokio::test]
async fn test_global_config_is_copied_into_new_clients() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    for (server, label) in [(&first, "first"), (&second, "second")] {
        Mock::given(method("GET"))
            .and(path("/network"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"server": label})))
            .mount(server)
            .await;
    }

    assert_eq!(GbifConfig::global().base_url().as_ref(), BaseUrl::DEFAULT);

    GbifConfig::set_global(
        GbifConfig::builder()
            .base_url(BaseUrl::new(first.uri()).unwrap())
            .build()
            .unwrap(),
    );
    let early = RestClient::from_global().unwrap();

    GbifConfig::set_global(
        GbifConfig::builder()
            .base_url(BaseUrl::new(second.uri()).unwrap())
            .verbose(true)
            .build()
            .unwrap(),
    );
    let late = RestClient::from_global().unwrap();

    assert!(!early.verbose());
    assert!(late.verbose());

    let body = early.get("network", None, None).await.unwrap();
    assert_eq!(body["server"], "first");
    let body = late.get("network", None, None).await.unwrap();
    assert_eq!(body["server"], "second");

    GbifConfig::reset_global();
    assert_eq!(GbifConfig::global().base_url().as_ref(), BaseUrl::DEFAULT);
    assert!(!GbifConfig::global().verbose());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_invalid_values_rejected_on_construction() {
    assert!(matches!(
        BaseUrl::new("ftp://api.gbif.org"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    assert!(matches!(
        ProxyOptions::new("not a uri"),
        Err(ConfigError::InvalidProxyUri { .. })
    ));
    assert!(matches!(
        GbifConfig::builder().user_name("").build(),
        Err(ConfigError::EmptyUserName)
    ));
}

#[test]
fn test_client_builds_with_full_transport() {
    let transport = TransportOptions::new()
        .timeout(Duration::from_secs(20))
        .open_timeout(Duration::from_secs(5))
        .proxy(
            ProxyOptions::new("http://proxy.internal:3128")
                .unwrap()
                .with_credentials("bob", Password::new("hunter2").unwrap()),
        )
        .bind(BindOptions::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0));

    let config = GbifConfig::builder()
        .transport(transport)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    assert_eq!(client.base_url().as_ref(), BaseUrl::DEFAULT);
    assert!(!client.has_credentials());
    assert!(!format!("{config:?}").contains("hunter2"));
}
