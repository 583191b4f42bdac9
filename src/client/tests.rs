use super::*;

use std::time::Duration;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CompaniesHouse {
    let config = ClientConfig::new("test-key", server.uri());
    CompaniesHouse::new(config).expect("client must construct")
}

#[tokio::test]
async fn company_profile_passes_body_through_unchanged() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "company_number": "11799251",
        "company_name": "SWISHFUND LIMITED",
        "type": "ltd",
        "links": { "self": "/company/11799251" }
    });

    Mock::given(method("GET"))
        .and(path("/company/11799251"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let profile = ch.company_profile("11799251").await.unwrap();

    assert_eq!(profile, body);
}

#[tokio::test]
async fn requests_carry_basic_auth_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.company_profile("11799251").await.unwrap();
}

#[tokio::test]
async fn company_number_appears_verbatim_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/SC123456/filing-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.company_filing_history("SC123456", &FilingHistoryOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn non_success_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/00000000"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"company-profile-not-found"}"#),
        )
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let err = ch.company_profile("00000000").await.unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert!(body.contains("company-profile-not-found"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_becomes_transport_error_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new("test-key", server.uri());
    let http = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let ch = CompaniesHouse::with_http_client(config, http).unwrap();

    let err = ch.company_profile("11799251").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    // Mock::expect(1) verifies on drop that exactly one request arrived.
}

#[tokio::test]
async fn invalid_json_on_success_becomes_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let err = ch.company_profile("11799251").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn set_optional_parameters_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/companies"))
        .and(query_param("q", "Swishfund"))
        .and(query_param("items_per_page", "20"))
        .and(query_param("restrictions", "active-companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let options = SearchCompaniesOptions {
        items_per_page: Some(20),
        restrictions: Some("active-companies".to_string()),
        ..Default::default()
    };
    ch.search_companies("Swishfund", &options).await.unwrap();
}

#[tokio::test]
async fn unset_optional_parameters_are_omitted() {
    let server = MockServer::start().await;

    // Default options must produce a bare query string with only `q`.
    Mock::given(method("GET"))
        .and(path("/search/officers"))
        .and(query_param("q", "Swishfund"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let result = ch.search_officers("Swishfund", &PageOptions::default()).await.unwrap();
    assert_eq!(result["items"], serde_json::json!([]));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(!received[0].url.query().unwrap_or("").contains("items_per_page"));
}

#[tokio::test]
async fn officer_appointment_path_is_nested_under_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251/officers/abc123/appointments/ap1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.company_officer_appointment("11799251", "abc123", "ap1").await.unwrap();
}

#[tokio::test]
async fn disqualification_paths_have_no_officers_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/disqualified-officers/natural/off1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.natural_officer_disqualifications("off1").await.unwrap();
}

#[tokio::test]
async fn company_charge_path_has_single_company_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251/charges/ch1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.company_charge("11799251", "ch1").await.unwrap();
}

#[tokio::test]
async fn super_secure_psc_path_includes_super_secure_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251/persons-with-significant-control/super-secure/ss1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.super_secure_person_with_significant_control("11799251", "ss1").await.unwrap();
}

#[tokio::test]
async fn super_secure_beneficial_owner_path_is_nested_under_psc() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/company/11799251/persons-with-significant-control/super-secure-beneficial-owner/ss1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.super_secure_beneficial_owner("11799251", "ss1").await.unwrap();
}

#[tokio::test]
async fn psc_paths_are_built_from_fixed_segments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251/persons-with-significant-control/legal-person/psc1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.legal_person_with_significant_control("11799251", "psc1").await.unwrap();
}

#[tokio::test]
async fn advanced_search_sends_only_set_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advanced-search/companies"))
        .and(query_param("company_name_includes", "Swishfund"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    let filters = AdvancedSearchFilters {
        company_name_includes: Some("Swishfund".to_string()),
        ..Default::default()
    };
    ch.advanced_company_search(&filters).await.unwrap();
}

#[tokio::test]
async fn dissolved_search_sends_search_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dissolved-search/companies"))
        .and(query_param("q", "Swishfund"))
        .and(query_param("search_type", "best-match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let ch = client_for(&server);
    ch.search_dissolved_companies("Swishfund", "best-match", &DissolvedSearchOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn sandbox_flag_routes_to_sandbox_host() {
    let production = MockServer::start().await;
    let sandbox = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/11799251"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "env": "sandbox" })))
        .expect(1)
        .mount(&sandbox)
        .await;

    let config = ClientConfig::new("test-key", production.uri())
        .with_sandbox_host(sandbox.uri())
        .with_sandbox(true);
    let ch = CompaniesHouse::new(config).unwrap();

    let profile = ch.company_profile("11799251").await.unwrap();
    assert_eq!(profile["env"], "sandbox");
    assert!(production.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn sandbox_flag_without_sandbox_host_fails_at_construction() {
    let config = ClientConfig::new("test-key", "https://api.example.test").with_sandbox(true);
    let err = CompaniesHouse::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_api_key_fails_at_construction() {
    let config = ClientConfig::new("", "https://api.example.test");
    let err = CompaniesHouse::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}
