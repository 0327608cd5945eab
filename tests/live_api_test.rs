//! Live integration tests against the real API.
//!
//! These tests require a valid token in `TCA_API_TOKEN` (plus optional
//! `TCA_API_URL`, `TCA_VISITOR_ID` and `TCA_TIMEOUT`) and are ignored by
//! default. Run them with:
//!
//! ```text
//! TCA_API_TOKEN=... cargo test --test live_api_test -- --ignored
//! ```

use serde_json::json;
use thecompaniesapi::Client;

fn live_client() -> Option<Client> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    if std::env::var("TCA_API_TOKEN").is_err() {
        eprintln!("TCA_API_TOKEN not set, skipping live test");
        return None;
    }
    Some(Client::from_env().expect("client from environment"))
}

#[tokio::test]
#[ignore = "requires TCA_API_TOKEN and network access"]
async fn api_health() {
    let Some(client) = live_client() else { return };
    let response = client.invoke("fetchApiHealth", json!({})).await.unwrap();
    assert!(response.is_object());
}

#[tokio::test]
#[ignore = "requires TCA_API_TOKEN and network access"]
async fn search_companies_basic() {
    let Some(client) = live_client() else { return };
    let response = client
        .invoke(
            "searchCompanies",
            json!({"page": 1, "size": 2, "search": "technology"}),
        )
        .await
        .unwrap();
    assert!(response.get("companies").is_some());
    assert!(response.get("meta").is_some());
}

#[tokio::test]
#[ignore = "requires TCA_API_TOKEN and network access"]
async fn search_companies_with_query_conditions() {
    let Some(client) = live_client() else { return };
    let response = client
        .invoke(
            "searchCompaniesPost",
            json!({
                "page": 1,
                "size": 2,
                "query": [{
                    "attribute": "about.industries",
                    "operator": "or",
                    "sign": "equals",
                    "values": ["technology"],
                }],
            }),
        )
        .await
        .unwrap();
    assert!(response.get("companies").is_some());
}
