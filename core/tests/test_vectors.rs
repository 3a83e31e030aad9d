//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected classifications. Comparing parsed JSON (not raw strings)
//! avoids false negatives from field-ordering differences.

use std::time::Duration;

use jadx_bridge::{ConnectionConfig, HttpResponse, JadxClient, PluginResponse};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8650";

fn client(auth_token: &str) -> JadxClient {
    let mut config = ConnectionConfig::default();
    config.set_url(BASE_URL).unwrap();
    config.set_auth_token(auth_token);
    JadxClient::new(config)
}

/// Parse `[["k", "v"], ...]` into owned pairs.
fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Build the `PluginResponse` described by `{"kind": ..., "value": ...}`.
fn expected(case: &Value) -> PluginResponse {
    let result = &case["expected_result"];
    let value = result["value"].clone();
    match result["kind"].as_str().unwrap() {
        "structured" => PluginResponse::Structured(value),
        "text" => PluginResponse::Text(value.as_str().unwrap().to_string()),
        "error" => PluginResponse::Error(value.as_str().unwrap().to_string()),
        other => panic!("unknown result kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

#[test]
fn fetch_test_vectors() {
    let raw = include_str!("../../test-vectors/fetch.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let c = client(case["auth_token"].as_str().unwrap());
        let expected_req = &case["expected_request"];

        // Verify build
        let params = pairs(&case["params"]);
        let borrowed: Vec<(&str, &str)> =
            params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let req = c.build_fetch_request(case["endpoint"].as_str().unwrap(), &borrowed);
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.query, pairs(&expected_req["query"]), "{name}: query");
        assert_eq!(req.headers, pairs(&expected_req["headers"]), "{name}: headers");
        assert_eq!(req.timeout, Duration::from_secs(60), "{name}: timeout");

        // Verify parse
        let result = c.parse_fetch_response(simulated(case));
        assert_eq!(result, expected(case), "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[test]
fn health_test_vectors() {
    let raw = include_str!("../../test-vectors/health.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let c = client(case["auth_token"].as_str().unwrap());
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_health_request();
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert!(req.query.is_empty(), "{name}: query should be empty");
        assert_eq!(req.headers, pairs(&expected_req["headers"]), "{name}: headers");

        // Verify parse
        let result = c.parse_health_response(simulated(case));
        assert_eq!(result, expected(case), "{name}: parsed result");
    }
}
