//! Verify URL building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each case describes a client configuration, the expected query string,
//! a simulated response, and the expected parse outcome. Comparing parsed
//! JSON (not raw strings) avoids false negatives from field-ordering
//! differences.

use apod_core::{
    Apod, ApodClient, ApodError, ClientConfig, ConceptTags, DateInput, HttpResponse,
};

const BASE_URL: &str = "http://localhost:3000/planetary/apod";

/// Build a client from a vector's `config` object. Dates are raw strings,
/// concept tags are either a JSON bool or a string.
fn client_for(config: &serde_json::Value) -> ApodClient {
    let concept_tags = match config.get("concept_tags") {
        Some(serde_json::Value::Bool(flag)) => Some(ConceptTags::Flag(*flag)),
        Some(serde_json::Value::String(s)) => Some(ConceptTags::Raw(s.clone())),
        _ => None,
    };
    ApodClient::with_base_url(
        BASE_URL,
        ClientConfig {
            api_key: config
                .get("api_key")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            date: config
                .get("date")
                .and_then(|v| v.as_str())
                .map(|s| DateInput::Raw(s.to_string())),
            concept_tags,
            seed: None,
        },
    )
}

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = client_for(&case["config"]);

        // Verify build
        let expected_url = format!("{BASE_URL}{}", case["expected_query"].as_str().unwrap());
        assert_eq!(client.search_url(), expected_url, "{name}: url");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = client.parse_search(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Upstream" => {
                    let ApodError::Upstream(upstream) = err else {
                        panic!("{name}: expected Upstream, got {err:?}");
                    };
                    assert_eq!(
                        upstream.status,
                        sim["status"].as_u64().unwrap() as u16,
                        "{name}: status"
                    );
                    if let Some(code) = case.get("expected_error_code") {
                        assert_eq!(
                            upstream.code.as_deref(),
                            code.as_str(),
                            "{name}: error code"
                        );
                    }
                }
                "Deserialization" => {
                    assert!(
                        matches!(err, ApodError::Deserialization(_)),
                        "{name}: expected Deserialization, got {err:?}"
                    );
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let apod = result.unwrap();
            let expected: Apod =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(apod, expected, "{name}: parsed result");
        }
    }
}
