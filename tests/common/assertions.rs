//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a successful analysis and return its JSON
pub fn assert_analysis(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    for field in ["hex", "undertone", "depth", "clarity", "season"] {
        assert!(json[field].is_string(), "Expected {field} to be a string");
    }
    for channel in ["r", "g", "b"] {
        assert!(json["rgb"][channel].is_u64(), "Expected rgb.{channel}");
    }
    for component in ["l", "a", "b"] {
        assert!(json["lab"][component].is_number(), "Expected lab.{component}");
    }
    let confidence = json["confidence"].as_f64().expect("Expected confidence");
    assert!((0.0..=1.0).contains(&confidence));
    assert!(json.get("error").is_none(), "Unexpected error field: {json}");

    json
}

/// Assert a 400 response with a `{status, error}` body; returns the message
pub fn assert_client_error(response: &TestResponse) -> String {
    assert_status(response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], 400);
    assert!(json.get("season").is_none(), "Client errors carry no payload");
    json["error"]
        .as_str()
        .expect("Expected error message")
        .to_string()
}

/// Assert a 500 response carrying the safe default payload; returns the
/// error message
pub fn assert_safe_default(response: &TestResponse) -> String {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = response.json();

    assert_eq!(json["undertone"], "neutral");
    assert_eq!(json["depth"], "medium");
    assert_eq!(json["clarity"], "muted");
    assert_eq!(json["season"], "autumn");
    assert_eq!(json["confidence"], 0.0);
    json["error"]
        .as_str()
        .expect("Expected error field on masked failure")
        .to_string()
}
