use api_fetch::model::responses::{HttpFailure, TokenRequest, TokenResponse};
use assert_json_diff::assert_json_eq;
use serde_json::json;

#[test]
fn test_failure_merges_object_fields() {
    let failure = HttpFailure::new(404, Some(json!({"detail": "not found"})));
    assert_eq!(failure.status(), 404);
    assert_eq!(failure.detail(), Some("not found"));
    assert_json_eq!(failure.to_value(), json!({"status": 404, "detail": "not found"}));
}

#[test]
fn test_failure_without_body_is_status_only() {
    let failure = HttpFailure::new(500, None);
    assert!(failure.fields().is_empty());
    assert_eq!(failure.detail(), None);
    assert_json_eq!(failure.to_value(), json!({"status": 500}));
}

#[test]
fn test_failure_validation_errors() {
    let body = json!({"name": ["This field is required."], "price": ["A valid number is required."]});
    let failure = HttpFailure::new(400, Some(body));
    assert_eq!(
        failure.get("name"),
        Some(&json!(["This field is required."]))
    );
    assert_json_eq!(
        failure.to_value(),
        json!({
            "status": 400,
            "name": ["This field is required."],
            "price": ["A valid number is required."]
        })
    );
}

#[test]
fn test_failure_body_status_field_wins_in_merged_view() {
    let failure = HttpFailure::new(409, Some(json!({"status": "conflict"})));
    assert_eq!(failure.status(), 409);
    assert_json_eq!(failure.to_value(), json!({"status": "conflict"}));
}

#[test]
fn test_failure_array_body_spreads_by_index() {
    let failure = HttpFailure::new(400, Some(json!(["first", "second"])));
    assert_json_eq!(
        failure.to_value(),
        json!({"status": 400, "0": "first", "1": "second"})
    );
}

#[test]
fn test_failure_string_body_spreads_by_character() {
    let failure = HttpFailure::new(400, Some(json!("no")));
    assert_json_eq!(failure.to_value(), json!({"status": 400, "0": "n", "1": "o"}));
}

#[test]
fn test_failure_scalar_body_adds_nothing() {
    for body in [json!(42), json!(true), json!(null)] {
        let failure = HttpFailure::new(502, Some(body));
        assert_json_eq!(failure.to_value(), json!({"status": 502}));
    }
}

#[test]
fn test_failure_serializes_merged_view() {
    let failure = HttpFailure::new(403, Some(json!({"detail": "forbidden"})));
    let value = serde_json::to_value(&failure).unwrap();
    assert_json_eq!(value, json!({"status": 403, "detail": "forbidden"}));
}

#[test]
fn test_failure_display() {
    let failure = HttpFailure::new(500, None);
    assert_eq!(failure.to_string(), r#"{"status":500}"#);
}

#[test]
fn test_token_request_serialization() {
    let request = TokenRequest {
        username: "alice",
        password: "secret",
    };
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"username": "alice", "password": "secret"})
    );
}

#[test]
fn test_token_response_deserialization() {
    let response: TokenResponse = serde_json::from_str(r#"{"token": "abc123"}"#).unwrap();
    assert_eq!(response.token, "abc123");
}
