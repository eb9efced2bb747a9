use api_fetch::application::config::{AuthConfig, CsrfConfig};
use api_fetch::error::AppError;
use api_fetch::model::http::prepare_headers;
use api_fetch::model::requests::RequestBody;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use serde_json::json;

fn prepare(
    headers: &mut HeaderMap,
    body: Option<&RequestBody>,
    csrf_token: Option<&str>,
    api_token: Option<&str>,
) {
    prepare_headers(
        headers,
        body,
        csrf_token,
        api_token,
        &CsrfConfig::default(),
        &AuthConfig::default(),
    )
    .expect("headers should be valid");
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[test]
fn test_json_content_type_without_body() {
    let mut headers = HeaderMap::new();
    prepare(&mut headers, None, None, None);
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
}

#[test]
fn test_json_content_type_with_json_body() {
    let mut headers = HeaderMap::new();
    let body = RequestBody::Json(json!({"name": "Widget"}));
    prepare(&mut headers, Some(&body), None, None);
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
}

#[test]
fn test_json_content_type_with_text_body() {
    let mut headers = HeaderMap::new();
    let body = RequestBody::Text("plain".to_string());
    prepare(&mut headers, Some(&body), None, None);
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
}

#[test]
fn test_caller_content_type_kept() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    prepare(&mut headers, None, None, None);
    assert_eq!(header(&headers, "content-type"), Some("text/csv"));
}

#[test]
fn test_empty_caller_content_type_replaced() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(""));
    prepare(&mut headers, None, None, None);
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
}

#[test]
fn test_form_body_has_no_content_type() {
    let mut headers = HeaderMap::new();
    let body = RequestBody::Form(Form::new().text("name", "Widget"));
    prepare(&mut headers, Some(&body), Some("abc"), None);
    assert!(headers.get(CONTENT_TYPE).is_none());
    assert_eq!(header(&headers, "x-csrftoken"), Some("abc"));
}

#[test]
fn test_csrf_header_set() {
    let mut headers = HeaderMap::new();
    prepare(&mut headers, None, Some("abc def"), None);
    assert_eq!(header(&headers, "X-CSRFToken"), Some("abc def"));
}

#[test]
fn test_csrf_header_absent_without_cookie() {
    let mut headers = HeaderMap::new();
    prepare(&mut headers, None, None, None);
    assert!(headers.get("x-csrftoken").is_none());
}

#[test]
fn test_caller_csrf_header_kept() {
    let mut headers = HeaderMap::new();
    headers.insert("x-csrftoken", HeaderValue::from_static("mine"));
    prepare(&mut headers, None, Some("cookie"), None);
    assert_eq!(header(&headers, "x-csrftoken"), Some("mine"));
}

#[test]
fn test_empty_caller_csrf_header_replaced() {
    let mut headers = HeaderMap::new();
    headers.insert("x-csrftoken", HeaderValue::from_static(""));
    prepare(&mut headers, None, Some("cookie"), None);
    assert_eq!(header(&headers, "x-csrftoken"), Some("cookie"));
}

#[test]
fn test_caller_csrf_header_overridden_when_not_respected() {
    let mut headers = HeaderMap::new();
    headers.insert("x-csrftoken", HeaderValue::from_static("mine"));
    let csrf = CsrfConfig {
        respect_caller_header: false,
        ..CsrfConfig::default()
    };
    prepare_headers(
        &mut headers,
        None,
        Some("cookie"),
        None,
        &csrf,
        &AuthConfig::default(),
    )
    .unwrap();
    assert_eq!(header(&headers, "x-csrftoken"), Some("cookie"));
}

#[test]
fn test_custom_csrf_header_name() {
    let mut headers = HeaderMap::new();
    let csrf = CsrfConfig {
        header_name: "X-XSRF-TOKEN".to_string(),
        ..CsrfConfig::default()
    };
    prepare_headers(&mut headers, None, Some("abc"), None, &csrf, &AuthConfig::default())
        .unwrap();
    assert_eq!(header(&headers, "x-xsrf-token"), Some("abc"));
    assert!(headers.get("x-csrftoken").is_none());
}

#[test]
fn test_authorization_header_set() {
    let mut headers = HeaderMap::new();
    prepare(&mut headers, None, None, Some("tok123"));
    assert_eq!(header(&headers, "authorization"), Some("Token tok123"));
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
}

#[test]
fn test_authorization_overrides_caller_by_default() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
    prepare(&mut headers, None, None, Some("tok123"));
    assert_eq!(header(&headers, "authorization"), Some("Token tok123"));
}

#[test]
fn test_authorization_caller_kept_when_respected() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
    let auth = AuthConfig {
        respect_caller_header: true,
        ..AuthConfig::default()
    };
    prepare_headers(
        &mut headers,
        None,
        None,
        Some("tok123"),
        &CsrfConfig::default(),
        &auth,
    )
    .unwrap();
    assert_eq!(header(&headers, "authorization"), Some("Bearer other"));
}

#[test]
fn test_caller_authorization_untouched_without_token() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
    prepare(&mut headers, None, None, None);
    assert_eq!(header(&headers, "authorization"), Some("Bearer other"));
}

#[test]
fn test_empty_token_is_ignored() {
    let mut headers = HeaderMap::new();
    prepare(&mut headers, None, None, Some(""));
    assert!(headers.get(AUTHORIZATION).is_none());
}

#[test]
fn test_custom_auth_scheme() {
    let mut headers = HeaderMap::new();
    let auth = AuthConfig {
        scheme: "Bearer".to_string(),
        ..AuthConfig::default()
    };
    prepare_headers(
        &mut headers,
        None,
        None,
        Some("jwt"),
        &CsrfConfig::default(),
        &auth,
    )
    .unwrap();
    assert_eq!(header(&headers, "authorization"), Some("Bearer jwt"));
}

#[test]
fn test_invalid_token_is_an_error() {
    let mut headers = HeaderMap::new();
    let result = prepare_headers(
        &mut headers,
        None,
        None,
        Some("bad\ntoken"),
        &CsrfConfig::default(),
        &AuthConfig::default(),
    );
    match result {
        Err(AppError::InvalidHeader(_)) => (),
        other => panic!("Expected InvalidHeader error, got {other:?}"),
    }
}

#[test]
fn test_invalid_csrf_header_name_is_an_error() {
    let mut headers = HeaderMap::new();
    let csrf = CsrfConfig {
        header_name: "bad header".to_string(),
        ..CsrfConfig::default()
    };
    let result = prepare_headers(
        &mut headers,
        None,
        Some("abc"),
        None,
        &csrf,
        &AuthConfig::default(),
    );
    assert!(matches!(result, Err(AppError::InvalidHeader(_))));
}

#[test]
fn test_all_headers_together() {
    let mut headers = HeaderMap::new();
    let body = RequestBody::Json(json!([1, 2, 3]));
    prepare(&mut headers, Some(&body), Some("csrf"), Some("tok"));
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
    assert_eq!(header(&headers, "x-csrftoken"), Some("csrf"));
    assert_eq!(header(&headers, "authorization"), Some("Token tok"));
    assert_eq!(headers.len(), 3);
}
