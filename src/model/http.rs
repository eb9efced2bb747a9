/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::{AuthConfig, CsrfConfig};
use crate::constants::JSON_CONTENT_TYPE;
use crate::error::AppError;
use crate::model::requests::{RequestBody, RequestOptions};
use crate::model::responses::HttpFailure;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, warn};

/// Fills in the headers every API request carries
///
/// - `Content-Type: application/json` unless the caller set a content type
///   or the body is a multipart form
/// - the CSRF header, unless the caller set it and `csrf.respect_caller_header`
///   is on; nothing is added when there is no CSRF token
/// - `Authorization: <scheme> <token>` when an API token is available,
///   replacing the caller's value unless `auth.respect_caller_header` is on
///
/// Headers present with an empty value count as not set.
///
/// # Errors
///
/// Returns [`AppError::InvalidHeader`] when a configured header name or a
/// token cannot be used as a header.
pub fn prepare_headers(
    headers: &mut HeaderMap,
    body: Option<&RequestBody>,
    csrf_token: Option<&str>,
    api_token: Option<&str>,
    csrf: &CsrfConfig,
    auth: &AuthConfig,
) -> Result<(), AppError> {
    let is_form = body.is_some_and(RequestBody::is_form);
    if !is_form && !has_value(headers, &CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    if let Some(token) = csrf_token {
        let csrf_header = HeaderName::from_bytes(csrf.header_name.as_bytes())?;
        if !(csrf.respect_caller_header && has_value(headers, &csrf_header)) {
            headers.insert(csrf_header, HeaderValue::from_str(token)?);
        }
    }

    if let Some(token) = api_token.filter(|token| !token.is_empty()) {
        if !(auth.respect_caller_header && has_value(headers, &AUTHORIZATION)) {
            let mut value = HeaderValue::from_str(&format!("{} {}", auth.scheme, token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
    }

    Ok(())
}

fn has_value(headers: &HeaderMap, name: &HeaderName) -> bool {
    headers.get(name).is_some_and(|value| !value.is_empty())
}

/// Sends a single request, without retries
///
/// The response is returned whatever its status; use [`classify_response`]
/// to turn it into a result.
///
/// # Errors
///
/// Transport failures are returned as [`AppError::Network`] unchanged.
pub async fn make_http_request(
    client: &Client,
    url: Url,
    options: RequestOptions,
) -> Result<Response, AppError> {
    let RequestOptions {
        method,
        mut headers,
        body,
        query,
        timeout,
    } = options;

    debug!("{} {}", method, url);

    if body.as_ref().is_some_and(RequestBody::is_form) && headers.remove(CONTENT_TYPE).is_some() {
        warn!("Dropping caller Content-Type for multipart body to {}", url);
    }

    let mut request = client.request(method, url).headers(headers);

    if !query.is_empty() {
        request = request.query(&query);
    }
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    request = match body {
        Some(RequestBody::Json(value)) => request.body(serde_json::to_vec(&value)?),
        Some(RequestBody::Text(text)) => request.body(text),
        Some(RequestBody::Bytes(bytes)) => request.body(bytes),
        Some(RequestBody::Form(form)) => request.multipart(form),
        None => request,
    };

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Turns a response into the wrapper's outcome
///
/// - outside 2xx: [`AppError::Http`] with the status and the body parsed as
///   JSON, or no fields when the body is missing or not JSON
/// - `204 No Content`: `Ok(None)`, the body is not read
/// - any other success: the body parsed as JSON
///
/// # Errors
///
/// [`AppError::Http`] for non-success statuses, [`AppError::Json`] when a
/// success body is not JSON, [`AppError::Network`] when reading it fails.
pub async fn classify_response(response: Response) -> Result<Option<Value>, AppError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());
        error!("Request failed with status {}", status);
        return Err(AppError::Http(HttpFailure::new(status.as_u16(), body)));
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}
