/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Payload of a request
#[derive(Debug)]
pub enum RequestBody {
    /// JSON document, serialized when the request is sent
    Json(Value),
    /// Raw text, sent as-is
    Text(String),
    /// Raw bytes, sent as-is
    Bytes(Vec<u8>),
    /// Multipart form; the transport sets its own content type and boundary
    Form(Form),
}

impl RequestBody {
    /// Whether this is a multipart form
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(self, RequestBody::Form(_))
    }
}

/// Options for a single request
///
/// `headers` is filled in by the client before the request is sent.
/// `query` and `timeout` are handed to the transport unchanged.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// HTTP method, `GET` by default
    pub method: Method,
    /// Request headers
    pub headers: HeaderMap,
    /// Optional payload
    pub body: Option<RequestBody>,
    /// Query string pairs appended to the URL
    pub query: Vec<(String, String)>,
    /// Per-request timeout, overriding the client-wide one
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Empty `GET` options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets a header, replacing any previous value for the same name
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Serializes `body` as the JSON payload
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Sets a raw text payload
    #[must_use]
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    /// Sets a raw byte payload
    #[must_use]
    pub fn bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(RequestBody::Bytes(body.into()));
        self
    }

    /// Sets a multipart form payload
    #[must_use]
    pub fn form(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }

    /// Appends a query string pair
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets a per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
