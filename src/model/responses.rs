/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A response outside the 2xx range
///
/// Holds the numeric status and whatever fields could be parsed from the
/// response body. The merged view returned by [`HttpFailure::to_value`] has
/// the shape `{"status": <code>, ...body fields}`; a body field named
/// `status` takes precedence over the code in that view, while
/// [`HttpFailure::status`] always returns the code from the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    status: u16,
    fields: Map<String, Value>,
}

impl HttpFailure {
    /// Builds a failure from a status code and the parsed body, if any
    ///
    /// Objects contribute their fields, arrays one field per element keyed by
    /// index, strings one field per character keyed by index. Numbers,
    /// booleans and `null` contribute nothing.
    #[must_use]
    pub fn new(status: u16, body: Option<Value>) -> Self {
        let mut fields = Map::new();
        if let Some(body) = body {
            spread_into(&mut fields, body);
        }
        Self { status, fields }
    }

    /// Status code of the response
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Fields parsed from the response body
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A single body field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `detail` message Django REST Framework puts in error bodies
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.fields.get("detail").and_then(Value::as_str)
    }

    /// Merged `{status, ...fields}` object
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut merged = Map::new();
        merged.insert("status".to_string(), Value::from(self.status));
        merged.extend(self.fields.clone());
        Value::Object(merged)
    }
}

fn spread_into(fields: &mut Map<String, Value>, body: Value) {
    match body {
        Value::Object(map) => fields.extend(map),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                fields.insert(index.to_string(), item);
            }
        }
        Value::String(text) => {
            for (index, ch) in text.chars().enumerate() {
                fields.insert(index.to_string(), Value::String(ch.to_string()));
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

impl Serialize for HttpFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Credentials posted to the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Account username
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body returned by the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The API token
    pub token: String,
}
