/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error handling for the fetch wrapper
//!
//! Only one failure is classified by the wrapper itself: a response outside
//! the 2xx range ([`AppError::Http`]). Everything else is either a transport
//! error propagated as-is or a local construction error.

use crate::model::responses::HttpFailure;
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The server answered with a non-success status
    Http(HttpFailure),
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// Body could not be parsed or did not match the requested type
    Json(serde_json::Error),
    /// Token store file could not be read or written
    Io(std::io::Error),
    /// A header name or value could not be built
    InvalidHeader(String),
    /// The target address could not be resolved to a URL
    InvalidUrl(String),
    /// Invalid argument supplied by the caller
    InvalidInput(String),
}

impl AppError {
    /// Status code of an HTTP failure, `None` for every other kind
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http(failure) => StatusCode::from_u16(failure.status()).ok(),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The HTTP failure, if this is one
    #[must_use]
    pub fn as_http(&self) -> Option<&HttpFailure> {
        match self {
            AppError::Http(failure) => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(failure) => write!(f, "http error: {failure}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<HttpFailure> for AppError {
    fn from(failure: HttpFailure) -> Self {
        AppError::Http(failure)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}
