/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # api-fetch
//!
//! A thin fetch wrapper for Django REST APIs. Every request goes through
//! [`ApiClient::api_fetch`](application::client::ApiClient::api_fetch), which:
//!
//! - reads the `csrftoken` cookie and echoes it in the `X-CSRFToken` header
//! - reads `apiToken` from a token store and sends `Authorization: Token <value>`
//! - defaults `Content-Type` to `application/json` (except for multipart forms)
//! - turns non-success responses into [`AppError::Http`](error::AppError::Http)
//! - returns `None` for `204 No Content`
//!
//! The cookie jar and token store are injected, so the client runs the same
//! against a live server or in tests.
//!
//! ```rust
//! use api_fetch::session::cookies::get_cookie;
//!
//! let token = get_cookie(Some("a=1; csrftoken=abc%20def"), "csrftoken");
//! assert_eq!(token.as_deref(), Some("abc def"));
//! ```

/// Client, configuration and request orchestration
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error type
pub mod error;
/// Request, response and wire helpers
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Cookie and token sources
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
