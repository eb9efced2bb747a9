/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # api-fetch Prelude
//!
//! Brings the commonly used types into scope with a single import.
//!
//! ```rust,ignore
//! use api_fetch::prelude::*;
//!
//! let tokens = Arc::new(MemoryTokenStore::with_item(API_TOKEN_KEY, "secret"));
//! let client = ApiClient::with_cookie_jar(Config::new(), tokens)?;
//! let orders: Option<Value> = client.get("/api/sales/orders/").await?;
//! ```

// ============================================================================
// CONFIGURATION AND CLIENT
// ============================================================================

pub use crate::application::client::ApiClient;
pub use crate::application::config::{AuthConfig, Config, CsrfConfig, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;
pub use crate::model::responses::HttpFailure;

// ============================================================================
// REQUESTS
// ============================================================================

pub use crate::model::requests::{RequestBody, RequestOptions};

// ============================================================================
// COOKIES AND TOKENS
// ============================================================================

pub use crate::session::cookies::{CookieSource, NoCookies, StaticCookieJar, get_cookie};
pub use crate::session::tokens::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// UTILITIES AND CONSTANTS
// ============================================================================

pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use reqwest::multipart::Form;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
