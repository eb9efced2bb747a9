use crate::constants::{
    API_TOKEN_KEY, AUTH_SCHEME, CSRF_COOKIE_NAME, CSRF_HEADER_NAME, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS, TOKEN_AUTH_ENDPOINT,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// CSRF cookie and header handling
    pub csrf: CsrfConfig,
    /// API token handling
    pub auth: AuthConfig,
    /// File backing the persistent token store, if any
    pub token_store_path: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL relative paths are joined onto
    pub base_url: String,
    /// Timeout in seconds for REST API requests (0 disables it)
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Where the CSRF token comes from and where it goes
pub struct CsrfConfig {
    /// Cookie holding the token
    pub cookie_name: String,
    /// Header the token is echoed in
    pub header_name: String,
    /// Keep a CSRF header the caller already set
    pub respect_caller_header: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Where the API token comes from and how it is sent
pub struct AuthConfig {
    /// Token store key holding the token
    pub token_key: String,
    /// Scheme prefix of the `Authorization` header
    pub scheme: String,
    /// Keep an `Authorization` header the caller already set
    pub respect_caller_header: bool,
    /// Endpoint exchanging username and password for a token
    pub token_endpoint: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: CSRF_COOKIE_NAME.to_string(),
            header_name: CSRF_HEADER_NAME.to_string(),
            respect_caller_header: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: API_TOKEN_KEY.to_string(),
            scheme: AUTH_SCHEME.to_string(),
            respect_caller_header: false,
            token_endpoint: TOKEN_AUTH_ENDPOINT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and the `.env` file
    ///
    /// Every value missing from the environment falls back to the library
    /// default; unparseable values are logged and replaced by the default.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let rest_defaults = RestApiConfig::default();
        let csrf_defaults = CsrfConfig::default();
        let auth_defaults = AuthConfig::default();

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_BASE_URL", rest_defaults.base_url),
                timeout: get_env_or_default("API_TIMEOUT", rest_defaults.timeout),
            },
            csrf: CsrfConfig {
                cookie_name: get_env_or_default("API_CSRF_COOKIE_NAME", csrf_defaults.cookie_name),
                header_name: get_env_or_default("API_CSRF_HEADER_NAME", csrf_defaults.header_name),
                respect_caller_header: get_env_or_default(
                    "API_CSRF_RESPECT_CALLER",
                    csrf_defaults.respect_caller_header,
                ),
            },
            auth: AuthConfig {
                token_key: get_env_or_default("API_TOKEN_KEY", auth_defaults.token_key),
                scheme: get_env_or_default("API_AUTH_SCHEME", auth_defaults.scheme),
                respect_caller_header: get_env_or_default(
                    "API_AUTH_RESPECT_CALLER",
                    auth_defaults.respect_caller_header,
                ),
                token_endpoint: get_env_or_default(
                    "API_TOKEN_ENDPOINT",
                    auth_defaults.token_endpoint,
                ),
            },
            token_store_path: get_env_or_none("API_TOKEN_STORE_PATH"),
        }
    }

    /// Creates a configuration with library defaults and the given base URL
    ///
    /// The environment is not consulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
            csrf: CsrfConfig::default(),
            auth: AuthConfig::default(),
            token_store_path: None,
        }
    }
}
