/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{classify_response, make_http_request, prepare_headers};
use crate::model::requests::RequestOptions;
use crate::model::responses::{TokenRequest, TokenResponse};
use crate::session::cookies::{CookieSource, get_cookie};
use crate::session::tokens::{FileTokenStore, MemoryTokenStore, TokenStore};
use reqwest::Client as HttpInternalClient;
use reqwest::cookie::Jar;
use reqwest::{ClientBuilder, Method, Url};
use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Fetch wrapper for a Django REST API
///
/// Every request goes through [`ApiClient::api_fetch`], which adds:
/// - the CSRF token from the `csrftoken` cookie as `X-CSRFToken`
/// - the API token from the token store as `Authorization: Token <token>`
/// - `Content-Type: application/json` for non-form bodies
///
/// The cookie source and the token store are only read while fetching.
pub struct ApiClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    cookies: Arc<dyn CookieSource>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a client with explicit cookie and token sources
    ///
    /// # Arguments
    /// * `config` - Base URL, timeout and header policies
    /// * `cookies` - Cookie jar the CSRF token is read from
    /// * `tokens` - Store the API token is read from
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(
        config: Config,
        cookies: Arc<dyn CookieSource>,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, AppError> {
        let http_client = Self::builder(&config).build()?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
            cookies,
            tokens,
        })
    }

    /// Creates a client whose CSRF cookie comes from the server
    ///
    /// The transport stores cookies set by responses in a jar, and the same
    /// jar is read for the CSRF token, so a `csrftoken` cookie set by one
    /// response is echoed in the header of later requests.
    pub fn with_cookie_jar(config: Config, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let jar = Arc::new(Jar::default());
        let http_client = Self::builder(&config)
            .cookie_provider(jar.clone())
            .build()?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
            cookies: jar,
            tokens,
        })
    }

    /// Creates a client from the environment
    ///
    /// Uses a server-fed cookie jar, and a [`FileTokenStore`] when
    /// `API_TOKEN_STORE_PATH` is set, an in-memory store otherwise.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::new();
        let tokens: Arc<dyn TokenStore> = match &config.token_store_path {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_cookie_jar(config, tokens)
    }

    fn builder(config: &Config) -> ClientBuilder {
        let builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        match config.rest_api.timeout {
            0 => builder,
            secs => builder.timeout(Duration::from_secs(secs)),
        }
    }

    /// Performs one request and classifies the response
    ///
    /// # Arguments
    /// * `url` - Absolute `http(s)://` URL, or a path joined onto the base URL
    /// * `options` - Method, headers, body and transport options
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Parsed JSON body of a successful response
    /// * `Ok(None)` - The server answered `204 No Content`
    /// * `Err(AppError::Http)` - Non-success status, with the parsed error body
    /// * `Err(AppError::Network)` - Transport failure, unchanged
    pub async fn api_fetch(
        &self,
        url: &str,
        mut options: RequestOptions,
    ) -> Result<Option<Value>, AppError> {
        let url = self.resolve_url(url)?;

        let cookie_header = self.cookies.cookie_header(&url);
        let csrf_token = get_cookie(cookie_header.as_deref(), &self.config.csrf.cookie_name);
        let api_token = self.tokens.get_item(&self.config.auth.token_key).await;
        debug!(
            "Preparing request to {} (csrf token: {}, api token: {})",
            url,
            csrf_token.is_some(),
            api_token.as_deref().is_some_and(|t| !t.is_empty())
        );

        prepare_headers(
            &mut options.headers,
            options.body.as_ref(),
            csrf_token.as_deref(),
            api_token.as_deref(),
            &self.config.csrf,
            &self.config.auth,
        )?;

        let response = make_http_request(&self.http_client, url, options).await?;
        classify_response(response).await
    }

    /// Like [`ApiClient::api_fetch`], deserializing the body into `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, AppError> {
        self.api_fetch(url, options)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(AppError::from)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        self.fetch(path, RequestOptions::new()).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        self.send_json(Method::POST, path, body).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        self.send_json(Method::PUT, path, body).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        self.send_json(Method::PATCH, path, body).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        self.fetch(path, RequestOptions::new().method(Method::DELETE))
            .await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        let options = RequestOptions::new().method(method).json(body)?;
        self.fetch(path, options).await
    }

    /// Exchanges credentials for an API token and stores it
    ///
    /// Any stored token is removed first, since the token endpoint rejects
    /// requests carrying an invalid one. On success the new token is saved
    /// under the configured key and returned.
    pub async fn obtain_token(&self, username: &str, password: &str) -> Result<String, AppError> {
        if username.is_empty() {
            return Err(AppError::InvalidInput("username must not be empty".to_string()));
        }
        self.clear_token().await?;

        let options = RequestOptions::new()
            .method(Method::POST)
            .json(&TokenRequest { username, password })?;
        let response: Option<TokenResponse> =
            self.fetch(&self.config.auth.token_endpoint, options).await?;

        let token = response
            .map(|response| response.token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::Json(serde_json::Error::custom(
                    "token endpoint returned no token",
                ))
            })?;

        self.tokens
            .set_item(&self.config.auth.token_key, &token)
            .await?;
        info!("API token stored for {}", username);
        Ok(token)
    }

    /// Removes the stored API token
    pub async fn clear_token(&self) -> Result<(), AppError> {
        self.tokens.remove_item(&self.config.auth.token_key).await
    }

    /// Resolves a path against the configured base URL
    pub fn resolve_url(&self, path: &str) -> Result<Url, AppError> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        Url::parse(&url).map_err(|e| AppError::InvalidUrl(format!("{url}: {e}")))
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the token store
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }
}
