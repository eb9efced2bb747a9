/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("api-fetch/", env!("CARGO_PKG_VERSION"));
/// Default base URL used to resolve relative paths
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default client-wide request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Name of the cookie that carries the CSRF token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Header the CSRF token is echoed in
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
/// Token store key holding the API token
pub const API_TOKEN_KEY: &str = "apiToken";
/// Scheme used in the `Authorization` header
pub const AUTH_SCHEME: &str = "Token";
/// Endpoint exchanging credentials for an API token
pub const TOKEN_AUTH_ENDPOINT: &str = "/api/token-auth/";
/// Content type set when the caller does not provide one
pub const JSON_CONTENT_TYPE: &str = "application/json";
