/// Cookie jar sources and CSRF cookie lookup
pub mod cookies;
/// API token stores
pub mod tokens;

pub use cookies::{CookieSource, NoCookies, StaticCookieJar, get_cookie};
pub use tokens::{FileTokenStore, MemoryTokenStore, TokenStore};
