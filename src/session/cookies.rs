/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Cookie jar access
//!
//! The wrapper only ever reads cookies. Where they come from is decided by a
//! [`CookieSource`]: a fixed string, nothing at all, or the `reqwest` jar the
//! HTTP client stores server-set cookies in.

use percent_encoding::percent_decode_str;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

/// Provides the cookie string (`name=value; name2=value2`) for a request
pub trait CookieSource: Send + Sync {
    /// Cookie string applicable to `url`, `None` when there is no jar
    fn cookie_header(&self, url: &Url) -> Option<String>;
}

/// A fixed cookie string, the same for every URL
#[derive(Debug, Clone, Default)]
pub struct StaticCookieJar {
    cookies: String,
}

impl StaticCookieJar {
    /// Creates a jar from a raw cookie string
    pub fn new(cookies: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
        }
    }
}

impl CookieSource for StaticCookieJar {
    fn cookie_header(&self, _url: &Url) -> Option<String> {
        Some(self.cookies.clone())
    }
}

/// A cookie source with no jar at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCookies;

impl CookieSource for NoCookies {
    fn cookie_header(&self, _url: &Url) -> Option<String> {
        None
    }
}

impl CookieSource for Jar {
    fn cookie_header(&self, url: &Url) -> Option<String> {
        self.cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }
}

/// Looks up a cookie by name and returns its URL-decoded value
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `name=` wins. Returns `None` when the jar is missing, empty, or has no
/// such cookie.
///
/// Malformed percent sequences are kept as written and invalid UTF-8 is
/// replaced, so the lookup itself never fails.
#[must_use]
pub fn get_cookie(jar: Option<&str>, name: &str) -> Option<String> {
    let jar = jar.filter(|jar| !jar.is_empty())?;
    jar.split(';').map(str::trim).find_map(|entry| {
        entry
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(decode_value)
    })
}

fn decode_value(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
