//! HTTP cookies as typed value objects.
//!
//! A [`Cookie`] holds one cookie's response attributes and renders itself to
//! a `Set-Cookie` header fragment. [`Cookies`] is an insertion-ordered,
//! name-keyed collection with logical deletion semantics and a parser for
//! raw `Cookie:` request headers. [`RequestCookies`] builds a collection
//! from an inbound request's cookie parameters.

mod builder;
mod encoding;
mod error;
mod map;
mod request;

pub use builder::CookieBuilder;
pub use error::CookieError;
pub use map::CookieInit;
pub use map::Cookies;
pub use request::RequestCookies;

use std::fmt;

use time::OffsetDateTime;

use crate::encoding::{encode, expires_date};

/// A single HTTP cookie with its response attributes.
///
/// The name is fixed at construction and identifies the cookie inside a
/// [`Cookies`] collection; every other attribute can be mutated afterwards.
/// An `expire` of `0` marks a session cookie and emits no `expires`
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    expire: i64,
    path: String,
    domain: String,
    secure: bool,
    http_only: bool,
}

impl Cookie {
    /// Creates a session cookie with an empty value and default attributes.
    ///
    /// Fails with [`CookieError::InvalidName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CookieError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CookieError::InvalidName);
        }
        Ok(Self {
            name,
            value: String::new(),
            expire: 0,
            path: String::new(),
            domain: String::new(),
            secure: false,
            http_only: false,
        })
    }

    pub fn builder(name: impl Into<String>) -> CookieBuilder {
        CookieBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Expiry instant in epoch seconds; `0` marks a session cookie.
    pub fn expire(&self) -> i64 {
        self.expire
    }

    /// Stores the magnitude of `expire`; the sign is dropped.
    ///
    /// A past instant is still a positive timestamp, so expiring a cookie
    /// into the past goes through unchanged.
    pub fn set_expire(&mut self, expire: i64) {
        self.expire = expire.saturating_abs();
    }

    /// Sets the expiry relative to the current instant.
    ///
    /// The sign of `seconds` is respected: a negative offset lands in the
    /// past and tells the client to discard the cookie.
    pub fn expire_after(&mut self, seconds: i64) {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        self.expire = now.saturating_add(seconds);
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn set_http_only(&mut self, http_only: bool) {
        self.http_only = http_only;
    }

    /// Renders the `Set-Cookie` header fragment for this cookie.
    ///
    /// The attribute order is fixed: `name=value`, then `path`, `domain`,
    /// `expires`, `secure`, `HttpOnly`. Empty `path`/`domain` and a
    /// non-positive `expire` are omitted. Name, value, and attribute values
    /// are percent-encoded.
    pub fn to_cookie_header(&self) -> String {
        use std::fmt::Write;

        let mut header = format!("{}={}", encode(&self.name), encode(&self.value));
        if !self.path.is_empty() {
            let _ = write!(header, "; path={}", encode(&self.path));
        }
        if !self.domain.is_empty() {
            let _ = write!(header, "; domain={}", encode(&self.domain));
        }
        if self.expire > 0 {
            if let Some(date) = expires_date(self.expire) {
                let _ = write!(header, "; expires={}", encode(&date));
            }
        }
        if self.secure {
            header.push_str("; secure");
        }
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        header
    }
}

impl fmt::Display for Cookie {
    /// Displays the cookie's value, not the full header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_header() {
        let cookie = Cookie::builder("name").with_value("value").build().unwrap();
        assert_eq!(cookie.to_cookie_header(), "name=value");
    }

    #[test]
    fn test_full_header_order() {
        let cookie = Cookie::builder("id")
            .with_value("abc")
            .with_expire(1_000_000_000)
            .with_path("/")
            .with_domain("example.com")
            .with_secure(true)
            .with_http_only(true)
            .build()
            .unwrap();
        assert_eq!(
            cookie.to_cookie_header(),
            "id=abc; path=%2F; domain=example.com; \
             expires=Sun%2C%2009-Sep-2001%2001%3A46%3A40%20GMT; secure; HttpOnly"
        );
    }

    #[test]
    fn test_attribute_presence_iff_set() {
        let mut cookie = Cookie::new("a").unwrap();
        let header = cookie.to_cookie_header();
        assert!(!header.contains("path="));
        assert!(!header.contains("domain="));
        assert!(!header.contains("expires="));
        assert!(!header.contains("secure"));
        assert!(!header.contains("HttpOnly"));

        cookie.set_path("/p");
        cookie.set_domain("d.example");
        cookie.set_expire(100);
        cookie.set_secure(true);
        cookie.set_http_only(true);
        let header = cookie.to_cookie_header();
        assert!(header.contains("; path=%2Fp"));
        assert!(header.contains("; domain=d.example"));
        assert!(header.contains("; expires="));
        assert!(header.contains("; secure"));
        assert!(header.contains("; HttpOnly"));
    }

    #[test]
    fn test_session_cookie_emits_no_expires() {
        let cookie = Cookie::builder("sid").with_value("x").build().unwrap();
        assert_eq!(cookie.expire(), 0);
        assert!(!cookie.to_cookie_header().contains("expires="));
    }

    #[test]
    fn test_header_percent_encodes_name_and_value() {
        let cookie = Cookie::builder("user name")
            .with_value("a=b; c")
            .build()
            .unwrap();
        assert_eq!(cookie.to_cookie_header(), "user%20name=a%3Db%3B%20c");
    }

    #[test]
    fn test_set_expire_drops_sign() {
        let mut cookie = Cookie::new("a").unwrap();
        cookie.set_expire(-42);
        assert_eq!(cookie.expire(), 42);
        cookie.set_expire(i64::MIN);
        assert_eq!(cookie.expire(), i64::MAX);
    }

    #[test]
    fn test_expire_after_respects_sign() {
        let mut cookie = Cookie::new("a").unwrap();
        let before = OffsetDateTime::now_utc().unix_timestamp();
        cookie.expire_after(3600);
        let after = OffsetDateTime::now_utc().unix_timestamp();
        assert!(cookie.expire() >= before + 3600);
        assert!(cookie.expire() <= after + 3600);

        cookie.expire_after(-3600);
        let after = OffsetDateTime::now_utc().unix_timestamp();
        assert!(cookie.expire() <= after - 3600 + 1);
        assert!(cookie.expire() > 0);
    }

    #[test]
    fn test_display_is_value() {
        let cookie = Cookie::builder("a").with_value("hello").build().unwrap();
        assert_eq!(cookie.to_string(), "hello");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Cookie::new(""), Err(CookieError::InvalidName)));
    }

    #[test]
    fn test_setters_after_construction() {
        let mut cookie = Cookie::new("theme").unwrap();
        cookie.set_value("dark");
        assert_eq!(cookie.value(), "dark");
        cookie.set_http_only(true);
        assert!(cookie.http_only());
        assert!(!cookie.secure());
    }
}
