use crate::{Cookie, CookieError};

/// Builder for a [`Cookie`] with every attribute set up front.
///
/// Attributes are applied through the cookie's own mutators, so their
/// normalization rules (such as the expiry magnitude policy) hold for built
/// cookies too.
#[derive(Debug, Clone)]
pub struct CookieBuilder {
    name: String,
    value: String,
    expire: i64,
    path: String,
    domain: String,
    secure: bool,
    http_only: bool,
}

impl CookieBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            expire: 0,
            path: String::new(),
            domain: String::new(),
            secure: false,
            http_only: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_expire(mut self, expire: i64) -> Self {
        self.expire = expire;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Validates the name and builds the cookie.
    pub fn build(self) -> Result<Cookie, CookieError> {
        let mut cookie = Cookie::new(self.name)?;
        cookie.set_value(self.value);
        cookie.set_expire(self.expire);
        cookie.set_path(self.path);
        cookie.set_domain(self.domain);
        cookie.set_secure(self.secure);
        cookie.set_http_only(self.http_only);
        Ok(cookie)
    }
}
