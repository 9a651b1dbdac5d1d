use std::ops::{Deref, DerefMut};

use http::HeaderMap;

use crate::{CookieError, CookieInit, Cookies};

/// Cookies sent by a client, built from a request's cookie parameters.
///
/// The request is an injected collaborator: its header view, or an already
/// extracted name→value mapping, is passed in explicitly rather than read
/// from ambient state. Derefs to [`Cookies`] for lookup and export.
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    cookies: Cookies,
}

impl RequestCookies {
    /// Builds a collection from plain `(name, value)` pairs.
    pub fn from_cookie_params<I, K, V>(params: I) -> Result<Self, CookieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = params
            .into_iter()
            .map(|(name, value)| -> (String, CookieInit) {
                (name.into(), CookieInit::Value(value.into()))
            });
        let cookies = Cookies::with_cookies(entries)?;
        Ok(Self { cookies })
    }

    /// Returns a new instance built from `params`; `self` is left untouched.
    #[allow(clippy::unused_self)]
    pub fn with_cookie_params<I, K, V>(&self, params: I) -> Result<Self, CookieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_cookie_params(params)
    }

    /// Builds a collection from a request's `Cookie` header.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, CookieError> {
        let params = Cookies::parse_request_headers(headers)?;
        Self::from_cookie_params(params)
    }
}

impl Deref for RequestCookies {
    type Target = Cookies;

    fn deref(&self) -> &Cookies {
        &self.cookies
    }
}

impl DerefMut for RequestCookies {
    fn deref_mut(&mut self) -> &mut Cookies {
        &mut self.cookies
    }
}

impl From<RequestCookies> for Cookies {
    fn from(request: RequestCookies) -> Self {
        request.cookies
    }
}
