use http::{header, HeaderMap};
use indexmap::IndexMap;
use time::OffsetDateTime;

use crate::encoding::decode;
use crate::{Cookie, CookieError};

/// Seconds subtracted from the current instant when a cookie is deleted:
/// three days, far enough in the past for any client to purge it.
const DELETE_OFFSET: i64 = 60 * 60 * 24 * 3;

/// A construction entry for [`Cookies::with_cookies`].
///
/// Either a ready-made cookie, which keeps its own name as the collection
/// key, or a bare value that gets a default-attribute cookie built around
/// the map key. `None` converts to an empty value.
#[derive(Debug, Clone)]
pub enum CookieInit {
    Cookie(Cookie),
    Value(String),
}

impl From<Cookie> for CookieInit {
    fn from(cookie: Cookie) -> Self {
        Self::Cookie(cookie)
    }
}

impl From<String> for CookieInit {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for CookieInit {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl<T: Into<CookieInit>> From<Option<T>> for CookieInit {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::Value(String::new()), Into::into)
    }
}

/// An insertion-ordered collection of cookies keyed by name.
///
/// Each name maps to exactly one [`Cookie`]. Insertion order is preserved so
/// header emission is deterministic. [`delete`](Cookies::delete) is logical:
/// it moves the cookie's expiry into the past and keeps the entry
/// addressable, while [`remove`](Cookies::remove) drops it outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    cookies: IndexMap<String, Cookie>,
}

impl Cookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from `(key, entry)` pairs.
    ///
    /// A [`CookieInit::Cookie`] entry is keyed by the cookie's own name, not
    /// the supplied key. A bare value builds a default-attribute cookie from
    /// the key and fails with [`CookieError::InvalidName`] when the key is
    /// empty. Duplicate names resolve last-write-wins.
    pub fn with_cookies<I, K, V>(entries: I) -> Result<Self, CookieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CookieInit>,
    {
        let mut cookies = Self::new();
        for (key, entry) in entries {
            match entry.into() {
                CookieInit::Cookie(cookie) => cookies.insert(cookie),
                CookieInit::Value(value) => {
                    let cookie = Cookie::builder(key).with_value(value).build()?;
                    cookies.insert(cookie);
                }
            }
        }
        Ok(cookies)
    }

    /// Looks up a cookie by name.
    ///
    /// Fails with [`CookieError::NotFound`] for an absent name; use
    /// [`has`](Self::has) to probe without an error.
    pub fn get(&self, name: &str) -> Result<&Cookie, CookieError> {
        self.cookies
            .get(name)
            .ok_or_else(|| CookieError::NotFound(name.to_owned()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Cookie, CookieError> {
        self.cookies
            .get_mut(name)
            .ok_or_else(|| CookieError::NotFound(name.to_owned()))
    }

    /// Inserts a cookie under its own name, replacing any previous entry.
    pub fn insert(&mut self, cookie: Cookie) {
        self.cookies.insert(cookie.name().to_owned(), cookie);
    }

    /// Overwrites the entry for `name` with a fresh default-attribute cookie
    /// holding `value`. Attributes beyond the value go through
    /// [`Cookie::builder`] and [`insert`](Self::insert).
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CookieError> {
        let cookie = Cookie::builder(name).with_value(value).build()?;
        self.insert(cookie);
        Ok(())
    }

    /// Marks the cookie for client-side deletion by moving its expiry three
    /// days into the past. The entry stays in the collection; propagates
    /// [`CookieError::NotFound`] for an absent name.
    pub fn delete(&mut self, name: &str) -> Result<(), CookieError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let cookie = self.get_mut(name)?;
        cookie.set_expire(now - DELETE_OFFSET);
        #[cfg(feature = "tracing")]
        tracing::debug!("cookie {name} marked for deletion");
        Ok(())
    }

    /// Membership probe; never errors.
    pub fn has(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Removes the entry entirely, unlike [`delete`](Self::delete).
    /// Preserves the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        self.cookies.shift_remove(name)
    }

    /// One rendered `Set-Cookie` line per cookie, in insertion order.
    pub fn to_headers(&self) -> IndexMap<String, String> {
        self.cookies
            .iter()
            .map(|(name, cookie)| (name.clone(), cookie.to_cookie_header()))
            .collect()
    }

    /// The plain name→value view of the collection, in insertion order.
    pub fn to_cookie_params(&self) -> IndexMap<String, String> {
        self.cookies
            .iter()
            .map(|(name, cookie)| (name.clone(), cookie.value().to_owned()))
            .collect()
    }

    /// Borrows the backing store directly.
    pub fn cookies(&self) -> &IndexMap<String, Cookie> {
        &self.cookies
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Iterates over the cookies in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Cookie> {
        self.cookies.values()
    }

    /// Parses a raw `Cookie:` request header into a name→value mapping.
    ///
    /// The trailing CR/LF is stripped. Pieces are separated by `;` plus
    /// optional whitespace and split on the first `=` only; pieces without
    /// an `=` are dropped. Both sides are percent-decoded. The first
    /// occurrence of a name wins.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn parse_header(header: &str) -> IndexMap<String, String> {
        let header = header.trim_end_matches(['\r', '\n']);
        let mut cookies = IndexMap::new();
        for piece in header.split(';') {
            let Some((key, value)) = piece.trim_start().split_once('=') else {
                continue;
            };
            let key = decode(key);
            if !cookies.contains_key(&key) {
                cookies.insert(key, decode(value));
            }
        }
        cookies
    }

    /// Parses the first `Cookie` header of `headers`, if any.
    ///
    /// A request may carry several `Cookie` header instances; only the first
    /// one is consulted, and an absent header yields an empty mapping. A
    /// value that is not valid UTF-8 fails with
    /// [`CookieError::InvalidHeader`].
    pub fn parse_request_headers(
        headers: &HeaderMap,
    ) -> Result<IndexMap<String, String>, CookieError> {
        let Some(value) = headers.get(header::COOKIE) else {
            return Ok(IndexMap::new());
        };
        let raw = value.to_str().map_err(|_| CookieError::InvalidHeader)?;
        Ok(Self::parse_header(raw))
    }
}

impl std::ops::Index<&str> for Cookies {
    type Output = Cookie;

    /// Panicking indexed read; use [`Cookies::get`] for a fallible lookup.
    fn index(&self, name: &str) -> &Cookie {
        &self.cookies[name]
    }
}

impl<'a> IntoIterator for &'a Cookies {
    type Item = &'a Cookie;
    type IntoIter = indexmap::map::Values<'a, String, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
