/// Errors raised by cookie construction, lookup, and header parsing.
///
/// Every variant is synchronous and reported before any state is mutated.
/// [`NotFound`](CookieError::NotFound) is an expected outcome when probing
/// for an optional cookie; the other variants point at a caller bug or
/// malformed input.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("cookie name must not be empty")]
    InvalidName,
    #[error("cookie `{0}` was not found")]
    NotFound(String),
    #[error("cookie header is not valid UTF-8")]
    InvalidHeader,
}
