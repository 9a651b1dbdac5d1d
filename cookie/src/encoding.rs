use percent_encoding::{AsciiSet, CONTROLS};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'%');

/// https://www.rfc-editor.org/rfc/rfc6265#section-4.1.1 + '(', ')'
const COOKIE: &AsciiSet = &USERINFO.add(b'(').add(b')').add(b',');

/// Percent-encode a cookie name, value, or attribute value.
pub(crate) fn encode(string: &str) -> impl std::fmt::Display + '_ {
    percent_encoding::percent_encode(string.as_bytes(), COOKIE)
}

/// Percent-decode one side of a `key=value` pair from a `Cookie:` header.
pub(crate) fn decode(string: &str) -> String {
    percent_encoding::percent_decode_str(string)
        .decode_utf8_lossy()
        .into_owned()
}

/// Timestamp format of the `expires` attribute, e.g.
/// `Thu, 01-Jan-1970 00:00:00 GMT`.
const EXPIRES_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day]-[month repr:short]-[year] [hour]:[minute]:[second] GMT"
);

/// Renders an epoch-seconds instant as an `expires` date stamp.
///
/// Returns `None` for instants the calendar cannot represent.
pub(crate) fn expires_date(epoch: i64) -> Option<String> {
    let date = OffsetDateTime::from_unix_timestamp(epoch).ok()?;
    date.format(EXPIRES_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode("hello world").to_string(), "hello%20world");
        assert_eq!(encode("a=b;c").to_string(), "a%3Db%3Bc");
        assert_eq!(encode("plain-text_1.0").to_string(), "plain-text_1.0");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let original = "value with spaces; and = signs";
        let encoded = encode(original).to_string();
        assert_eq!(decode(&encoded), original);
    }

    #[test]
    fn test_expires_date_epoch() {
        assert_eq!(
            expires_date(0).as_deref(),
            Some("Thu, 01-Jan-1970 00:00:00 GMT")
        );
    }

    #[test]
    fn test_expires_date_known_instant() {
        assert_eq!(
            expires_date(1_000_000_000).as_deref(),
            Some("Sun, 09-Sep-2001 01:46:40 GMT")
        );
    }

    #[test]
    fn test_expires_date_out_of_range() {
        assert_eq!(expires_date(i64::MAX), None);
    }
}
