// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use phf::phf_map;
use unicase::UniCase;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderName {
    Other(String),

    CacheControl,
    Connection,
    ContentLength,
    ContentType,
    Date,
    Host,
    KeepAlive,
    Origin,
    SecWebSocketAccept,
    SecWebSocketExtensions,
    SecWebSocketKey,
    SecWebSocketProtocol,
    SecWebSocketVersion,
    Server,
    TransferEncoding,
    Upgrade,
    UserAgent,
}

static STRING_TO_HEADER_NAME_MAP: phf::Map<UniCase<&'static str>, HeaderName> = phf_map!(
    UniCase::ascii("cache-control") => HeaderName::CacheControl,
    UniCase::ascii("connection") => HeaderName::Connection,
    UniCase::ascii("content-length") => HeaderName::ContentLength,
    UniCase::ascii("content-type") => HeaderName::ContentType,
    UniCase::ascii("date") => HeaderName::Date,
    UniCase::ascii("host") => HeaderName::Host,
    UniCase::ascii("keep-alive") => HeaderName::KeepAlive,
    UniCase::ascii("origin") => HeaderName::Origin,
    UniCase::ascii("sec-websocket-accept") => HeaderName::SecWebSocketAccept,
    UniCase::ascii("sec-websocket-extensions") => HeaderName::SecWebSocketExtensions,
    UniCase::ascii("sec-websocket-key") => HeaderName::SecWebSocketKey,
    UniCase::ascii("sec-websocket-protocol") => HeaderName::SecWebSocketProtocol,
    UniCase::ascii("sec-websocket-version") => HeaderName::SecWebSocketVersion,
    UniCase::ascii("server") => HeaderName::Server,
    UniCase::ascii("transfer-encoding") => HeaderName::TransferEncoding,
    UniCase::ascii("upgrade") => HeaderName::Upgrade,
    UniCase::ascii("user-agent") => HeaderName::UserAgent,
);

impl From<String> for HeaderName {
    #[must_use]
    fn from(mut value: String) -> Self {
        match STRING_TO_HEADER_NAME_MAP.get(&UniCase::ascii(value.as_str())) {
            Some(header_name) => header_name.clone(),
            None => {
                value.make_ascii_lowercase();
                HeaderName::Other(value)
            }
        }
    }
}

impl From<&str> for HeaderName {
    #[must_use]
    fn from(value: &str) -> Self {
        match STRING_TO_HEADER_NAME_MAP.get(&UniCase::ascii(value)) {
            Some(header_name) => header_name.clone(),
            None => HeaderName::Other(value.to_ascii_lowercase()),
        }
    }
}

impl HeaderName {
    /// The field name with the casing commonly used in HTTP/1.x messages.
    #[must_use]
    pub fn to_string_h1(&self) -> &str {
        match self {
            HeaderName::Other(str) => str,

            HeaderName::CacheControl => "Cache-Control",
            HeaderName::Connection => "Connection",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::Date => "Date",
            HeaderName::Host => "Host",
            HeaderName::KeepAlive => "Keep-Alive",
            HeaderName::Origin => "Origin",
            HeaderName::SecWebSocketAccept => "Sec-WebSocket-Accept",
            HeaderName::SecWebSocketExtensions => "Sec-WebSocket-Extensions",
            HeaderName::SecWebSocketKey => "Sec-WebSocket-Key",
            HeaderName::SecWebSocketProtocol => "Sec-WebSocket-Protocol",
            HeaderName::SecWebSocketVersion => "Sec-WebSocket-Version",
            HeaderName::Server => "Server",
            HeaderName::TransferEncoding => "Transfer-Encoding",
            HeaderName::Upgrade => "Upgrade",
            HeaderName::UserAgent => "User-Agent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Checks whether the names in the `STRING_TO_HEADER_NAME_MAP` match the
    /// `to_string_h1()` output case-insensitively, and whether that output
    /// uses uppercase letters at the start of each word.
    #[test]
    fn test_header_name_to_string() {
        for (str, name) in STRING_TO_HEADER_NAME_MAP.entries() {
            assert_eq!(str, &UniCase::ascii(name.to_string_h1()));
            assert!(name.to_string_h1().is_ascii());

            assert!(!name.to_string_h1().split('-').any(|str| !str.is_empty() && str.chars().next().unwrap().is_ascii_lowercase()),
                "HTTP/1.1 Header names should have uppercase letters");
        }
    }

    #[rstest]
    #[case("Sec-WebSocket-Key", HeaderName::SecWebSocketKey)]
    #[case("sec-websocket-key", HeaderName::SecWebSocketKey)]
    #[case("SEC-WEBSOCKET-KEY", HeaderName::SecWebSocketKey)]
    #[case("X-Custom", HeaderName::Other("x-custom".into()))]
    fn test_from_is_case_insensitive(#[case] input: &str, #[case] expected: HeaderName) {
        assert_eq!(HeaderName::from(input), expected);
        assert_eq!(HeaderName::from(input.to_string()), expected);
    }
}
