// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpVersion {
    Http09,
    Http10,
    #[default]
    Http11,
    Http2,
    Http3,
}

impl HttpVersion {
    /// Formats the [`HttpVersion`] to a HTTP-Version, as specified by RFC 9112.
    ///
    /// # References
    /// * [RFC 9112 Section 2.3](https://www.rfc-editor.org/rfc/rfc9112.html#name-http-version)
    pub fn to_http_version(&self) -> &'static str {
        match self {
            Self::Http09 => "HTTP/0.9",
            Self::Http10 => "HTTP/1.0",
            Self::Http11 => "HTTP/1.1",
            Self::Http2 => "HTTP/2.0",
            Self::Http3 => "HTTP/3.0",
        }
    }

    /// Parses an HTTP-Version, e.g. `HTTP/1.1`.
    pub fn parse(input: &str) -> Option<Self> {
        Some(match input {
            "HTTP/0.9" => Self::Http09,
            "HTTP/1.0" => Self::Http10,
            "HTTP/1.1" => Self::Http11,
            "HTTP/2" | "HTTP/2.0" => Self::Http2,
            "HTTP/3" | "HTTP/3.0" => Self::Http3,
            _ => return None,
        })
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_http_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpVersion::Http09)]
    #[case(HttpVersion::Http10)]
    #[case(HttpVersion::Http11)]
    #[case(HttpVersion::Http2)]
    #[case(HttpVersion::Http3)]
    fn test_parse_canonical_form(#[case] version: HttpVersion) {
        assert_eq!(HttpVersion::parse(version.to_http_version()), Some(version));
    }

    #[test]
    fn test_default_is_http11() {
        assert_eq!(HttpVersion::default().to_string(), "HTTP/1.1");
    }

    #[rstest]
    #[case("HTTP/1.")]
    #[case("http/1.1")]
    #[case("HTTP/1.1.1")]
    #[case("")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(HttpVersion::parse(input), None);
    }
}
