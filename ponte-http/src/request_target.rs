// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, fmt};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RequestTarget {
    Origin {
        path: String,
        query: String,
    },
    Absolute(String),
    Asterisk,
}

impl Default for RequestTarget {
    fn default() -> Self {
        Self::Origin { path: "/".into(), query: String::new() }
    }
}

impl RequestTarget {
    pub fn parse<'a>(input: impl Into<Cow<'a, str>>) -> Option<Self> {
        let input = input.into();
        if input == "*" {
            return Some(Self::Asterisk);
        }

        if input.starts_with('/') {
            if let Some((path, query)) = input.split_once('?') {
                return Some(Self::Origin {
                    path: path.to_string(),
                    query: query.to_string(),
                });
            }

            return Some(Self::Origin { path: input.into_owned(), query: String::new() });
        }

        if input.starts_with("http://") || input.starts_with("https://")
                || input.starts_with("ws://") || input.starts_with("wss://") {
            return Some(RequestTarget::Absolute(input.into_owned()));
        }

        None
    }

    /// Returns the path of the request target, without the query.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RequestTarget::Origin{ path, .. } => path,
            RequestTarget::Absolute(string) => string,
            RequestTarget::Asterisk => "*",
        }
    }
}

/// Formats the target as it appears in the request-line.
impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestTarget::Origin { path, query } if !query.is_empty() => write!(f, "{path}?{query}"),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*", Some(RequestTarget::Asterisk))]
    #[case("**", None)]
    #[case(" *", None)]
    #[case("* ", None)]
    #[case("/", Some(RequestTarget::Origin { path: "/".into(), query: String::new() }))]
    #[case("/chat", Some(RequestTarget::Origin { path: "/chat".into(), query: String::new() }))]
    #[case("/?t=t", Some(RequestTarget::Origin { path: "/".into(), query: "t=t".into() }))]
    #[case("ws://localhost/chat", Some(RequestTarget::Absolute("ws://localhost/chat".into())))]
    #[case("chat", None)]
    fn test_parse(#[case] input: &str, #[case] expected: Option<RequestTarget>) {
        assert_eq!(RequestTarget::parse(input), expected);
    }

    #[rstest]
    #[case("/chat?room=1")]
    #[case("/")]
    #[case("*")]
    fn test_display_matches_input(#[case] input: &str) {
        assert_eq!(RequestTarget::parse(input).unwrap().to_string(), input);
    }
}
