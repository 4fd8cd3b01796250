// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::time::SystemTime;

use crate::{
    clamp_to_http_date_range,
    HeaderName,
    HeaderValue,
};

/// An ordered list of header fields. The order of insertion is the order in
/// which the fields are serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    pub fn new() -> HeaderMap {
        HeaderMap::default()
    }

    /// Appends a header to the list of headers. This is used for headers that
    /// can be duplicated, such as `Set-Cookie` and `Link`.
    pub fn append_possible_duplicate(&mut self, header_name: HeaderName, value: HeaderValue) {
        self.headers.push((header_name, value));
    }

    #[must_use]
    pub fn contains(&self, header_name: &HeaderName) -> bool {
        self.headers.iter().any(|(name, _)| name == header_name)
    }

    /// Checks whether the comma-separated field value contains `token`,
    /// compared case-insensitively, e.g. `Connection: keep-alive, Upgrade`.
    #[must_use]
    pub fn contains_token(&self, header_name: &HeaderName, token: &str) -> bool {
        self.get_str(header_name)
            .map(|value| value.split(',').any(|element| element.trim().eq_ignore_ascii_case(token)))
            .unwrap_or(false)
    }

    /// Removes `token` from the comma-separated field value, keeping the other
    /// elements in order. The field is removed when no element is left.
    pub fn remove_token(&mut self, header_name: &HeaderName, token: &str) {
        let Some(value) = self.get_str(header_name) else {
            return;
        };

        let remaining: Vec<&str> = value.split(',')
            .map(str::trim)
            .filter(|element| !element.is_empty() && !element.eq_ignore_ascii_case(token))
            .collect();

        if remaining.is_empty() {
            self.remove(header_name);
        } else {
            let remaining = remaining.join(", ");
            self.set(header_name.clone(), remaining.into());
        }
    }

    /// Appends `token` to the comma-separated field value, unless it is
    /// already present.
    pub fn add_token(&mut self, header_name: HeaderName, token: &'static str) {
        if self.contains_token(&header_name, token) {
            return;
        }

        match self.get_str(&header_name) {
            Some(value) if !value.trim().is_empty() => {
                let value = format!("{}, {token}", value.trim());
                self.set(header_name, value.into());
            }
            _ => self.set(header_name, token.into()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn get(&self, header_name: &HeaderName) -> Option<&HeaderValue> {
        self.headers.iter()
            .find(|(name, _)| name == header_name)
            .map(|(_, value)| value)
    }

    /// Returns the value if it's stored as a string.
    #[must_use]
    pub fn get_str(&self, header_name: &HeaderName) -> Option<&str> {
        self.get(header_name).and_then(HeaderValue::as_str_no_convert)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.headers.iter()
    }

    pub fn remove(&mut self, header_name: &HeaderName) {
        self.headers.retain(|(name, _)| name != header_name);
    }

    /// Overrides the existing value in place, keeping its position, or
    /// appends the field when it isn't present.
    pub fn set(&mut self, header_name: HeaderName, value: HeaderValue) {
        for (name, existing_value) in &mut self.headers {
            if name == &header_name {
                *existing_value = value;
                return;
            }
        }

        self.headers.push((header_name, value));
    }
}

//
// Header-specific methods
//
impl HeaderMap {
    #[must_use]
    pub fn date(&self) -> Option<SystemTime> {
        self.get(&HeaderName::Date)
            .and_then(|value| SystemTime::try_from(value).ok())
    }

    /// Sets the `Date` header. Times outside the years 1970 to 9999 are clamped
    /// to the nearest expressible date.
    pub fn set_date(&mut self, date_time: SystemTime) {
        self.set(HeaderName::Date, HeaderValue::DateTime(clamp_to_http_date_range(date_time)));
    }

    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.get(&HeaderName::ContentLength)
            .and_then(HeaderValue::parse_number)
    }

    pub fn set_content_length(&mut self, length: u64) {
        self.set(HeaderName::ContentLength, HeaderValue::Size(length));
    }

    pub fn remove_content_length(&mut self) {
        self.remove(&HeaderName::ContentLength);
    }

    #[must_use]
    pub fn connection(&self) -> Option<&str> {
        self.get_str(&HeaderName::Connection)
    }

    pub fn set_connection(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::Connection, value.into());
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.get_str(&HeaderName::Host)
    }

    pub fn set_host(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::Host, value.into());
    }

    #[must_use]
    pub fn upgrade(&self) -> Option<&str> {
        self.get_str(&HeaderName::Upgrade)
    }

    pub fn set_upgrade(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::Upgrade, value.into());
    }

    #[must_use]
    pub fn sec_web_socket_key(&self) -> Option<&str> {
        self.get_str(&HeaderName::SecWebSocketKey)
    }

    pub fn set_sec_web_socket_key(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::SecWebSocketKey, value.into());
    }

    #[must_use]
    pub fn sec_web_socket_accept(&self) -> Option<&str> {
        self.get_str(&HeaderName::SecWebSocketAccept)
    }

    pub fn set_sec_web_socket_accept(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::SecWebSocketAccept, value.into());
    }

    #[must_use]
    pub fn sec_web_socket_protocol(&self) -> Option<&str> {
        self.get_str(&HeaderName::SecWebSocketProtocol)
    }

    pub fn set_sec_web_socket_protocol(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::SecWebSocketProtocol, value.into());
    }

    #[must_use]
    pub fn sec_web_socket_version(&self) -> Option<&str> {
        self.get_str(&HeaderName::SecWebSocketVersion)
    }

    pub fn set_sec_web_socket_version(&mut self, value: impl Into<HeaderValue>) {
        self.set(HeaderName::SecWebSocketVersion, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[test]
    fn test_set_keeps_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.set(HeaderName::Host, "example.com".into());
        headers.set(HeaderName::Upgrade, "websocket".into());
        headers.set(HeaderName::Connection, "Upgrade".into());
        headers.set(HeaderName::Host, "example.org".into());

        let names: Vec<_> = headers.iter().map(|(name, _)| name.to_string_h1()).collect();
        assert_eq!(names, ["Host", "Upgrade", "Connection"]);
        assert_eq!(headers.host(), Some("example.org"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.set(HeaderName::from("UPGRADE"), "websocket".into());
        assert_eq!(headers.get_str(&HeaderName::from("upgrade")), Some("websocket"));
        assert_eq!(headers.upgrade(), Some("websocket"));
    }

    #[test]
    fn test_date_round_trip() {
        let date = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut headers = HeaderMap::new();
        headers.set_date(date);
        assert_eq!(headers.date(), Some(date));

        let rendered = headers.get(&HeaderName::Date).unwrap().to_string();
        headers.set(HeaderName::Date, rendered.into());
        assert_eq!(headers.date(), Some(date));
    }

    #[test]
    fn test_date_out_of_range() {
        let mut headers = HeaderMap::new();
        headers.set_date(SystemTime::UNIX_EPOCH - Duration::from_secs(1));
        assert_eq!(headers.date(), Some(SystemTime::UNIX_EPOCH));
        assert_eq!(headers.get(&HeaderName::Date).unwrap().to_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_content_length_round_trip() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.content_length(), None);

        headers.set_content_length(0);
        assert_eq!(headers.content_length(), Some(0));

        headers.set(HeaderName::ContentLength, "1234".into());
        assert_eq!(headers.content_length(), Some(1234));

        headers.remove_content_length();
        assert!(!headers.contains(&HeaderName::ContentLength));
    }

    #[rstest]
    #[case("Upgrade", "upgrade", true)]
    #[case("keep-alive, Upgrade", "upgrade", true)]
    #[case("keep-alive,close", "close", true)]
    #[case("keep-alive", "close", false)]
    #[case("", "close", false)]
    fn test_contains_token(#[case] value: &'static str, #[case] token: &str, #[case] expected: bool) {
        let mut headers = HeaderMap::new();
        headers.set_connection(value);
        assert_eq!(headers.contains_token(&HeaderName::Connection, token), expected);
    }

    #[rstest]
    #[case(Some("close"), None)]
    #[case(Some("Upgrade"), Some("Upgrade"))]
    #[case(Some("Upgrade, close"), Some("Upgrade"))]
    #[case(Some("Close,Upgrade"), Some("Upgrade"))]
    #[case(None, None)]
    fn test_remove_token(#[case] value: Option<&'static str>, #[case] expected: Option<&str>) {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.set_connection(value);
        }
        headers.remove_token(&HeaderName::Connection, "close");
        assert_eq!(headers.connection(), expected);
    }

    #[rstest]
    #[case(None, "close")]
    #[case(Some(""), "close")]
    #[case(Some("close"), "close")]
    #[case(Some("Upgrade"), "Upgrade, close")]
    fn test_add_token(#[case] value: Option<&'static str>, #[case] expected: &str) {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.set_connection(value);
        }
        headers.add_token(HeaderName::Connection, "close");
        assert_eq!(headers.connection(), Some(expected));
    }
}
