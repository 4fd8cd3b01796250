// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Write;
use std::time::{Duration, SystemTime};

use strum_macros::AsRefStr;

/// Represents a value of a header.
///
/// Typed values (dates, sizes) are only formatted when the message is
/// serialized, so setting the same header twice doesn't cost a round trip
/// through a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeaderValue {
    StaticString(&'static str),
    String(String),
    DateTime(SystemTime),
    Size(u64),
}

impl HeaderValue {
    /// Returns the value as a string, but does not convert it to a string if
    /// it is some other non-convertible type.
    #[must_use]
    pub fn as_str_no_convert(&self) -> Option<&str> {
        match self {
            HeaderValue::StaticString(string) => Some(string),
            HeaderValue::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn append_to_message(&self, response_text: &mut String) {
        match self {
            HeaderValue::StaticString(string) => {
                response_text.push_str(string);
            }
            HeaderValue::String(string) => {
                response_text.push_str(string);
            }
            HeaderValue::DateTime(date_time) => {
                _ = write!(response_text, "{}", httpdate::HttpDate::from(clamp_to_http_date_range(*date_time)));
            }
            HeaderValue::Size(size) => {
                _ = write!(response_text, "{size}");
            }
        }
    }

    /// Get the header in string form.
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        let mut result = String::new();
        self.append_to_message(&mut result);
        result
    }

    /// Parses the value as a number.
    #[must_use]
    pub fn parse_number(&self) -> Option<u64> {
        match self {
            HeaderValue::StaticString(string) => string.trim().parse().ok(),
            HeaderValue::String(string) => string.trim().parse().ok(),
            HeaderValue::Size(size) => Some(*size),
            HeaderValue::DateTime(_) => None,
        }
    }
}

/// Seconds since the epoch of `Fri, 31 Dec 9999 23:59:59 GMT`, the last
/// instant an IMF-fixdate can express.
const LAST_HTTP_DATE_SECONDS: u64 = 253_402_300_799;

/// Moves `date_time` into the range an IMF-fixdate can express, which is
/// 1970 up to and including 9999.
#[must_use]
pub fn clamp_to_http_date_range(date_time: SystemTime) -> SystemTime {
    let last = SystemTime::UNIX_EPOCH + Duration::from_secs(LAST_HTTP_DATE_SECONDS);
    if date_time < SystemTime::UNIX_EPOCH {
        SystemTime::UNIX_EPOCH
    } else if date_time > last {
        last
    } else {
        date_time
    }
}

impl From<&'static str> for HeaderValue {
    fn from(string: &'static str) -> HeaderValue {
        HeaderValue::StaticString(string)
    }
}

impl From<String> for HeaderValue {
    fn from(string: String) -> HeaderValue {
        HeaderValue::String(string)
    }
}

impl From<SystemTime> for HeaderValue {
    fn from(date_time: SystemTime) -> HeaderValue {
        HeaderValue::DateTime(date_time)
    }
}

impl From<u64> for HeaderValue {
    fn from(size: u64) -> HeaderValue {
        HeaderValue::Size(size)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
pub enum HeaderValueDateTimeParseError {
    InvalidFormat,
}

impl TryFrom<&HeaderValue> for SystemTime {
    type Error = HeaderValueDateTimeParseError;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        match value {
            HeaderValue::StaticString(string) => httpdate::parse_http_date(string).map_err(|_| HeaderValueDateTimeParseError::InvalidFormat),
            HeaderValue::String(string) => httpdate::parse_http_date(string).map_err(|_| HeaderValueDateTimeParseError::InvalidFormat),
            HeaderValue::DateTime(date_time) => Ok(*date_time),
            HeaderValue::Size(_) => Err(HeaderValueDateTimeParseError::InvalidFormat),
        }
    }
}
