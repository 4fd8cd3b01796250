// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{
    fmt,
    time::SystemTime,
};

use crate::{
    HeaderName,
    HttpMessage,
    Message,
    MessageError,
    StatusCode,
};

const PLAIN_TEXT_UTF8: &str = "text/plain;charset=utf-8";

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub message: Message,
}

impl Response {
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            message: Message::default(),
        }
    }

    pub fn with_status_and_body(status: StatusCode, body: Vec<u8>) -> Result<Self, MessageError> {
        let mut response = Self::with_status(status);
        response.message.set_body(body)?;
        Ok(response)
    }

    /// Creates a response to send textual content, encoded as UTF-8.
    pub fn with_status_and_string_body(status: StatusCode, body: impl Into<String>) -> Result<Self, MessageError> {
        let mut response = Self::with_status_and_body(status, body.into().into_bytes())?;
        response.message.headers.set(HeaderName::ContentType, PLAIN_TEXT_UTF8.into());
        Ok(response)
    }

    /// Creates a response describing `error`. The connection is closed after
    /// the response is written, since the failure might have left it in an
    /// undefined state.
    pub fn with_status_and_error(status: StatusCode, error: &dyn fmt::Display) -> Result<Self, MessageError> {
        let mut response = Self::with_status_and_string_body(status, error.to_string())?;
        response.message.headers.set_connection("close");
        Ok(response)
    }

    /// Creates a `500 Internal Server Error` response describing `error`.
    pub fn from_error(error: &dyn fmt::Display) -> Result<Self, MessageError> {
        Self::with_status_and_error(StatusCode::InternalServerError, error)
    }
}

impl HttpMessage for Response {
    fn message(&self) -> &Message {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    /// E.g. `HTTP/1.1 200 OK`
    fn first_line(&self) -> String {
        format!("{} {}", self.message.version, self.status)
    }

    /// Stamps the `Date` header and makes the `Content-Length` consistent with
    /// the status and the body. Responses with a body file are left alone,
    /// their length is set by the file-serving layer.
    fn prepare_for_write(&mut self) {
        let message = &mut self.message;
        message.headers.set_date(SystemTime::now());

        let Some(length) = message.body_len() else {
            #[cfg(feature = "debugging")]
            tracing::debug!(status = %self.status, "body file present, leaving Content-Length as is");
            return;
        };

        if self.status.supports_body() {
            message.headers.set_content_length(length);
        } else {
            #[cfg(feature = "debugging")]
            if length != 0 {
                tracing::debug!(status = %self.status, length, "discarding body not allowed for this status");
            }

            message.headers.remove_content_length();
            message.clear_body();
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response: {} {}, headers: {}, body: {} bodyFile: {}>",
            self.message.version,
            self.status,
            self.message.headers.len(),
            self.message.body().len(),
            if self.message.body_file.is_some() { "Some" } else { "None" },
        )
    }
}
