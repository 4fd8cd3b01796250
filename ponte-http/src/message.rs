// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The parts shared by requests and responses.

use crate::{
    HeaderMap,
    HeaderName,
    HttpVersion,
    MessageError,
};

/// A body that is served from a file. The file-serving layer is responsible
/// for the `Content-Length` of these bodies.
#[derive(Debug)]
pub struct BodyFile {
    pub handle: tokio::fs::File,
    pub metadata: std::fs::Metadata,
}

impl BodyFile {
    pub fn new(handle: tokio::fs::File, metadata: std::fs::Metadata) -> Self {
        Self { handle, metadata }
    }

    /// Wraps an opened standard library file.
    pub fn from_std(file: std::fs::File) -> std::io::Result<Self> {
        let metadata = file.metadata()?;
        Ok(Self {
            handle: tokio::fs::File::from_std(file),
            metadata,
        })
    }
}

#[derive(Debug, Default)]
pub struct Message {
    pub version: HttpVersion,
    pub headers: HeaderMap,
    body: Vec<u8>,
    body_length: u64,

    /// When present, this is the authoritative source of the body, and the
    /// in-memory body must not be used to determine the length.
    pub body_file: Option<BodyFile>,
}

impl Message {
    pub fn new(version: HttpVersion, headers: HeaderMap) -> Self {
        Self {
            version,
            headers,
            ..Default::default()
        }
    }

    pub fn with_body(version: HttpVersion, headers: HeaderMap, body: Vec<u8>, body_file: Option<BodyFile>) -> Result<Self, MessageError> {
        let mut message = Self::new(version, headers);
        message.set_body(body)?;
        message.body_file = body_file;
        Ok(message)
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, if it is valid UTF-8.
    #[must_use]
    pub fn body_as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// The length of the in-memory body, or `None` when the body is served
    /// from a file.
    #[must_use]
    pub fn body_len(&self) -> Option<u64> {
        match self.body_file {
            Some(_) => None,
            None => Some(self.body_length),
        }
    }

    /// Replaces the in-memory body. The length check only fails on platforms
    /// where `usize` is wider than `u64`.
    pub fn set_body(&mut self, body: Vec<u8>) -> Result<(), MessageError> {
        self.body_length = u64::try_from(body.len())
            .map_err(|_| MessageError::BodyTooLarge { length: body.len() })?;
        self.body = body;
        Ok(())
    }

    pub fn clear_body(&mut self) {
        self.body.clear();
        self.body_length = 0;
    }

    /// Whether or not the connection may be reused after this message.
    ///
    /// # References
    /// * [RFC 9112 Section 9.3](https://www.rfc-editor.org/rfc/rfc9112.html#name-persistence)
    #[must_use]
    pub fn keep_alive(&self) -> bool {
        if self.headers.contains_token(&HeaderName::Connection, "close") {
            return false;
        }

        if self.headers.contains_token(&HeaderName::Connection, "keep-alive") {
            return true;
        }

        self.version >= HttpVersion::Http11
    }

    /// Adds or removes the `close` token of the `Connection` header. Other
    /// tokens, such as `Upgrade`, are left untouched.
    pub fn set_keep_alive(&mut self, keep_alive: bool) {
        if keep_alive {
            self.headers.remove_token(&HeaderName::Connection, "close");
        } else {
            self.headers.add_token(HeaderName::Connection, "close");
        }
    }
}

/// The capabilities every kind of HTTP message has.
pub trait HttpMessage {
    fn message(&self) -> &Message;

    fn message_mut(&mut self) -> &mut Message;

    /// The request-line or status-line, without the CRLF.
    fn first_line(&self) -> String;

    /// Finalizes the headers right before the message is serialized. The
    /// transport calls this exactly once per outbound message.
    fn prepare_for_write(&mut self) {}

    fn version(&self) -> HttpVersion {
        self.message().version
    }

    fn headers(&self) -> &HeaderMap {
        &self.message().headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.message_mut().headers
    }

    /// Formats the first line and the header fields in their stored order,
    /// terminated by the empty line.
    fn serialize_head(&self) -> String {
        let mut text = String::with_capacity(1024);
        text.push_str(&self.first_line());
        text.push_str("\r\n");

        for (name, value) in self.headers().iter() {
            text.push_str(name.to_string_h1());
            text.push_str(": ");
            value.append_to_message(&mut text);
            text.push_str("\r\n");
        }

        text.push_str("\r\n");
        text
    }
}
