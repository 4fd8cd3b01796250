// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    HttpMessage,
    Message,
    Method,
    RequestTarget,
};

/// The port that is left out of the `Host` header.
const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Default)]
pub struct Request {
    pub method: Method,
    pub target: RequestTarget,
    pub message: Message,
}

impl Request {
    pub fn new(method: Method, target: RequestTarget) -> Self {
        Self {
            method,
            target,
            message: Message::default(),
        }
    }

    /// Sets the `Host` header, omitting the port when it is the default.
    ///
    /// # References
    /// * [RFC 9110 Section 7.2](https://www.rfc-editor.org/rfc/rfc9110.html#name-host-and-authority)
    pub fn set_host(&mut self, host: &str, port: u16) {
        let host = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };

        let value = if port == DEFAULT_PORT {
            host
        } else {
            format!("{host}:{port}")
        };

        self.message.headers.set_host(value);
    }
}

impl HttpMessage for Request {
    fn message(&self) -> &Message {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    /// E.g. `GET /chat HTTP/1.1`
    fn first_line(&self) -> String {
        format!("{} {} {}", self.method, self.target, self.message.version)
    }

    fn prepare_for_write(&mut self) {
        if let Some(length) = self.message.body_len() {
            if length != 0 {
                self.message.headers.set_content_length(length);
            }
        }
    }
}
