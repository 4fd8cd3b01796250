// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Deprecated names, kept for callers written against the older API. Each of
//! these forwards to its replacement and has no behavior of its own.

use crate::{
    MessageError,
    Response,
    StatusCode,
};

impl Response {
    #[deprecated(note = "`data` has been renamed to `body`, use `Response::with_status_and_body`")]
    pub fn with_data(status: StatusCode, data: Vec<u8>) -> Result<Self, MessageError> {
        Self::with_status_and_body(status, data)
    }

    #[deprecated(note = "use `Message::keep_alive`")]
    pub fn close_after_write(&self) -> bool {
        !self.message.keep_alive()
    }

    /// Only the `close` token of the `Connection` header is touched, and
    /// `false` clears an earlier `close`.
    #[deprecated(note = "use `Message::set_keep_alive`")]
    pub fn set_close_after_write(&mut self, close: bool) {
        self.message.set_keep_alive(!close);
    }
}
