// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

use strum_macros::AsRefStr;

/// An error that can occur while constructing a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
pub enum MessageError {
    /// The length of the body can't be represented in the `Content-Length`
    /// field.
    BodyTooLarge {
        length: usize,
    },
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyTooLarge { length } => {
                write!(f, "{}: a body of {length} bytes doesn't fit the Content-Length field", self.as_ref())
            }
        }
    }
}

impl std::error::Error for MessageError {}
