// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

use strum_macros::AsRefStr;

use ponte_http::{
    MessageError,
    Response,
    StatusCode,
};

use crate::WEB_SOCKET_VERSION;

/// The reason a WebSocket opening handshake was not accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
pub enum HandshakeError {
    /// The operation isn't valid in the current [`HandshakeState`](crate::HandshakeState).
    InvalidState,

    /// The opening handshake must be a `GET` request.
    NotGet,

    /// The message doesn't ask to upgrade to the `websocket` protocol.
    NotUpgrade,

    /// The request has no `Sec-WebSocket-Key`, or it is empty.
    MissingKey,

    /// The `Sec-WebSocket-Key` isn't the base64 encoding of 16 bytes.
    InvalidKey,

    /// The client speaks a different version than `13`.
    UnsupportedVersion,

    /// The server responded with a status other than `101 Switching Protocols`.
    NotSwitchingProtocols,

    /// The response has no `Sec-WebSocket-Accept`, or it is empty.
    MissingAccept,

    /// The `Sec-WebSocket-Accept` doesn't prove the server read our key.
    AcceptMismatch,
}

impl HandshakeError {
    /// Creates the response a server sends when it refuses the handshake
    /// request.
    ///
    /// # References
    /// * [RFC 6455 Section 4.4](https://www.rfc-editor.org/rfc/rfc6455#section-4.4)
    pub fn to_response(&self) -> Result<Response, MessageError> {
        match self {
            Self::UnsupportedVersion => {
                let mut response = Response::with_status_and_string_body(StatusCode::UpgradeRequired, self.to_string())?;
                response.message.headers.set_sec_web_socket_version(WEB_SOCKET_VERSION);
                Ok(response)
            }
            _ => Response::with_status_and_error(StatusCode::BadRequest, self),
        }
    }
}

impl fmt::Display for HandshakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::InvalidState => "handshake is not in the right state for this operation",
            Self::NotGet => "handshake request must use the GET method",
            Self::NotUpgrade => "message is not a websocket upgrade",
            Self::MissingKey => "Sec-WebSocket-Key is missing",
            Self::InvalidKey => "Sec-WebSocket-Key is not 16 base64-encoded bytes",
            Self::UnsupportedVersion => "only Sec-WebSocket-Version 13 is supported",
            Self::NotSwitchingProtocols => "server did not switch protocols",
            Self::MissingAccept => "Sec-WebSocket-Accept is missing",
            Self::AcceptMismatch => "Sec-WebSocket-Accept does not match the key",
        };

        write!(f, "{}: {description}", self.as_ref())
    }
}

impl std::error::Error for HandshakeError {}
