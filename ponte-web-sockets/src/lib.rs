// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! This crate negotiates the upgrade of an HTTP/1.1 exchange to a WebSocket
//! connection. Framing of the connection itself lives elsewhere.

pub mod error;
pub mod handshake;
pub mod key;

pub use error::*;
pub use handshake::*;
pub use key::*;

use ponte_http::HttpMessage;

/// The `Upgrade` protocol token of WebSockets.
pub const WEB_SOCKET_PROTOCOL: &str = "websocket";

/// The only `Sec-WebSocket-Version` defined by RFC 6455.
pub const WEB_SOCKET_VERSION: &str = "13";

pub trait WebSocketUpgrade {
    /// Is this an upgrade to the WebSocket protocol?
    fn is_web_socket_upgrade(&self) -> bool;
}

impl<M> WebSocketUpgrade for M
        where M: HttpMessage + ?Sized {
    fn is_web_socket_upgrade(&self) -> bool {
        self.headers()
            .upgrade()
            .is_some_and(|upgrade| unicase::eq_ascii(upgrade.trim(), WEB_SOCKET_PROTOCOL))
    }
}
