// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The opening handshake, which upgrades an HTTP/1.1 exchange to a WebSocket
//! connection.
//!
//! # References
//! * [RFC 6455 Section 4](https://www.rfc-editor.org/rfc/rfc6455#section-4)

use ponte_http::{
    HeaderName,
    HttpMessage,
    Method,
    Request,
    Response,
    StatusCode,
};

use crate::{
    compute_accept_value,
    generate_key,
    is_valid_key,
    HandshakeError,
    WebSocketUpgrade,
    WEB_SOCKET_PROTOCOL,
    WEB_SOCKET_VERSION,
};

/// Decorates a request with the client handshake headers. Returns the
/// generated key, which is needed to validate the response.
pub fn decorate_client_handshake(request: &mut Request, host: &str, port: u16, protocol_name: &str) -> String {
    let key = generate_key();

    request.method = Method::Get;
    request.set_host(host, port);

    let headers = &mut request.message.headers;
    headers.set_connection("Upgrade");
    headers.set_upgrade(WEB_SOCKET_PROTOCOL);
    headers.set_sec_web_socket_key(key.clone());
    headers.set_sec_web_socket_protocol(protocol_name.to_owned());
    headers.set_sec_web_socket_version(WEB_SOCKET_VERSION);

    #[cfg(feature = "debugging")]
    tracing::debug!(host, port, protocol_name, "offering websocket handshake");

    key
}

/// Creates a `GET /` handshake request, together with its key.
pub fn client_handshake(host: &str, port: u16, protocol_name: &str) -> (Request, String) {
    let mut request = Request::default();
    let key = decorate_client_handshake(&mut request, host, port, protocol_name);
    (request, key)
}

/// Decorates a response with the server handshake headers, accepting `key`.
pub fn decorate_server_handshake(response: &mut Response, key: &str, protocol_name: &str) {
    response.status = StatusCode::SwitchingProtocols;

    let headers = &mut response.message.headers;
    headers.set_connection("Upgrade");
    headers.set_upgrade(WEB_SOCKET_PROTOCOL);
    headers.set_sec_web_socket_accept(compute_accept_value(key));
    headers.set_sec_web_socket_protocol(protocol_name.to_owned());
}

pub fn server_handshake(key: &str, protocol_name: &str) -> Response {
    let mut response = Response::with_status(StatusCode::SwitchingProtocols);
    decorate_server_handshake(&mut response, key, protocol_name);
    response
}

/// Checks the client's handshake request and creates the accepting response.
/// On failure, [`HandshakeError::to_response`] creates the refusal.
pub fn accept_request(request: &Request, protocol_name: &str) -> Result<Response, HandshakeError> {
    if request.method != Method::Get {
        return Err(HandshakeError::NotGet);
    }

    if !request.is_web_socket_upgrade() || !request.headers().contains_token(&HeaderName::Connection, "upgrade") {
        return Err(HandshakeError::NotUpgrade);
    }

    let key = match request.headers().sec_web_socket_key() {
        Some(key) if !key.is_empty() => key.trim(),
        _ => return Err(HandshakeError::MissingKey),
    };

    if !is_valid_key(key) {
        return Err(HandshakeError::InvalidKey);
    }

    if request.headers().sec_web_socket_version().map(str::trim) != Some(WEB_SOCKET_VERSION) {
        return Err(HandshakeError::UnsupportedVersion);
    }

    #[cfg(feature = "debugging")]
    tracing::debug!(request_target = %request.target, protocol_name, "accepting websocket handshake");

    Ok(server_handshake(key, protocol_name))
}

/// Returns whether the response looks like an accepted handshake. This doesn't
/// check the accept value, see [`validate_server_handshake`] for that.
pub fn is_web_socket_handshake(response: &Response) -> bool {
    response.status == StatusCode::SwitchingProtocols
        && response.is_web_socket_upgrade()
        && response.headers().sec_web_socket_accept().is_some_and(|accept| !accept.is_empty())
}

/// Validates the server's response against the key the client sent.
pub fn validate_server_handshake(key: &str, response: &Response) -> Result<(), HandshakeError> {
    if response.status != StatusCode::SwitchingProtocols {
        return Err(HandshakeError::NotSwitchingProtocols);
    }

    if !response.is_web_socket_upgrade() {
        return Err(HandshakeError::NotUpgrade);
    }

    let accept = match response.headers().sec_web_socket_accept() {
        Some(accept) if !accept.is_empty() => accept,
        _ => return Err(HandshakeError::MissingAccept),
    };

    if accept != compute_accept_value(key) {
        #[cfg(feature = "debugging")]
        tracing::debug!(accept, "server sent an accept value for a different key");
        return Err(HandshakeError::AcceptMismatch);
    }

    Ok(())
}

/// The progress of a single opening handshake, from the client's side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HandshakeState {
    #[default]
    NotStarted,
    ClientOffered,
    ServerAccepted,
    Rejected,
}

/// Tracks the key of a client handshake, so the response can be validated.
#[derive(Clone, Debug, Default)]
pub struct ClientHandshake {
    key: Option<String>,
    state: HandshakeState,
}

impl ClientHandshake {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// The key that was offered, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Decorates `request` with the handshake headers.
    pub fn offer(&mut self, request: &mut Request, host: &str, port: u16, protocol_name: &str) -> Result<(), HandshakeError> {
        if self.state != HandshakeState::NotStarted {
            return Err(HandshakeError::InvalidState);
        }

        self.key = Some(decorate_client_handshake(request, host, port, protocol_name));
        self.state = HandshakeState::ClientOffered;
        Ok(())
    }

    /// Validates the server's response. After this, the handshake is either
    /// accepted or rejected for good.
    pub fn receive(&mut self, response: &Response) -> Result<(), HandshakeError> {
        let (HandshakeState::ClientOffered, Some(key)) = (self.state, &self.key) else {
            return Err(HandshakeError::InvalidState);
        };

        let result = validate_server_handshake(key, response);
        self.state = match result {
            Ok(()) => HandshakeState::ServerAccepted,
            Err(_) => HandshakeState::Rejected,
        };
        result
    }
}
