// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The key material of the opening handshake.
//!
//! # References
//! * [RFC 6455 Section 4.1](https://www.rfc-editor.org/rfc/rfc6455#section-4.1)
//! * [RFC 6455 Section 4.2.2](https://www.rfc-editor.org/rfc/rfc6455#section-4.2.2)

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha1::{Digest, Sha1};

/// Appended to the key before hashing, fixed by RFC 6455.
const WEB_SOCKET_MAGIC_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// The number of random bytes in a `Sec-WebSocket-Key`.
pub const KEY_LENGTH: usize = 16;

/// Generates a fresh `Sec-WebSocket-Key` from a cryptographically secure
/// source.
pub fn generate_key() -> String {
    let nonce: [u8; KEY_LENGTH] = rand::random();
    BASE64.encode(nonce)
}

/// Checks that the key is the base64 encoding of exactly 16 bytes.
pub fn is_valid_key(key: &str) -> bool {
    matches!(BASE64.decode(key), Ok(nonce) if nonce.len() == KEY_LENGTH)
}

/// Computes the `Sec-WebSocket-Accept` value for the given key, which is
/// `base64(SHA-1(key ++ GUID))`.
pub fn compute_accept_value(key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(WEB_SOCKET_MAGIC_GUID.as_bytes());
    BASE64.encode(hasher.finalize())
}
