// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! This crate contains the HTTP message model: versions, status codes,
//! header fields, requests and responses, and the preparation of responses
//! right before they are written to the transport.

pub mod compat;
pub mod error;
pub mod header_map;
pub mod header_name;
pub mod header_value;
pub mod message;
pub mod method;
pub mod request;
pub mod request_target;
pub mod response;
pub mod status;
pub mod version;

pub use error::*;
pub use header_map::*;
pub use header_name::*;
pub use header_value::*;
pub use message::*;
pub use method::*;
pub use request::*;
pub use request_target::*;
pub use response::*;
pub use status::*;
pub use version::*;
