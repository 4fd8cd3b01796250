// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Tests the framing of responses as seen by the transport.

use ponte_http::{
    HeaderName,
    HttpMessage,
    Response,
    StatusCode,
};

/// Removes the `Date` line, which follows the wall clock.
fn head_without_date(response: &Response) -> String {
    response.serialize_head()
        .split("\r\n")
        .filter(|line| !line.starts_with("Date: "))
        .collect::<Vec<_>>()
        .join("\r\n")
}

#[test]
fn test_no_content_drops_body() {
    let mut response = Response::with_status_and_string_body(StatusCode::NoContent, "should vanish").unwrap();
    response.prepare_for_write();

    assert!(response.message.body().is_empty());
    assert_eq!(response.headers().content_length(), None);
    assert!(!response.serialize_head().contains("Content-Length"));
}

#[test]
fn test_error_response() {
    let error = anyhow::anyhow!("boom");
    let mut response = Response::from_error(&error).unwrap();
    response.prepare_for_write();

    assert_eq!(response.message.body_as_str(), Some("boom"));
    assert_eq!(response.headers().connection(), Some("close"));
    assert_eq!(response.headers().content_length(), Some(4));
}

#[test]
fn test_serialized_head() {
    let mut response = Response::with_status_and_string_body(StatusCode::Ok, "hi").unwrap();
    response.headers_mut().set(HeaderName::Server, "ponte".into());
    response.prepare_for_write();

    let head = response.serialize_head();
    let lines: Vec<_> = head.split("\r\n").collect();
    assert_eq!(lines[0], "HTTP/1.1 200 OK");
    assert_eq!(lines[1], "Content-Type: text/plain;charset=utf-8");
    assert_eq!(lines[2], "Server: ponte");
    assert!(lines[3].starts_with("Date: ") && lines[3].ends_with(" GMT"));
    assert_eq!(lines[4], "Content-Length: 2");
    assert!(head.ends_with("\r\n\r\n"));
}

#[test]
fn test_serialization_is_stable() {
    let mut response = Response::with_status_and_string_body(StatusCode::NotFound, "missing").unwrap();
    response.prepare_for_write();

    let first = head_without_date(&response);
    let second = head_without_date(&response);
    assert_eq!(first, second);

    response.prepare_for_write();
    assert_eq!(head_without_date(&response), first);
}
