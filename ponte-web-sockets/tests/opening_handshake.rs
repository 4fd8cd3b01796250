// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Runs the opening handshake through the serialized form of the messages,
//! like a transport would.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use ponte_http::{
    HeaderMap,
    HeaderName,
    HttpMessage,
    HttpVersion,
    Method,
    Request,
    RequestTarget,
    Response,
    StatusCode,
};

use ponte_web_sockets::{
    accept_request,
    client_handshake,
    compute_accept_value,
    is_web_socket_handshake,
    server_handshake,
    ClientHandshake,
    HandshakeState,
    WebSocketUpgrade,
};

fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in lines.take_while(|line| !line.is_empty()) {
        let (name, value) = line.split_once(':').expect("header without colon");
        headers.append_possible_duplicate(HeaderName::from(name), value.trim().to_string().into());
    }
    headers
}

fn parse_request(head: &str) -> Request {
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap().split(' ');
    let mut request = Request::new(
        Method::parse(request_line.next().unwrap()),
        RequestTarget::parse(request_line.next().unwrap()).unwrap(),
    );
    request.message.version = HttpVersion::parse(request_line.next().unwrap()).unwrap();
    request.message.headers = parse_headers(lines);
    request
}

fn parse_response(head: &str) -> Response {
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    let code = status_line.split(' ').nth(1).unwrap().parse::<u16>().unwrap();
    let mut response = Response::with_status(StatusCode::try_from(code).unwrap());
    response.message.headers = parse_headers(lines);
    response
}

#[test]
fn test_client_request() {
    let (request, _) = client_handshake("example.com", 80, "");
    let head = request.serialize_head();

    assert!(head.starts_with("GET / HTTP/1.1\r\n"));
    assert!(head.contains("\r\nUpgrade: websocket\r\n"));
    assert!(head.contains("\r\nConnection: Upgrade\r\n"));
    assert!(head.contains("\r\nSec-WebSocket-Version: 13\r\n"));

    let key = request.headers().sec_web_socket_key().unwrap();
    assert_eq!(BASE64.decode(key).unwrap().len(), 16);
    assert!(request.is_web_socket_upgrade());
}

#[test]
fn test_rfc6455_accept_value() {
    assert_eq!(compute_accept_value("dGhlIHNhbXBsZSBub25jZQ=="), "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
}

#[test]
fn test_server_response() {
    let response = server_handshake("dGhlIHNhbXBsZSBub25jZQ==", "");
    assert!(is_web_socket_handshake(&response));
    assert_eq!(response.status, StatusCode::SwitchingProtocols);
}

#[test]
fn test_full_exchange_over_the_wire() {
    let mut handshake = ClientHandshake::new();
    let mut request = Request::new(Method::Get, RequestTarget::parse("/chat").unwrap());
    handshake.offer(&mut request, "server.example.com", 8080, "chat").unwrap();
    request.prepare_for_write();

    let received_request = parse_request(&request.serialize_head());
    assert_eq!(received_request.headers().host(), Some("server.example.com:8080"));

    let mut response = accept_request(&received_request, "chat").unwrap();
    response.prepare_for_write();
    let wire = response.serialize_head();
    assert!(wire.starts_with("HTTP/1.1 101 Switching Protocols\r\n"));
    assert!(!wire.contains("Content-Length"));

    let received_response = parse_response(&wire);
    assert_eq!(handshake.receive(&received_response), Ok(()));
    assert_eq!(handshake.state(), HandshakeState::ServerAccepted);
}

#[test]
fn test_plain_response_is_not_a_handshake() {
    let mut handshake = ClientHandshake::new();
    let mut request = Request::default();
    handshake.offer(&mut request, "example.com", 80, "").unwrap();

    let mut response = Response::with_status_and_string_body(StatusCode::Ok, "no websockets here").unwrap();
    response.prepare_for_write();
    let received_response = parse_response(&response.serialize_head());

    assert!(!is_web_socket_handshake(&received_response));
    assert!(handshake.receive(&received_response).is_err());
    assert_eq!(handshake.state(), HandshakeState::Rejected);
}
