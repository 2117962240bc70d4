//! Shared helpers for integration tests.

use std::io;

use axum::body::{Body, Bytes};
use axum::http::{Response, StatusCode};
use futures_util::stream;

/// Build a response from header pairs and a chunked body.
pub fn chunked_response(
    status: u16,
    headers: &[(&'static str, &'static str)],
    chunks: &[&'static [u8]],
) -> Response<Body> {
    let chunks: Vec<Result<Bytes, io::Error>> =
        chunks.iter().map(|c| Ok(Bytes::from_static(*c))).collect();
    with_headers(status, headers, Body::from_stream(stream::iter(chunks)))
}

/// Build a response whose body fails after yielding `prefix`.
#[allow(dead_code)]
pub fn failing_response(headers: &[(&'static str, &'static str)], prefix: &'static [u8]) -> Response<Body> {
    let chunks = vec![
        Ok(Bytes::from_static(prefix)),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer")),
    ];
    with_headers(200, headers, Body::from_stream(stream::iter(chunks)))
}

/// Build a response whose body never completes.
#[allow(dead_code)]
pub fn stalled_response() -> Response<Body> {
    let body = Body::from_stream(stream::pending::<Result<Bytes, io::Error>>());
    with_headers(200, &[("content-type", "text/plain")], body)
}

fn with_headers(status: u16, headers: &[(&'static str, &'static str)], body: Body) -> Response<Body> {
    let mut builder = Response::builder().status(StatusCode::from_u16(status).unwrap());
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body).unwrap()
}
