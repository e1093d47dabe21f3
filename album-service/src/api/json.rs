//! JSON responders
//!
//! Every response is labelled `application/json; charset=utf-8`. Listing
//! and lookup responses are indented with four spaces; confirmations and
//! errors are compact.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::error;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Like `axum::Json`, but indented
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

/// Like `axum::Json`, with an explicit charset
#[derive(Debug, Clone)]
pub struct CompactJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(256);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        let result = self.0.serialize(&mut ser).map(|()| buf);
        json_response(result)
    }
}

impl<T: Serialize> IntoResponse for CompactJson<T> {
    fn into_response(self) -> Response {
        json_response(serde_json::to_vec(&self.0))
    }
}

fn json_response(body: serde_json::Result<Vec<u8>>) -> Response {
    match body {
        Ok(buf) => ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], buf).into_response(),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
