//! Standard `{message}` envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of every non-list response, success or failure.
#[derive(Serialize, Debug)]
pub struct Envelope {
    pub message: String,
}

pub fn message(status: StatusCode, text: &str) -> (StatusCode, Json<Envelope>) {
    (
        status,
        Json(Envelope {
            message: text.to_string(),
        }),
    )
}

pub fn message_ok(text: &str) -> (StatusCode, Json<Envelope>) {
    message(StatusCode::OK, text)
}

pub fn message_created(text: &str) -> (StatusCode, Json<Envelope>) {
    message(StatusCode::CREATED, text)
}
