//! Error types for the contact API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." `Rejected` carries the application-level `error` field a
//! create/update/delete reply can report inside an otherwise well-formed
//! body. All other non-2xx responses land in `HttpError` with the raw status
//! code and body for debugging.

use std::fmt;

/// Errors returned by `ContactClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested contact does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The reply body carried an `error` field instead of a `message`.
    Rejected(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "contact not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Rejected(msg) => write!(f, "{msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
