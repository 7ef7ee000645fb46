//! Stateless HTTP request builder and response parser for the contact API.
//!
//! # Design
//! `ContactClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Status handling differs per operation, mirroring the dashboard contract:
//! list and get check the status line, while create/update/delete replies are
//! decided by their body (`message` vs `error` field) regardless of status.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ActionReply, Contact, ContactDraft, ListReply};

/// Synchronous, stateless client for the contact API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ContactClient {
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_contacts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/contacts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build the single-record fetch behind the search box.
    ///
    /// Takes the raw user-supplied id string: the client does not second-guess
    /// what an id looks like, the server decides whether it exists.
    pub fn build_get_contact(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/contacts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_contact(&self, draft: &ContactDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/contacts", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_contact(&self, id: u64, draft: &ContactDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/contacts/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_contact(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/contacts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_contacts(&self, response: HttpResponse) -> Result<Vec<Contact>, ApiError> {
        check_status(&response, 200)?;
        let reply: ListReply =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(reply.contacts)
    }

    pub fn parse_get_contact(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_contact(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_action_reply(response)
    }

    pub fn parse_update_contact(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_action_reply(response)
    }

    pub fn parse_delete_contact(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_action_reply(response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Decide a create/update/delete outcome from the reply body.
///
/// A `message` field wins, then an `error` field; a body with neither is a
/// decode failure. The status line is deliberately not consulted here.
fn parse_action_reply(response: HttpResponse) -> Result<String, ApiError> {
    let reply: ActionReply =
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    if let Some(message) = reply.message {
        return Ok(message);
    }
    if let Some(error) = reply.error {
        return Err(ApiError::Rejected(error));
    }
    Err(ApiError::DeserializationError(
        "reply carried neither message nor error".to_string(),
    ))
}
