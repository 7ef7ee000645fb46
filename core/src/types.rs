//! Domain DTOs for the contact API.
//!
//! # Design
//! These types mirror the wire contract but are defined independently from
//! the mock-server crate; integration tests catch any schema drift between
//! the two. Contact ids are backend-assigned integers; the client never
//! fabricates one, it only echoes ids back into record paths.

use serde::{Deserialize, Serialize};

/// A single contact record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The editable fields of a contact.
///
/// Owned by the modal while it is open, and sent as the full request payload
/// for both create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body of the collection endpoint's response: `{"contacts": [...]}`.
///
/// A missing `contacts` field deserializes to an empty list rather than an
/// error, matching how the dashboard treats an absent array.
#[derive(Debug, Clone, Deserialize)]
pub struct ListReply {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Body of a create/update/delete response: `{"message": ...}` on success,
/// `{"error": ...}` on an application-level failure. The body fields, not
/// the HTTP status, decide the outcome of these operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
