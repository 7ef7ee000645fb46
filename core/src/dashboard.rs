//! UI state container for the contact dashboard.
//!
//! # Overview
//! `Dashboard` owns everything the view renders: the contact list, the
//! loading flag, the search input, the modal form, the pending delete
//! confirmation and the transient notice. State mutators hand back the
//! `HttpRequest` (if any) that the host must execute; the matching
//! `finish_*` method applies the outcome.
//!
//! # Design
//! - The dashboard never reads the clock. Methods that may set or expire a
//!   notice take `now: Instant` from the host, so expiry is testable without
//!   sleeping.
//! - Each notice carries its own deadline. Replacing a notice replaces the
//!   deadline with it, so an earlier notice's timer can never clear a later
//!   one.
//! - Transport failures arrive as the `Err(String)` arm of a
//!   `Result<HttpResponse, String>`; they land in the same notice sink as
//!   parse failures and application-level errors.

use std::time::{Duration, Instant};

use crate::client::ContactClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Contact, ContactDraft};

/// How long a notice stays on screen before `tick` clears it.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient status message with its own expiry deadline.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

/// Modal form lifecycle: closed, creating with an empty draft, or editing
/// with a draft pre-populated from the selected contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Create { draft: ContactDraft },
    Edit { id: u64, draft: ContactDraft },
}

#[derive(Debug)]
pub struct Dashboard {
    client: ContactClient,
    contacts: Vec<Contact>,
    loading: bool,
    search_id: String,
    modal: Modal,
    pending_delete: Option<u64>,
    notice: Option<Notice>,
}

impl Dashboard {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            loading: false,
            search_id: String::new(),
            modal: Modal::Closed,
            pending_delete: None,
            notice: None,
        }
    }

    // --- accessors ---

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_id(&self) -> &str {
        &self.search_id
    }

    /// The search box's backing string; the view routes keystrokes here.
    pub fn search_id_mut(&mut self) -> &mut String {
        &mut self.search_id
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The open modal's draft, if any. Field edits go through here and touch
    /// nothing else until submit.
    pub fn draft_mut(&mut self) -> Option<&mut ContactDraft> {
        match &mut self.modal {
            Modal::Closed => None,
            Modal::Create { draft } | Modal::Edit { draft, .. } => Some(draft),
        }
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clear the notice once its own deadline has passed. The host calls this
    /// every event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if now >= notice.expires_at {
                self.notice = None;
            }
        }
    }

    // --- load-all ---

    /// Begin a full reload; also serves the "Show All" action.
    pub fn start_load(&mut self) -> HttpRequest {
        self.loading = true;
        self.client.build_list_contacts()
    }

    /// Apply a load outcome. The loading flag clears in every branch; on
    /// failure the previously displayed list stays.
    pub fn finish_load(&mut self, result: Result<HttpResponse, String>, now: Instant) {
        self.loading = false;
        let parsed = result.and_then(|response| {
            self.client
                .parse_list_contacts(response)
                .map_err(|e| e.to_string())
        });
        match parsed {
            Ok(contacts) => self.contacts = contacts,
            Err(err) => self.notify(NoticeKind::Error, format!("Error loading contacts: {err}"), now),
        }
    }

    // --- search-by-id ---

    /// Begin a single-record search. Blank input is rejected locally with a
    /// validation notice and no request is built.
    pub fn start_search(&mut self, now: Instant) -> Option<HttpRequest> {
        let id = self.search_id.trim().to_string();
        if id.is_empty() {
            self.notify(NoticeKind::Error, "Please enter a contact ID".to_string(), now);
            return None;
        }
        self.loading = true;
        Some(self.client.build_get_contact(&id))
    }

    /// Apply a search outcome: success narrows the list to the one fetched
    /// record; any failure shows an error and leaves the list untouched.
    pub fn finish_search(&mut self, result: Result<HttpResponse, String>, now: Instant) {
        self.loading = false;
        let parsed = result.and_then(|response| {
            self.client
                .parse_get_contact(response)
                .map_err(|e| e.to_string())
        });
        match parsed {
            Ok(contact) => self.contacts = vec![contact],
            Err(err) => self.notify(NoticeKind::Error, format!("Error: {err}"), now),
        }
    }

    // --- modal/form lifecycle ---

    pub fn open_create(&mut self) {
        self.modal = Modal::Create {
            draft: ContactDraft::default(),
        };
    }

    pub fn open_edit(&mut self, contact: &Contact) {
        self.modal = Modal::Edit {
            id: contact.id,
            draft: ContactDraft {
                name: contact.name.clone(),
                email: contact.email.clone(),
                phone: contact.phone.clone(),
            },
        };
    }

    /// Cancel the modal, discarding the draft.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Submit the open modal: create posts to the collection, edit puts to
    /// the record. The modal stays open until `finish_save` sees a success
    /// reply.
    pub fn submit_form(&mut self, now: Instant) -> Option<HttpRequest> {
        let built = match &self.modal {
            Modal::Closed => return None,
            Modal::Create { draft } => self.client.build_create_contact(draft),
            Modal::Edit { id, draft } => self.client.build_update_contact(*id, draft),
        };
        match built {
            Ok(request) => Some(request),
            Err(err) => {
                self.notify(NoticeKind::Error, format!("Error: {err}"), now);
                None
            }
        }
    }

    /// Apply a save outcome. Success closes the modal and hands back the
    /// follow-up reload request; failure keeps the modal open with the
    /// current draft.
    pub fn finish_save(&mut self, result: Result<HttpResponse, String>, now: Instant) -> Option<HttpRequest> {
        let parsed = match &self.modal {
            Modal::Edit { .. } => result.and_then(|response| {
                self.client
                    .parse_update_contact(response)
                    .map_err(|e| e.to_string())
            }),
            _ => result.and_then(|response| {
                self.client
                    .parse_create_contact(response)
                    .map_err(|e| e.to_string())
            }),
        };
        match parsed {
            Ok(message) => {
                self.notify(NoticeKind::Success, message, now);
                self.modal = Modal::Closed;
                Some(self.start_load())
            }
            Err(err) => {
                self.notify(NoticeKind::Error, format!("Error: {err}"), now);
                None
            }
        }
    }

    // --- delete ---

    /// Park a delete behind the confirmation dialog. No request yet.
    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, producing exactly one DELETE request.
    pub fn confirm_delete(&mut self) -> Option<HttpRequest> {
        let id = self.pending_delete.take()?;
        Some(self.client.build_delete_contact(id))
    }

    /// Apply a delete outcome. Success hands back the follow-up reload
    /// request; failure leaves the list unchanged.
    pub fn finish_delete(&mut self, result: Result<HttpResponse, String>, now: Instant) -> Option<HttpRequest> {
        let parsed = result.and_then(|response| {
            self.client
                .parse_delete_contact(response)
                .map_err(|e| e.to_string())
        });
        match parsed {
            Ok(message) => {
                self.notify(NoticeKind::Success, message, now);
                Some(self.start_load())
            }
            Err(err) => {
                self.notify(NoticeKind::Error, format!("Error: {err}"), now);
                None
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, text: String, now: Instant) {
        self.notice = Some(Notice {
            text,
            kind,
            expires_at: now + MESSAGE_TTL,
        });
    }
}
