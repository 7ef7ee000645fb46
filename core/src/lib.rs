//! Client core for the contact dashboard.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ContactClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Dashboard` layers the UI state on top: the contact list, the loading
//!   flag, the search input, the modal form, the delete confirmation and the
//!   transient notice. It never reads the clock; the host passes `Instant`s
//!   in, so notice expiry is as deterministic as everything else.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod types;

pub use client::ContactClient;
pub use dashboard::{Dashboard, Modal, Notice, NoticeKind, MESSAGE_TTL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Contact, ContactDraft};
