//! In-memory contact API used by integration tests and local TUI runs.
//!
//! Implements the dashboard's wire contract: the collection endpoint wraps
//! its array in `{"contacts": [...]}`, and every mutating endpoint answers
//! with `{"message": ...}` or `{"error": ...}`. Ids are assigned from a
//! monotonically increasing counter and list responses are ordered by id.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Full-record payload shared by create and update.
#[derive(Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize)]
pub struct ListBody {
    pub contacts: Vec<Contact>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Default)]
pub struct Store {
    contacts: BTreeMap<u64, Contact>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate(input: &ContactInput) -> Result<(), (StatusCode, Json<ErrorBody>)> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() || input.phone.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "name, email and phone are required".to_string(),
            }),
        ));
    }
    Ok(())
}

async fn list_contacts(State(db): State<Db>) -> Json<ListBody> {
    let store = db.read().await;
    // BTreeMap iteration gives the id order the dashboard displays.
    Json(ListBody {
        contacts: store.contacts.values().cloned().collect(),
    })
}

async fn get_contact(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Contact>, StatusCode> {
    let store = db.read().await;
    store.contacts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<ContactInput>,
) -> Result<(StatusCode, Json<MessageBody>), (StatusCode, Json<ErrorBody>)> {
    validate(&input)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let contact = Contact {
        id: store.next_id,
        name: input.name,
        email: input.email,
        phone: input.phone,
    };
    store.contacts.insert(contact.id, contact);
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Contact created".to_string(),
        }),
    ))
}

async fn update_contact(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ContactInput>,
) -> Result<Json<MessageBody>, (StatusCode, Json<ErrorBody>)> {
    validate(&input)?;
    let mut store = db.write().await;
    let contact = store.contacts.get_mut(&id).ok_or((
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Contact not found".to_string(),
        }),
    ))?;
    contact.name = input.name;
    contact.email = input.email;
    contact.phone = input.phone;
    Ok(Json(MessageBody {
        message: "Contact updated".to_string(),
    }))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<MessageBody>, (StatusCode, Json<ErrorBody>)> {
    let mut store = db.write().await;
    store.contacts.remove(&id).map(|_| ()).ok_or((
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Contact not found".to_string(),
        }),
    ))?;
    Ok(Json(MessageBody {
        message: "Contact deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_to_json() {
        let contact = Contact {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["phone"], "555-0100");
    }

    #[test]
    fn list_body_wraps_the_array() {
        let body = ListBody { contacts: Vec::new() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "contacts": [] }));
    }

    #[test]
    fn contact_input_rejects_missing_field() {
        let result: Result<ContactInput, _> =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let input: ContactInput =
            serde_json::from_str(r#"{"name":"  ","email":"ada@example.com","phone":"555-0100"}"#).unwrap();
        assert!(validate(&input).is_err());
    }

    #[test]
    fn validate_accepts_filled_fields() {
        let input: ContactInput =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com","phone":"555-0100"}"#).unwrap();
        assert!(validate(&input).is_ok());
    }
}
