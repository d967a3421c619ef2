//! REST path conventions for persisted form data.
//!
//! Pure string functions. These mirror the backend routes the browser client
//! calls; the HTTP client itself lives outside this workspace.

use uuid::Uuid;

pub const CLIENTS_PREFIX: &str = "clients/";

pub fn client(id: Uuid) -> String {
    format!("clients/{id}")
}

pub fn client_forms(id: Uuid) -> String {
    format!("clients/{id}/forms")
}

/// `GET` returns a [`FormSubmission`](crate::models::submission::FormSubmission),
/// `POST` stores one.
pub fn form(client_id: Uuid, slug: &str) -> String {
    format!("clients/{client_id}/forms/{slug}")
}

pub fn form_document(client_id: Uuid, slug: &str) -> String {
    format!("clients/{client_id}/forms/{slug}/document.docx")
}

/// Extract the client UUID from a path produced by [`form`] or [`client`].
pub fn parse_client_id(path: &str) -> Option<Uuid> {
    let rest = path.strip_prefix(CLIENTS_PREFIX)?;
    let id = rest.split('/').next()?;
    Uuid::parse_str(id).ok()
}
