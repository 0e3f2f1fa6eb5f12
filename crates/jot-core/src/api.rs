//! REST client for the notes backend

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{AuditLogEntry, Note, NoteId, UserInfo};

/// Client for the notes REST API
///
/// All persistence and business logic live server-side; this client only
/// moves wire payloads and normalizes failures into [`Error`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Build a client for an API base URL (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        Ok(Self {
            base_url,
            client: Client::builder().build()?,
        })
    }

    /// Fetch the full note collection.
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        tracing::debug!("Fetching notes from {}", self.base_url);
        let response = self
            .client
            .get(format!("{}/notes", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Fetch the note with the given identifier.
    ///
    /// The backend exposes only a collection read, so the identifier is
    /// located client-side.
    pub async fn find_note(&self, id: NoteId) -> Result<Note> {
        let notes = self.list_notes().await?;
        notes
            .into_iter()
            .find(|note| note.id == id)
            .ok_or(Error::NoteNotFound(id))
    }

    /// Fetch the authenticated user's role information.
    pub async fn current_user(&self) -> Result<UserInfo> {
        let response = self
            .client
            .get(format!("{}/auth/user", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Fetch the audit trail for a note.
    pub async fn audit_log(&self, id: NoteId) -> Result<Vec<AuditLogEntry>> {
        let response = self
            .client
            .get(format!("{}/audit/note/{id}", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Persist an edited document as the new content of a note.
    ///
    /// Whitespace-only content is rejected locally; no request is issued.
    pub async fn update_note(&self, id: NoteId, document: &str) -> Result<()> {
        if document.trim().is_empty() {
            return Err(Error::EmptyContent);
        }

        let payload = serde_json::json!({ "content": document });
        let response = self
            .client
            .put(format!("{}/notes/{id}", self.base_url))
            .json(&payload)
            .send()
            .await?;
        Self::check_status(response).await?;
        tracing::debug!("Updated note {id}");
        Ok(())
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: parse_api_error(status, &body),
        })
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidConfig("API base URL must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Extract the server's `message` payload when present, otherwise produce a
/// generic status-based description.
fn parse_api_error(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiErrorBody {
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.message {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    format!("Request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://localhost:8080/api/ ").unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_empty() {
        assert!(normalize_base_url("   ").is_err());
    }

    #[test]
    fn test_parse_api_error_prefers_payload_message() {
        let message = parse_api_error(
            StatusCode::FORBIDDEN,
            r#"{"message": "You do not own this note"}"#,
        );
        assert_eq!(message, "You do not own this note");
    }

    #[test]
    fn test_parse_api_error_falls_back_to_status() {
        let message = parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(
            message,
            "Request failed with status 500 Internal Server Error"
        );
    }

    #[test]
    fn test_parse_api_error_ignores_blank_message() {
        let message = parse_api_error(StatusCode::BAD_REQUEST, r#"{"message": "  "}"#);
        assert_eq!(message, "Request failed with status 400 Bad Request");
    }
}
