//! Integration tests for the REST client against a mock backend.

use jot_core::{content, ApiClient, Error, NoteId};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri()).unwrap()
}

fn note_body(id: i64, document: &str) -> serde_json::Value {
    json!({ "id": id, "content": content::encode_note_content(document) })
}

#[tokio::test]
async fn list_notes_returns_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            note_body(1, "# Groceries"),
            note_body(2, "# Travel plans"),
        ])))
        .mount(&server)
        .await;

    let notes = client_for(&server).await.list_notes().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, NoteId::new(1));
    assert_eq!(
        content::decode_note_content(&notes[1].content).unwrap(),
        "# Travel plans"
    );
}

#[tokio::test]
async fn find_note_locates_id_in_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            note_body(1, "first"),
            note_body(2, "second"),
        ])))
        .mount(&server)
        .await;

    let note = client_for(&server)
        .await
        .find_note(NoteId::new(2))
        .await
        .unwrap();
    assert_eq!(content::decode_note_content(&note.content).unwrap(), "second");
}

#[tokio::test]
async fn find_note_missing_id_is_invalid_note() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_body(1, "only")])))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .find_note(NoteId::new(99))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::NoteNotFound(id) if id == NoteId::new(99)));
    assert_eq!(error.to_string(), "Invalid Note");
}

#[tokio::test]
async fn current_user_reports_roles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "roles": ["ROLE_USER", "ROLE_ADMIN"] })),
        )
        .mount(&server)
        .await;

    let user = client_for(&server).await.current_user().await.unwrap();
    assert!(user.is_admin());
}

#[tokio::test]
async fn audit_log_fetches_entries_for_note() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/audit/note/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 40,
            "noteId": 7,
            "action": "UPDATE",
            "username": "amara",
            "timestamp": "2024-03-03T14:15:00Z",
            "noteContent": "{\"content\":\"old\"}"
        }])))
        .mount(&server)
        .await;

    let entries = client_for(&server)
        .await
        .audit_log(NoteId::new(7))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note_id, NoteId::new(7));
    assert_eq!(entries[0].username, "amara");
}

#[tokio::test]
async fn update_note_puts_document_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/notes/3"))
        .and(body_json(json!({ "content": "updated document" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .update_note(NoteId::new(3), "updated document")
        .await
        .unwrap();
}

#[tokio::test]
async fn update_note_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/notes/3"))
        .respond_with(
            ResponseTemplate::new(423).set_body_json(json!({ "message": "Note is locked" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .update_note(NoteId::new(3), "anything")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Note is locked");
}

#[tokio::test]
async fn update_note_rejects_blank_content_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .update_note(NoteId::new(3), "   ")
        .await
        .unwrap_err();
    assert!(matches!(error, Error::EmptyContent));
    // MockServer verifies the zero-request expectation on drop.
}
