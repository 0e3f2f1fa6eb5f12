//! Audit log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NoteId;

/// A recorded action against a note
///
/// Entries are read-only: they are fetched from the audit endpoint and never
/// mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique identifier of the entry
    pub id: i64,
    /// The note the action was taken against
    pub note_id: NoteId,
    /// Action tag (e.g. "CREATE", "UPDATE")
    pub action: String,
    /// Name of the acting user
    pub username: String,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the note content at the time of the action
    pub note_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_audit_entry_deserializes_camel_case_wire_shape() {
        let entry: AuditLogEntry = serde_json::from_str(
            r#"{
                "id": 11,
                "noteId": 3,
                "action": "UPDATE",
                "username": "amara",
                "timestamp": "2024-03-03T14:15:00Z",
                "noteContent": "{\"content\":\"hello\"}"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.id, 11);
        assert_eq!(entry.note_id, NoteId::new(3));
        assert_eq!(entry.action, "UPDATE");
        assert_eq!(entry.username, "amara");
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-03-03T14:15:00+00:00");
    }
}
