//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A unique identifier for a note, assigned by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw server-assigned identifier
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value of this ID
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A note as returned by the backend
///
/// `content` is the serialized document envelope; decode it with
/// [`crate::content::decode_note_content`] before display or editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Serialized document envelope
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = "42".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_note_id_parse_rejects_garbage() {
        assert!("not-a-number".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_id_serde_transparent() {
        let id: NoteId = serde_json::from_str("7").unwrap();
        assert_eq!(id, NoteId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_note_deserializes_wire_shape() {
        let note: Note =
            serde_json::from_str(r#"{"id": 3, "content": "{\"content\":\"hello\"}"}"#).unwrap();
        assert_eq!(note.id, NoteId::new(3));
        assert_eq!(note.content, r#"{"content":"hello"}"#);
    }
}
