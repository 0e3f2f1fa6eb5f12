//! Note content codec and display rendering
//!
//! Stored note content is a JSON envelope whose `content` field holds the
//! markdown source of the document. Decoding happens once per fetch; the
//! decoded document is used for both display and edit seeding.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The stored envelope shape of a note's `content` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DocumentEnvelope {
    content: String,
}

/// Decode a stored envelope into the document it carries.
///
/// A malformed payload is a structural failure: the caller routes it to an
/// error state rather than displaying partial content.
pub fn decode_note_content(raw: &str) -> Result<String> {
    let envelope: DocumentEnvelope = serde_json::from_str(raw)?;
    Ok(envelope.content)
}

/// Encode a document into the stored envelope shape.
#[must_use]
pub fn encode_note_content(document: &str) -> String {
    serde_json::to_string(&DocumentEnvelope {
        content: document.to_string(),
    })
    .expect("string-only struct serializes")
}

/// Render a markdown document to sanitized HTML for the read-only view.
///
/// Stored content is never trusted as raw HTML: the rendered output is
/// passed through ammonia before display.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    ammonia::clean(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_extracts_document() {
        let document = decode_note_content(r##"{"content":"# Groceries\n\n- milk"}"##).unwrap();
        assert_eq!(document, "# Groceries\n\n- milk");
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        assert!(decode_note_content("not json at all").is_err());
        assert!(decode_note_content(r#"{"body":"wrong field"}"#).is_err());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let raw = encode_note_content("plain text with \"quotes\"");
        assert_eq!(
            decode_note_content(&raw).unwrap(),
            "plain text with \"quotes\""
        );
    }

    #[test]
    fn test_render_markdown_emphasis() {
        let html = render_markdown("some *emphasis* here");
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_render_markdown_strips_script() {
        let html = render_markdown("hello <script>alert('x')</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_render_markdown_strips_event_handlers() {
        let html = render_markdown(r#"<p onclick="steal()">click me</p>"#);
        assert!(!html.contains("onclick"));
        assert!(html.contains("click me"));
    }
}
