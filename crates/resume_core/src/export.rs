//! crates/resume_core/src/export.rs
//!
//! Lossless JSON export and strict import of a resume document.
//!
//! The export format is the document's wire shape, pretty-printed with
//! two-space indentation. Import is all-or-nothing: malformed input is an
//! error and never yields a partially populated document.

use crate::domain::Resume;

/// Error raised when a document fails to serialize or parse.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Document is not valid JSON or does not match the resume shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serializes the document to pretty-printed JSON (two-space indent).
pub fn to_json(resume: &Resume) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// Parses a document from its JSON export. Unknown keys and missing
/// sections are rejected, so export-then-import is the identity.
pub fn from_json(text: &str) -> Result<Resume, ExportError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_import_round_trips() {
        let resume = Resume::sample();
        let exported = to_json(&resume).unwrap();
        let imported = from_json(&exported).unwrap();
        assert_eq!(imported, resume);
    }

    #[test]
    fn export_uses_wire_field_names_and_two_space_indent() {
        let exported = to_json(&Resume::sample()).unwrap();
        assert!(exported.contains("\"personalInfo\""));
        assert!(exported.contains("\"institution\""));
        assert!(exported.contains("\n  \"summary\""));
    }

    #[test]
    fn import_rejects_malformed_input() {
        assert!(from_json("not json at all").is_err());
        // A document missing whole sections must not half-import.
        assert!(from_json(r#"{"summary": "only this"}"#).is_err());
        // Unknown keys are a shape violation too.
        let mut value = serde_json::to_value(Resume::new()).unwrap();
        value["hobbies"] = serde_json::json!(["chess"]);
        assert!(from_json(&value.to_string()).is_err());
    }

    #[test]
    fn empty_document_round_trips() {
        let resume = Resume::new();
        assert_eq!(from_json(&to_json(&resume).unwrap()).unwrap(), resume);
    }
}
