//! Candidate items shown in the expanded view.
//!
//! This module provides:
//! - `Candidate`: A single suggestion with optional annotation
//! - `candidates_from_json`: Loader for candidate lists handed over as JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single selectable suggestion.
///
/// The grid never looks inside a candidate except through the renderer's
/// measurement, so the payload is kept deliberately small: the text to draw
/// and an optional annotation (e.g. where a correction came from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Candidate {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Candidate {
            text: text.into(),
            annotation: None,
        }
    }

    /// Attach an annotation to this candidate.
    pub fn with_annotation<T: Into<String>>(mut self, annotation: T) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Candidate::new(text)
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Candidate::new(text)
    }
}

// Hosts send either bare strings or full objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCandidate {
    Text(String),
    Full(Candidate),
}

/// Parse a JSON array of candidates.
///
/// Each element is either a string (`"hello"`) or an object
/// (`{"text": "hello", "annotation": "corrected"}`).
pub fn candidates_from_json(content: &str) -> Result<Vec<Candidate>> {
    let raw: Vec<JsonCandidate> =
        serde_json::from_str(content).context("candidate list is not a JSON array of candidates")?;
    Ok(raw
        .into_iter()
        .map(|c| match c {
            JsonCandidate::Text(text) => Candidate::new(text),
            JsonCandidate::Full(candidate) => candidate,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_builders() {
        let c = Candidate::new("hello").with_annotation("corrected");
        assert_eq!(c.text, "hello");
        assert_eq!(c.annotation.as_deref(), Some("corrected"));
        assert_eq!(Candidate::from("hi"), Candidate::new("hi"));
    }

    #[test]
    fn test_from_json_mixed() {
        let list = candidates_from_json(r#"["the", {"text": "then", "annotation": "prefix"}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], Candidate::new("the"));
        assert_eq!(list[1].text, "then");
        assert_eq!(list[1].annotation.as_deref(), Some("prefix"));
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(candidates_from_json(r#"{"text": "x"}"#).is_err());
        assert!(candidates_from_json("[1, 2]").is_err());
    }
}
