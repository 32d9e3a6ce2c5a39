// ✉️ Contact Form - validation + mailto link
// Nothing is sent from here: success means "here is a link for your mail client".

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// SUBMISSION
// ============================================================================

/// Raw form fields, exactly as posted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill your name, email, and message (missing: {}).", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Fields that are empty, in form order. Whitespace counts as filled.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Build the mail link for `recipient`, or report which fields are missing
    pub fn to_mailto(&self, recipient: &str) -> Result<String, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        let subject = format!("Portfolio Contact from {}", self.name);
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&self.message),
        ))
    }
}

// ============================================================================
// FORM STATE MACHINE
// ============================================================================

/// Idle -> Success | Error on submit; any other interaction goes back to Idle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactState {
    #[default]
    Idle,
    Success {
        mailto: String,
    },
    Error {
        draft: ContactSubmission,
        error: ContactError,
    },
}

impl ContactState {
    /// Submitting always produces a terminal state, whatever the previous one was
    pub fn submit(submission: ContactSubmission, recipient: &str) -> Self {
        match submission.to_mailto(recipient) {
            Ok(mailto) => ContactState::Success { mailto },
            Err(error) => ContactState::Error {
                draft: submission,
                error,
            },
        }
    }

    pub fn reset(&mut self) {
        *self = ContactState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ContactState::Idle)
    }

    pub fn mailto(&self) -> Option<&str> {
        match self {
            ContactState::Success { mailto } => Some(mailto),
            _ => None,
        }
    }

    /// Field values to refill the form with (kept only after a failed submit)
    pub fn draft(&self) -> Option<&ContactSubmission> {
        match self {
            ContactState::Error { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECIPIENT: &str = "me@example.com";

    #[test]
    fn test_valid_submission_builds_mailto() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello world");
        let link = submission.to_mailto(RECIPIENT).unwrap();

        assert!(link.starts_with("mailto:me@example.com?"));
        let (_, query) = link.split_once('?').unwrap();
        let params: Vec<(&str, &str)> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        let subject = params.iter().find(|(k, _)| *k == "subject").unwrap().1;
        let body = params.iter().find(|(k, _)| *k == "body").unwrap().1;
        assert!(subject.contains("Ada"));
        assert_eq!(subject, "Portfolio%20Contact%20from%20Ada");
        assert!(body.contains("Hello%20world"));
    }

    #[test]
    fn test_ampersand_in_message_does_not_split_query() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "salt & pepper");
        let link = submission.to_mailto(RECIPIENT).unwrap();
        assert!(link.ends_with("&body=salt%20%26%20pepper"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let submission = ContactSubmission::new("", "x@y.com", "hi");
        let err = submission.to_mailto(RECIPIENT).unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec![Field::Name]));
    }

    #[test]
    fn test_each_empty_field_rejected() {
        let cases = [
            (ContactSubmission::new("", "x@y.com", "hi"), Field::Name),
            (ContactSubmission::new("Ada", "", "hi"), Field::Email),
            (ContactSubmission::new("Ada", "x@y.com", ""), Field::Message),
        ];
        for (submission, field) in cases {
            let state = ContactState::submit(submission, RECIPIENT);
            assert_eq!(state.mailto(), None);
            match state {
                ContactState::Error { error, .. } => {
                    assert_eq!(error, ContactError::MissingFields(vec![field]))
                }
                other => panic!("expected error state, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_whitespace_only_fields_count_as_filled() {
        let submission = ContactSubmission::new("   ", "x@y.com", "hi");
        assert!(submission.missing_fields().is_empty());

        let link = submission.to_mailto(RECIPIENT).unwrap();
        assert!(link.contains("subject=Portfolio%20Contact%20from%20%20%20%20&"));

        let state = ContactState::submit(ContactSubmission::new("Ada", "x@y.com", "   "), RECIPIENT);
        assert!(state.mailto().is_some());
    }

    #[test]
    fn test_error_message_names_missing_fields() {
        let err = ContactSubmission::default().to_mailto(RECIPIENT).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill your name, email, and message (missing: name, email, message)."
        );
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut state = ContactState::default();
        assert!(state.is_idle());

        state = ContactState::submit(ContactSubmission::new("Ada", "", "hi"), RECIPIENT);
        assert_eq!(state.draft().map(|d| d.name.as_str()), Some("Ada"));
        state.reset();
        assert!(state.is_idle());

        state = ContactState::submit(
            ContactSubmission::new("Ada", "ada@example.com", "Hello world"),
            RECIPIENT,
        );
        assert!(state.mailto().is_some());
        assert!(state.draft().is_none());
        state.reset();
        assert!(state.is_idle());
    }
}
