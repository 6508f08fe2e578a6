use thiserror::Error;

use crate::domain::{Field, Notice};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForwardingError {
    #[error("Forwarding transport error: {0}")]
    Transport(String),
    #[error("Forwarding rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Forwarding(#[from] ForwardingError),
    #[error("A submission is already in progress")]
    SubmissionInProgress,
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid value for {field}: {value:?}")]
    InvalidFieldValue { field: Field, value: String },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl FormError {
    /// The notice the form shows for this error, if it is one the user sees.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            FormError::Validation(_) => Some(Notice::missing_fields()),
            FormError::Forwarding(_) => Some(Notice::forwarding_failed()),
            _ => None,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(Field::name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_names() {
        let err = ValidationError::MissingFields(vec![Field::RecipientEmail, Field::ProductName]);
        assert_eq!(err.to_string(), "Missing required fields: recipientEmail, productName");
    }

    #[test]
    fn test_only_user_facing_errors_carry_notices() {
        let validation = FormError::from(ValidationError::MissingFields(vec![Field::OrderNumber]));
        assert_eq!(validation.notice(), Some(Notice::missing_fields()));

        let forwarding = FormError::from(ForwardingError::Transport("timeout".into()));
        assert_eq!(forwarding.notice(), Some(Notice::forwarding_failed()));

        assert_eq!(FormError::SubmissionInProgress.notice(), None);
    }
}
