use crate::core::descriptors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("No {property} for {subject}")]
    NotFound { property: String, subject: String },

    #[error(
        "No {property} for {subject} from reference '{reference}' (available: {})",
        available.join(", ")
    )]
    ReferenceNotFound {
        property: String,
        subject: String,
        reference: String,
        available: Vec<String>,
    },

    #[error("Unknown element '{0}'")]
    UnknownElement(String),

    #[error("Expected a {expected} value for {property} of {subject}, found {found}")]
    WrongValueType {
        property: String,
        subject: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid descriptor: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

impl LookupError {
    /// Whether the property is simply absent, as opposed to malformed input.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::NotFound { .. }
                | LookupError::ReferenceNotFound { .. }
                | LookupError::UnknownElement(_)
        )
    }
}
