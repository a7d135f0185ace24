use uuid::Uuid;

use crate::domain::FieldErrors;

/// The two form fields, both required as single text values.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SubmissionInput {
    pub name: String,
    pub content: String,
}

/// Outcome of a joke submission. Failures serialize to the body returned
/// with a 400.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SubmissionResult {
    FormError {
        #[serde(rename = "formError")]
        message: String,
    },
    ValidationFailure {
        #[serde(rename = "fieldErrors")]
        field_errors: FieldErrors,
        fields: SubmissionInput,
    },
    Created {
        #[serde(rename = "recordId")]
        record_id: Uuid,
    },
}

impl SubmissionResult {
    pub const MALFORMED_MESSAGE: &'static str = "Form not submitted correctly";

    pub fn malformed() -> Self {
        Self::FormError {
            message: Self::MALFORMED_MESSAGE.to_string(),
        }
    }
}
