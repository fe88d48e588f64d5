use crate::types::{MimeType, StudyIdentifier};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Password complexity requirements for a study's accounts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub min_length: i32,
    pub numeric_required: bool,
    pub symbol_required: bool,
    pub upper_case_required: bool,
}

impl PasswordPolicy {
    pub fn new(
        min_length: i32,
        numeric_required: bool,
        symbol_required: bool,
        upper_case_required: bool,
    ) -> Self {
        Self {
            min_length,
            numeric_required,
            symbol_required,
            upper_case_required,
        }
    }
}

/// Subject and body of one of a study's templated emails. The body may
/// contain `${url}` placeholders filled in by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
    pub mime_type: MimeType,
}

impl EmailTemplate {
    pub fn new(subject: impl Into<String>, body: impl Into<String>, mime_type: MimeType) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            mime_type,
        }
    }
}

/// A study's configuration record.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub identifier: StudyIdentifier,
    pub name: String,
    /// Optimistic lock. Send it back unchanged when updating.
    pub version: i64,
    pub password_policy: PasswordPolicy,
    pub reset_password_template: EmailTemplate,
    pub verify_email_template: EmailTemplate,
    pub support_email: Option<String>,
}
