//! Lead submission schema

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_MIN_LEN: usize = 2;
pub const WHATSAPP_MIN_LEN: usize = 10;
pub const STORE_NAME_MIN_LEN: usize = 2;

// Same wording the landing page form shows next to each field.
pub const NAME_MESSAGE: &str = "Nome é obrigatório";
pub const WHATSAPP_MESSAGE: &str = "WhatsApp inválido";
pub const STORE_NAME_MESSAGE: &str = "Nome da loja é obrigatório";
pub const EMAIL_MESSAGE: &str = "Email inválido";

/// Raw form payload. Every field is optional here so that a missing required
/// field is reported next to the others instead of rejecting the whole body.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
    pub store_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
}

/// Lead fields that passed validation, trimmed, with blank optionals as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    pub name: String,
    pub whatsapp: String,
    pub store_name: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a submission against the lead schema, collecting every field error
/// rather than stopping at the first.
pub fn validate_lead(submission: &LeadSubmission) -> Result<ValidLead, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(
        &mut errors,
        "name",
        &submission.name,
        NAME_MIN_LEN,
        NAME_MESSAGE,
    );
    let whatsapp = required(
        &mut errors,
        "whatsapp",
        &submission.whatsapp,
        WHATSAPP_MIN_LEN,
        WHATSAPP_MESSAGE,
    );
    let store_name = required(
        &mut errors,
        "storeName",
        &submission.store_name,
        STORE_NAME_MIN_LEN,
        STORE_NAME_MESSAGE,
    );

    let email = optional(&submission.email);
    if let Some(email) = &email
        && !is_valid_email(email)
    {
        errors.push("email", EMAIL_MESSAGE);
    }

    match (name, whatsapp, store_name) {
        (Some(name), Some(whatsapp), Some(store_name)) if errors.is_empty() => Ok(ValidLead {
            name,
            whatsapp,
            store_name,
            email,
            city: optional(&submission.city),
            message: optional(&submission.message),
        }),
        _ => Err(errors),
    }
}

fn required(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<String>,
    min_len: usize,
    message: &'static str,
) -> Option<String> {
    let value = value.as_deref().map(str::trim).unwrap_or_default();
    if value.chars().count() < min_len {
        errors.push(field, message);
        return None;
    }

    Some(value.to_owned())
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Structural address check: one `@`, a non-empty local part and a dotted
/// domain without empty labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
