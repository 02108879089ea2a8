//! Decoding of the record forms submitted by the console.
//!
//! Every record's `*Fields` type is also its form: the body is decoded with
//! `serde_html_form`, normalised by its [`EntityForm`] implementation and
//! validated with `validator` before it reaches the backend.

use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{TypeConstraintError, normalize_email, normalize_phone_to_e164};

pub mod careers;
pub mod catalog;
pub mod content;
pub mod partners;
pub mod srm;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form data: {0}")]
    Decode(String),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("{0}")]
    Constraint(TypeConstraintError),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidEmail => FormError::InvalidEmail,
            TypeConstraintError::InvalidPhone | TypeConstraintError::EmptyString => {
                FormError::InvalidPhoneNumber
            }
            other => FormError::Constraint(other),
        }
    }
}

/// A record payload that can be submitted through an HTML form.
pub trait EntityForm: DeserializeOwned + Validate {
    /// Trims, sanitises and derives values before validation runs.
    fn normalize(&mut self) -> Result<(), FormError> {
        Ok(())
    }
}

/// Decodes, normalises and validates an urlencoded form body.
pub fn parse_form<F: EntityForm>(body: &[u8]) -> Result<F, FormError> {
    let mut form: F =
        serde_html_form::from_bytes(body).map_err(|err| FormError::Decode(err.to_string()))?;
    form.normalize()?;
    form.validate()?;
    Ok(form)
}

/// Splits comma separated entries, trimming them and dropping blanks and
/// repeats while keeping the first-seen order.
pub(crate) fn split_list(values: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for entry in values.iter().flat_map(|value| value.split(',')) {
        let entry = entry.trim();
        if !entry.is_empty() && !result.iter().any(|seen| seen == entry) {
            result.push(entry.to_string());
        }
    }
    result
}

/// Turns blank optional inputs into `None`.
pub(crate) fn blank_to_none(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *value = None;
    } else if let Some(v) = value {
        *v = v.trim().to_string();
    }
}

/// Strips markup that could run in the public site from rich text.
pub(crate) fn clean_rich_text(value: &str) -> String {
    ammonia::clean(value).trim().to_string()
}

pub(crate) fn normalize_contact(email: &mut String, phone: &mut String) -> Result<(), FormError> {
    *email = normalize_email(email.as_str())?;
    *phone = normalize_phone_to_e164(phone)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_deduplicates() {
        let values = vec!["suv, family ,".to_string(), "suv".to_string(), " ev".to_string()];
        assert_eq!(split_list(&values), vec!["suv", "family", "ev"]);
        assert!(split_list(&[]).is_empty());
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut value = Some("   ".to_string());
        blank_to_none(&mut value);
        assert_eq!(value, None);

        let mut value = Some(" https://x.test ".to_string());
        blank_to_none(&mut value);
        assert_eq!(value.as_deref(), Some("https://x.test"));
    }

    #[test]
    fn rich_text_loses_scripts() {
        assert_eq!(
            clean_rich_text("<p>Hi</p><script>alert(1)</script>"),
            "<p>Hi</p>"
        );
    }

    #[test]
    fn contact_errors_map_to_form_errors() {
        let mut email = "nope".to_string();
        let mut phone = "+919876543210".to_string();
        assert!(matches!(
            normalize_contact(&mut email, &mut phone),
            Err(FormError::InvalidEmail)
        ));

        let mut email = "Ops@Example.com".to_string();
        let mut phone = "".to_string();
        assert!(matches!(
            normalize_contact(&mut email, &mut phone),
            Err(FormError::InvalidPhoneNumber)
        ));
    }
}
