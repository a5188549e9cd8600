//! Lead validation rules
//!
//! # Validation Rules
//!
//! - Name, position and company: at least 2 characters
//! - Document: a valid CPF or CNPJ
//! - Email: well-formed address
//! - Phone: required, international format
//! - Message (when visible): at least 5 characters
//! - Opt-ins (when visible): must be accepted
//!
//! Hidden fields are skipped entirely.

use serde::Serialize;
use tracing::debug;
use validator::Validate;

use crate::field::{FieldSettings, FormField};
use crate::lead::{Lead, OPTIN1_ACCEPTED, OPTIN2_ACCEPTED};

/// Minimum length of the free-text message
const MESSAGE_MIN_CHARS: usize = 5;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    /// Left empty
    Missing,
    /// Present but malformed
    Invalid,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Missing => "missing",
            Reason::Invalid => "invalid",
        }
    }
}

/// A rejected field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub reason: Reason,
}

impl FieldError {
    pub fn new(field: FormField, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Message catalog id, e.g. `phone-missing`
    pub fn message_id(&self) -> String {
        format!("{}-{}", self.field.key(), self.reason.as_str())
    }
}

/// Result of lead validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the lead is valid
    pub is_valid: bool,
    /// Rejected fields, in form order
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, field: FormField, reason: Reason) {
        self.errors.push(FieldError::new(field, reason));
        self.is_valid = false;
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Whether `field` was rejected
    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn sort(&mut self) {
        self.errors.sort_by_key(|e| e.field);
        self.errors.dedup_by_key(|e| e.field);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for leads submitted through the subscription form
pub struct LeadValidator;

impl LeadValidator {
    /// Validates a lead against the form's current field visibility
    pub fn validate(lead: &Lead, settings: &FieldSettings) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_contact(lead, &mut result);
        Self::validate_optional(lead, settings, &mut result);

        result.sort();
        if !result.is_valid {
            debug!(
                fields = ?result.errors.iter().map(|e| e.field.key()).collect::<Vec<_>>(),
                "Lead rejected"
            );
        }
        result
    }

    /// Applies the attribute rules declared on [`Lead`]
    fn validate_contact(lead: &Lead, result: &mut ValidationResult) {
        if lead.phone.trim().is_empty() {
            result.add_error(FormField::Phone, Reason::Missing);
        }

        let Err(errors) = lead.validate() else {
            return;
        };
        for key in errors.field_errors().keys() {
            match key.parse::<FormField>() {
                Ok(field) if !result.has_error(field) => {
                    result.add_error(field, Reason::Invalid);
                }
                Ok(_) => {}
                Err(_) => debug!(%key, "Ignoring validation error for unknown field"),
            }
        }
    }

    /// Checks the fields editors can hide
    fn validate_optional(lead: &Lead, settings: &FieldSettings, result: &mut ValidationResult) {
        if settings.is_visible(FormField::Message) {
            let chars = lead.message.as_deref().map_or(0, |m| m.chars().count());
            if chars < MESSAGE_MIN_CHARS {
                result.add_error(FormField::Message, Reason::Invalid);
            }
        }

        let optins = [
            (FormField::Optin1, lead.optin1.as_deref(), OPTIN1_ACCEPTED),
            (FormField::Optin2, lead.optin2.as_deref(), OPTIN2_ACCEPTED),
        ];
        for (field, value, accepted) in optins {
            if settings.is_visible(field) && value != Some(accepted) {
                result.add_error(field, Reason::Missing);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> Lead {
        Lead {
            name: "Maria Silva".to_string(),
            document: "111.444.777-35".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+55 11 91234-5678".to_string(),
            position: "Gerente".to_string(),
            company: "Acme Ltda".to_string(),
            message: Some("Quero participar".to_string()),
            optin1: Some(OPTIN1_ACCEPTED.to_string()),
            optin2: Some(OPTIN2_ACCEPTED.to_string()),
        }
    }

    #[test]
    fn test_valid_lead() {
        let result = LeadValidator::validate(&valid_lead(), &FieldSettings::default());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_invalid_document() {
        let mut lead = valid_lead();
        lead.document = "111.444.777-36".to_string();
        let result = LeadValidator::validate(&lead, &FieldSettings::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![FieldError::new(FormField::Document, Reason::Invalid)]
        );
    }

    #[test]
    fn test_missing_phone_is_reported_once() {
        let mut lead = valid_lead();
        lead.phone = String::new();
        let result = LeadValidator::validate(&lead, &FieldSettings::default());
        assert_eq!(
            result.errors,
            vec![FieldError::new(FormField::Phone, Reason::Missing)]
        );
    }

    #[test]
    fn test_errors_follow_form_order() {
        let lead = Lead::default();
        let result = LeadValidator::validate(&lead, &FieldSettings::default());
        let fields: Vec<_> = result.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, FormField::ALL.to_vec());
    }

    #[test]
    fn test_hidden_fields_are_skipped() {
        let mut lead = valid_lead();
        lead.message = None;
        lead.optin1 = None;
        lead.optin2 = Some("nope".to_string());
        let settings = FieldSettings::hiding(&[
            FormField::Message,
            FormField::Optin1,
            FormField::Optin2,
        ]);
        let result = LeadValidator::validate(&lead, &settings);
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_message_id() {
        let error = FieldError::new(FormField::Phone, Reason::Missing);
        assert_eq!(error.message_id(), "phone-missing");
    }
}
