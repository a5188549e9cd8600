//! The lead captured by the subscription form

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::document;

/// Value a checked first consent box submits
pub const OPTIN1_ACCEPTED: &str = "Aceite1";

/// Value a checked second consent box submits
pub const OPTIN2_ACCEPTED: &str = "Aceite2";

/// Fewest digits in an international phone number, country code included
const PHONE_MIN_DIGITS: usize = 8;

/// E.164 upper bound
const PHONE_MAX_DIGITS: usize = 15;

/// A person or company signing up through the subscription form
///
/// Contact fields carry their rules as `validator` attributes. The message
/// and consent fields can be hidden by editors, so [`crate::LeadValidator`]
/// checks them against the form's field settings.
///
/// Absent fields deserialize as empty and are reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Lead {
    #[validate(length(min = 2))]
    pub name: String,
    /// CPF or CNPJ, punctuated or not
    #[validate(custom(function = "validate_document"))]
    pub document: String,
    #[validate(email)]
    pub email: String,
    /// International format, e.g. `+55 11 91234-5678`
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(length(min = 2))]
    pub position: String,
    #[validate(length(min = 2))]
    pub company: String,
    pub message: Option<String>,
    pub optin1: Option<String>,
    pub optin2: Option<String>,
}

impl Lead {
    /// The document as the form displays it
    pub fn formatted_document(&self) -> String {
        document::format(&self.document)
    }
}

fn validate_document(value: &str) -> Result<(), ValidationError> {
    if document::validate(value) {
        Ok(())
    } else {
        Err(ValidationError::new("document"))
    }
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

/// Checks that a phone number is in international format
///
/// Accepts a leading `+` followed by 8 to 15 digits; spaces, dashes, dots
/// and parentheses between digits are ignored.
pub fn is_valid_phone(raw: &str) -> bool {
    let Some(rest) = raw.trim().strip_prefix('+') else {
        return false;
    };
    let mut count = 0;
    for c in rest.chars() {
        match c {
            // country codes never start with 0
            '0' if count == 0 => return false,
            '0'..='9' => count += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&count)
}
