//! Subscription form fields and their visibility

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LeadError;

/// A field of the subscription form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Document,
    Email,
    Phone,
    Position,
    Company,
    Message,
    Optin1,
    Optin2,
}

impl FormField {
    /// All fields in form order
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Document,
        FormField::Email,
        FormField::Phone,
        FormField::Position,
        FormField::Company,
        FormField::Message,
        FormField::Optin1,
        FormField::Optin2,
    ];

    /// Key used in payloads and configuration
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Document => "document",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Position => "position",
            FormField::Company => "company",
            FormField::Message => "message",
            FormField::Optin1 => "optin1",
            FormField::Optin2 => "optin2",
        }
    }

    /// Whether editors may hide this field
    ///
    /// Only the free-text message and the two consent boxes can be turned
    /// off; contact fields are always collected.
    pub fn is_optional(&self) -> bool {
        matches!(self, FormField::Message | FormField::Optin1 | FormField::Optin2)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| LeadError::UnknownField(s.to_string()))
    }
}

/// Visibility of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSetting {
    pub label: FormField,
    pub visible: bool,
}

/// Visibility configuration for the whole form
///
/// Fields without an entry are visible. Entries for required fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSettings(Vec<FieldSetting>);

impl FieldSettings {
    /// Settings with the given optional fields hidden
    pub fn hiding(fields: &[FormField]) -> Self {
        Self(
            fields
                .iter()
                .map(|&label| FieldSetting { label, visible: false })
                .collect(),
        )
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        if !field.is_optional() {
            return true;
        }
        self.0
            .iter()
            .find(|setting| setting.label == field)
            .map_or(true, |setting| setting.visible)
    }

    /// Visible fields in form order
    pub fn visible_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        FormField::ALL.into_iter().filter(|&field| self.is_visible(field))
    }

    /// Flips the visibility of an optional field
    pub fn toggle(&mut self, field: FormField) {
        if !field.is_optional() {
            return;
        }
        match self.0.iter_mut().find(|setting| setting.label == field) {
            Some(setting) => setting.visible = !setting.visible,
            None => self.0.push(FieldSetting { label: field, visible: false }),
        }
    }
}
