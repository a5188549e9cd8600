//! Forms backend submission payload
//!
//! A submission carries the base64 target form URL, the form's start and
//! submit times, and one answer per visible field keyed by the backend's
//! question id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use core_kernel::SubmissionId;

use crate::error::LeadError;
use crate::field::{FieldSettings, FormField};
use crate::lead::Lead;
use crate::validation::LeadValidator;

/// Question ids the form template ships with
const DEFAULT_QUESTION_IDS: [(FormField, &str); 9] = [
    (FormField::Name, "r9dd6878a382646f5824c28921a3b606d"),
    (FormField::Email, "r61251a298dfe46cf92b3d3bdec15ebf5"),
    (FormField::Phone, "r386e88a11a544391b709260d5e958987"),
    (FormField::Document, "ra401d13ed8b84f5cbd4dca4ffc3890e6"),
    (FormField::Position, "r754d4abcd5bc468e80cf3bcd257c4c85"),
    (FormField::Company, "r77a287a58cf546799522b6464ed55f92"),
    (FormField::Message, "rdc65760d76e640bd9b20ecc7fab55668"),
    (FormField::Optin1, "rbe00f0945a944e37a8ee6d4499bcf6c3"),
    (FormField::Optin2, "raa64c101a351475d94f1bf1789d71d6c"),
];

/// Where and how to submit the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Target form URL, base64-encoded, passed through untouched
    #[serde(default)]
    pub forms_url_base64: String,
    #[serde(default = "default_question_ids")]
    pub question_ids: BTreeMap<FormField, String>,
}

fn default_question_ids() -> BTreeMap<FormField, String> {
    DEFAULT_QUESTION_IDS
        .iter()
        .map(|(field, id)| (*field, id.to_string()))
        .collect()
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            forms_url_base64: String::new(),
            question_ids: default_question_ids(),
        }
    }
}

impl FormsConfig {
    pub fn question_id(&self, field: FormField) -> Result<&str, LeadError> {
        self.question_ids
            .get(&field)
            .map(String::as_str)
            .ok_or(LeadError::MissingQuestionId(field))
    }
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub answer1: String,
}

/// Payload accepted by the forms backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(skip)]
    pub id: SubmissionId,
    pub target_b64: String,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "submitDate")]
    pub submit_date: DateTime<Utc>,
    pub answers: Vec<Answer>,
}

impl Submission {
    /// Validates a lead and builds its payload
    ///
    /// Answers follow form order and include only visible fields. The
    /// document is sent punctuated, as the form displays it.
    pub fn build(
        lead: &Lead,
        settings: &FieldSettings,
        config: &FormsConfig,
        started_at: DateTime<Utc>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, LeadError> {
        let result = LeadValidator::validate(lead, settings);
        if !result.is_valid {
            return Err(LeadError::Invalid(result));
        }

        let answers = settings
            .visible_fields()
            .map(|field| {
                Ok(Answer {
                    question_id: config.question_id(field)?.to_string(),
                    answer1: answer_value(lead, field),
                })
            })
            .collect::<Result<Vec<_>, LeadError>>()?;

        let submission = Self {
            id: SubmissionId::new(),
            target_b64: config.forms_url_base64.clone(),
            start_date: started_at,
            submit_date: submitted_at,
            answers,
        };
        debug!(id = %submission.id, answers = submission.answers.len(), "Submission built");
        Ok(submission)
    }
}

fn answer_value(lead: &Lead, field: FormField) -> String {
    match field {
        FormField::Name => lead.name.clone(),
        FormField::Document => lead.formatted_document(),
        FormField::Email => lead.email.clone(),
        FormField::Phone => lead.phone.clone(),
        FormField::Position => lead.position.clone(),
        FormField::Company => lead.company.clone(),
        FormField::Message => lead.message.clone().unwrap_or_default(),
        FormField::Optin1 => lead.optin1.clone().unwrap_or_default(),
        FormField::Optin2 => lead.optin2.clone().unwrap_or_default(),
    }
}
