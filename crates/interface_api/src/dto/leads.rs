//! Lead DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_lead::{FormField, Lead};

#[derive(Debug, Clone, Serialize)]
pub struct FieldMessage {
    pub field: FormField,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LeadValidationResponse {
    pub valid: bool,
    pub errors: Vec<FieldMessage>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    #[serde(flatten)]
    pub lead: Lead,
    /// When the visitor opened the form; defaults to the submission time
    pub started_at: Option<DateTime<Utc>>,
}
