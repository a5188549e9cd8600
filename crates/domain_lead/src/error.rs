//! Lead domain errors

use thiserror::Error;

use core_kernel::TemporalError;

use crate::campaign::CampaignStatus;
use crate::field::FormField;
use crate::validation::ValidationResult;

/// Errors that can occur in the lead domain
#[derive(Debug, Error)]
pub enum LeadError {
    /// The lead failed validation
    #[error("Lead validation failed for {} field(s)", .0.errors.len())]
    Invalid(ValidationResult),

    /// A field name that the form does not have
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// A visible field has no question id in the forms configuration
    #[error("No question id configured for field {0}")]
    MissingQuestionId(FormField),

    /// No window is configured for the campaign
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    /// The campaign exists but does not accept submissions now
    #[error("Campaign {campaign} is not accepting submissions ({status:?})")]
    CampaignClosed {
        campaign: String,
        status: CampaignStatus,
    },

    /// Misconfigured campaign window
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// The embedded message files failed to load
    #[error("Message catalog error: {0}")]
    Messages(String),
}
