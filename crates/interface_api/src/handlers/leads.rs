//! Lead handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use domain_lead::{Lead, LeadValidator, Locale};

use crate::dto::leads::{FieldMessage, LeadValidationResponse};
use crate::error::ApiError;
use crate::AppState;

/// Validates a lead against the configured form without submitting it
pub async fn validate_lead(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    payload: Result<Json<Lead>, JsonRejection>,
) -> Result<Json<LeadValidationResponse>, ApiError> {
    let Json(lead) = payload?;
    let result = LeadValidator::validate(&lead, &state.config.fields);

    Ok(Json(LeadValidationResponse {
        valid: result.is_valid,
        errors: result
            .errors
            .iter()
            .map(|e| FieldMessage {
                field: e.field,
                message: state.catalog.field_error(locale, e),
            })
            .collect(),
    }))
}
