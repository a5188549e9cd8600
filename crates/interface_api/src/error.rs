//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_lead::{LeadError, Locale};

use crate::dto::leads::FieldMessage;
use crate::AppState;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<FieldMessage>,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldMessage>>,
}

impl ApiError {
    /// Translates a domain error into a localized API error
    pub fn from_lead(err: LeadError, state: &AppState, locale: Locale) -> Self {
        let catalog = &state.catalog;
        match err {
            LeadError::Invalid(result) => ApiError::Validation {
                message: catalog.message(locale, "submission-failed"),
                details: result
                    .errors
                    .iter()
                    .map(|e| FieldMessage {
                        field: e.field,
                        message: catalog.field_error(locale, e),
                    })
                    .collect(),
            },
            LeadError::UnknownField(field) => ApiError::BadRequest(field),
            LeadError::CampaignNotFound(_) => {
                ApiError::NotFound(catalog.message(locale, "campaign-not-found"))
            }
            LeadError::CampaignClosed { campaign, .. } => {
                let configured = state
                    .config
                    .campaigns
                    .get(&campaign)
                    .ok()
                    .and_then(|window| window.closed_message.clone());
                ApiError::Conflict(configured.unwrap_or_else(|| {
                    catalog.message_with(locale, "campaign-closed", &[("campaign", &campaign)])
                }))
            }
            err @ (LeadError::MissingQuestionId(_)
            | LeadError::Temporal(_)
            | LeadError::Messages(_)) => {
                error!(error = %err, "Lead capture misconfigured");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
