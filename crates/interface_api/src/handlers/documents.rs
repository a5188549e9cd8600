//! Document handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use tracing::debug;

use core_kernel::{document, DocumentKind};
use domain_lead::Locale;

use crate::dto::documents::{DocumentRequest, FormatResponse, ValidateResponse};
use crate::error::ApiError;
use crate::AppState;

/// Punctuates a partially typed CPF or CNPJ
pub async fn format_document(
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<FormatResponse>, ApiError> {
    let Json(req) = payload?;
    let formatted = document::format(&req.value);
    let digits = document::digits(&formatted);

    Ok(Json(FormatResponse {
        kind: DocumentKind::for_partial_len(digits.len()),
        formatted,
        digits,
    }))
}

/// Validates a CPF or CNPJ
///
/// The reason for a rejection is logged but never returned; callers get
/// one generic localized message.
pub async fn validate_document(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(req) = payload?;
    let response = match document::check(&req.value) {
        Ok(kind) => ValidateResponse {
            valid: true,
            kind: Some(kind),
            message: None,
        },
        Err(err) => {
            debug!(error = %err, "Document rejected");
            ValidateResponse {
                valid: false,
                kind: None,
                message: Some(state.catalog.message(locale, "document-invalid")),
            }
        }
    };

    Ok(Json(response))
}
