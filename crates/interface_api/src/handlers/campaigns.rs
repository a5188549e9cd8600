//! Campaign handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use chrono::Utc;
use tracing::info;

use domain_lead::{CampaignStatus, LeadError, Locale, Submission};

use crate::dto::campaigns::CampaignResponse;
use crate::dto::leads::SubmissionRequest;
use crate::error::ApiError;
use crate::AppState;

/// Reports a campaign's submission window
pub async fn get_campaign(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Path(campaign): Path<String>,
) -> Result<Json<CampaignResponse>, ApiError> {
    let window = state
        .config
        .campaigns
        .get(&campaign)
        .map_err(|e| ApiError::from_lead(e, &state, locale))?;
    let status = window
        .status(Utc::now())
        .map_err(|e| ApiError::from_lead(e, &state, locale))?;

    Ok(Json(CampaignResponse {
        form_active: window.form_active,
        form_start: window.form_start,
        form_end: window.form_end,
        open: status == CampaignStatus::Open,
        status,
        closed_message: window.closed_message.clone(),
        campaign,
    }))
}

/// Builds the forms backend payload for a lead
///
/// The campaign must be open; the payload is returned for the caller to
/// deliver.
pub async fn create_submission(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Path(campaign): Path<String>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<Submission>, ApiError> {
    let Json(req) = payload?;
    let now = Utc::now();
    let to_api = |e: LeadError| ApiError::from_lead(e, &state, locale);

    state.config.campaigns.ensure_open(&campaign, now).map_err(to_api)?;

    let submission = Submission::build(
        &req.lead,
        &state.config.fields,
        &state.config.forms,
        req.started_at.unwrap_or(now),
        now,
    )
    .map_err(to_api)?;

    info!(
        submission_id = %submission.id,
        campaign = %campaign,
        answers = submission.answers.len(),
        "Submission accepted"
    );

    Ok(Json(submission))
}
