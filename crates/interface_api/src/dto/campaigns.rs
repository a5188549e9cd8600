//! Campaign DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use domain_lead::CampaignStatus;

#[derive(Debug, Serialize)]
pub struct CampaignResponse {
    pub campaign: String,
    pub form_active: bool,
    pub form_start: DateTime<Utc>,
    pub form_end: DateTime<Utc>,
    pub status: CampaignStatus,
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_message: Option<String>,
}
