//! Campaign form windows
//!
//! Each campaign accepts submissions only while its form is active and the
//! current time is inside `[form_start, form_end)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use core_kernel::ValidPeriod;

use crate::error::LeadError;

/// Submission window of one campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWindow {
    pub form_active: bool,
    pub form_start: DateTime<Utc>,
    pub form_end: DateTime<Utc>,
    /// Shown to visitors once the form no longer accepts entries
    #[serde(default)]
    pub closed_message: Option<String>,
}

/// Whether a campaign accepts submissions at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Open,
    Inactive,
    NotStarted,
    Ended,
}

impl CampaignWindow {
    /// The window as a validated period
    pub fn period(&self) -> Result<ValidPeriod, LeadError> {
        Ok(ValidPeriod::bounded(self.form_start, self.form_end)?)
    }

    pub fn status(&self, now: DateTime<Utc>) -> Result<CampaignStatus, LeadError> {
        if !self.form_active {
            return Ok(CampaignStatus::Inactive);
        }
        let period = self.period()?;
        let status = if period.contains(now) {
            CampaignStatus::Open
        } else if period.is_pending(now) {
            CampaignStatus::NotStarted
        } else {
            CampaignStatus::Ended
        };
        Ok(status)
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        matches!(self.status(now), Ok(CampaignStatus::Open))
    }
}

/// Campaign windows keyed by campaign slug
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Campaigns(BTreeMap<String, CampaignWindow>);

impl Campaigns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, window: CampaignWindow) {
        self.0.insert(slug.into(), window);
    }

    pub fn get(&self, slug: &str) -> Result<&CampaignWindow, LeadError> {
        self.0
            .get(slug)
            .ok_or_else(|| LeadError::CampaignNotFound(slug.to_string()))
    }

    /// Fails unless `slug` exists and is open at `now`
    pub fn ensure_open(&self, slug: &str, now: DateTime<Utc>) -> Result<&CampaignWindow, LeadError> {
        let window = self.get(slug)?;
        match window.status(now)? {
            CampaignStatus::Open => Ok(window),
            status => {
                debug!(campaign = %slug, ?status, "Campaign closed");
                Err(LeadError::CampaignClosed {
                    campaign: slug.to_string(),
                    status,
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CampaignWindow)> for Campaigns {
    fn from_iter<I: IntoIterator<Item = (String, CampaignWindow)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
