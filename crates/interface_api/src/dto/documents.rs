//! Document DTOs

use serde::{Deserialize, Serialize};

use core_kernel::DocumentKind;

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted: String,
    pub digits: String,
    /// Pattern the formatted value follows
    pub kind: DocumentKind,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
