//! Minimal HAR 1.2 structures for entry cataloging.

use serde::Deserialize;

/// Root HAR document (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarFile {
    pub log: HarLog,
}

#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    #[serde(default, rename = "startedDateTime")]
    pub started_date_time: String,
    pub request: HarRequest,
    #[serde(default)]
    pub response: HarResponse,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
    #[serde(default)]
    pub method: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub content: HarContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
    #[serde(default)]
    pub size: i64,
    /// Absent when the capture stored no body. Distinct from an empty string,
    /// which is a present, zero-length body.
    #[serde(default)]
    pub text: Option<String>,
}
