//! The export request as received from the transport layer.

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

pub const PDF_FORMAT: &str = "pdf";

/// `{ analysisId, format, includeCharts, includeDiagrams }`.
///
/// `includeCharts` and `includeDiagrams` are accepted and carried along but do
/// not change the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub analysis_id: Option<String>,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "enabled")]
    pub include_charts: bool,
    #[serde(default = "enabled")]
    pub include_diagrams: bool,
}

fn default_format() -> String {
    PDF_FORMAT.to_string()
}

fn enabled() -> bool {
    true
}

impl ExportRequest {
    pub fn new(analysis_id: impl Into<String>) -> Self {
        Self {
            analysis_id: Some(analysis_id.into()),
            format: default_format(),
            include_charts: true,
            include_diagrams: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the request and return the trimmed analysis id.
    pub fn validate(&self) -> Result<&str, ExportError> {
        let id = self
            .analysis_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ExportError::validation("analysisId is required"))?;
        if !self.format.trim().eq_ignore_ascii_case(PDF_FORMAT) {
            return Err(ExportError::with_details(
                crate::error::ErrorCode::ValidationError,
                "Only PDF format is currently supported",
                format!("format: {}", self.format),
            ));
        }
        Ok(id)
    }
}
