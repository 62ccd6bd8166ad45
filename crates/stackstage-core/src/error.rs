//! Structured export errors for the transport layer.
//!
//! Every failure of an export maps onto one of three codes. Render failures
//! carry a generic message only; the cause is logged where it happens.

use serde::{Deserialize, Serialize};
use stackstage_store::StoreError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The analysis id does not resolve in the store.
    InputNotFound,
    /// The request is malformed or incomplete.
    ValidationError,
    /// Normalization, layout or emission failed.
    RenderError,
}

impl ErrorCode {
    /// HTTP status a transport layer should answer with.
    pub fn status_hint(self) -> u16 {
        match self {
            ErrorCode::InputNotFound => 404,
            ErrorCode::ValidationError => 400,
            ErrorCode::RenderError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InputNotFound => write!(f, "input_not_found"),
            ErrorCode::ValidationError => write!(f, "validation_error"),
            ErrorCode::RenderError => write!(f, "render_error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ExportError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn input_not_found(id: &str) -> Self {
        Self::new(
            ErrorCode::InputNotFound,
            format!("Analysis not found: {id}"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// The only shape a render failure takes outside this crate.
    pub fn render_failed() -> Self {
        Self::new(ErrorCode::RenderError, "Report generation failed")
    }

    pub fn status_hint(&self) -> u16 {
        self.code.status_hint()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ExportError {}

impl From<StoreError> for ExportError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::input_not_found(&id),
            StoreError::InvalidId => Self::validation("analysisId is required"),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_details(ErrorCode::ValidationError, "Invalid request JSON", err.to_string())
    }
}

/// JSON error body for transports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<ExportError> for ErrorResponse {
    fn from(err: ExportError) -> Self {
        Self {
            error: true,
            code: err.code.to_string(),
            message: err.message,
            details: err.details,
        }
    }
}

impl ErrorResponse {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"error":true,"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}
