//! JSON-in, JSON-out entry point for HTTP handlers and language bindings.
//!
//! Success returns the base64 envelope:
//! `{"success": true, "document_bytes_b64": "...", "filename": "...", ...}`.
//! Failure returns `{"error": true, "code": "...", "message": "..."}`.
//!
//! Missing request keys use defaults; malformed JSON is a validation error.

use time::OffsetDateTime;

use stackstage_settings::ReportSettings;
use stackstage_store::AnalysisStore;

use crate::error::{ErrorResponse, ExportError};
use crate::request::ExportRequest;
use crate::transport::{ExportOutput, Transport};
use crate::export_workflow_at;

pub fn export_json(store: &dyn AnalysisStore, request_json: &str, settings: &ReportSettings) -> String {
    export_json_at(store, request_json, settings, OffsetDateTime::now_utc())
}

/// [`export_json`] with a fixed generation time.
pub fn export_json_at(
    store: &dyn AnalysisStore,
    request_json: &str,
    settings: &ReportSettings,
    generated_at: OffsetDateTime,
) -> String {
    match export_json_inner(store, request_json, settings, generated_at) {
        Ok(json) => json,
        Err(err) => ErrorResponse::from(err).to_json(),
    }
}

fn export_json_inner(
    store: &dyn AnalysisStore,
    request_json: &str,
    settings: &ReportSettings,
    generated_at: OffsetDateTime,
) -> Result<String, ExportError> {
    let request = ExportRequest::from_json(request_json)?;
    let output = export_workflow_at(store, &request, Transport::Base64, settings, generated_at)?;
    let ExportOutput::Base64(envelope) = output else {
        return Err(ExportError::render_failed());
    };
    serde_json::to_string(&envelope).map_err(|_| ExportError::render_failed())
}
