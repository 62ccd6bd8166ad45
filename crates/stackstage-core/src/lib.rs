//! # stackstage-core
//!
//! **Tier 4 (Export Façade)**
//!
//! The primary library interface for StackStage report export. It resolves an
//! analysis from the store, renders it once to PDF bytes, and wraps those
//! bytes in the transport shape the caller asked for.
//!
//! ## What belongs here
//! * Request validation and the structured [`ExportError`] taxonomy
//! * [`render_report`], the single bytes-producing pipeline
//! * Transport encodings and download filenames
//! * [`export_workflow`] and the JSON entry point [`export_json`]
//!
//! ## What does NOT belong here
//! * Section layout (use stackstage-render)
//! * PDF object assembly (use stackstage-pdf)
//! * HTTP routing; hosts call into this crate from their own handlers
//!
//! ## Example
//!
//! ```rust,no_run
//! use stackstage_core::{ExportRequest, Transport, export_workflow};
//! use stackstage_settings::ReportSettings;
//! use stackstage_store::{AnalysisStore, MemoryStore};
//! use stackstage_types::AnalysisResult;
//!
//! let store = MemoryStore::new();
//! store.put("analysis-1", AnalysisResult { score: 73.0, ..AnalysisResult::default() })?;
//!
//! let request = ExportRequest::new("analysis-1");
//! let output = export_workflow(&store, &request, Transport::Binary, &ReportSettings::default())?;
//! println!("{}", output.filename());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod json;
pub mod render;
pub mod request;
pub mod transport;

use time::OffsetDateTime;
use tracing::{Span, error, info, instrument, warn};

pub use stackstage_settings as settings;
pub use stackstage_types as types;

use stackstage_settings::ReportSettings;
use stackstage_store::AnalysisStore;

pub use error::{ErrorCode, ErrorResponse, ExportError};
pub use json::{export_json, export_json_at};
pub use render::{RenderedReport, render_options, render_report};
pub use request::{ExportRequest, PDF_FORMAT};
pub use transport::{
    Base64Envelope, BinaryDownload, ExportFormat, ExportOutput, Transport, encode,
    report_filename, supported_formats,
};

/// Runs the export: Validate -> Lookup -> Render -> Encode.
///
/// Lookup failures short-circuit before any rendering. Render failures are
/// logged with their cause and surface as a generic `render_error`.
pub fn export_workflow(
    store: &dyn AnalysisStore,
    request: &ExportRequest,
    transport: Transport,
    settings: &ReportSettings,
) -> Result<ExportOutput, ExportError> {
    export_workflow_at(store, request, transport, settings, OffsetDateTime::now_utc())
}

/// [`export_workflow`] with a fixed generation time.
#[instrument(skip_all, fields(analysis_id))]
pub fn export_workflow_at(
    store: &dyn AnalysisStore,
    request: &ExportRequest,
    transport: Transport,
    settings: &ReportSettings,
    generated_at: OffsetDateTime,
) -> Result<ExportOutput, ExportError> {
    let id = request.validate()?;
    Span::current().record("analysis_id", id);

    let result = store.get(id).map_err(|err| {
        warn!(error = %err, "analysis lookup failed");
        ExportError::from(err)
    })?;

    let report = render_report(&result, settings, generated_at).map_err(|cause| {
        error!(error = %format!("{cause:#}"), "report generation failed");
        ExportError::render_failed()
    })?;
    info!(
        bytes = report.bytes.len(),
        pages = report.pages,
        digest = %report.digest,
        "report rendered"
    );

    let filename = report_filename(settings.output.filename_style, id, generated_at);
    Ok(encode(report, transport, filename))
}
