//! Transport encodings of a rendered report.
//!
//! Both shapes wrap the same bytes; choosing one never re-renders.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use stackstage_pdf::CONTENT_TYPE;
use stackstage_settings::FilenameStyle;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::render::RenderedReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Raw bytes with download headers.
    #[default]
    Binary,
    /// Base64 text inside a JSON envelope.
    Base64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryDownload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
    pub content_length: usize,
    /// Ready-made `Content-Disposition` header value.
    pub content_disposition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base64Envelope {
    pub success: bool,
    pub document_bytes_b64: String,
    pub filename: String,
    pub content_type: String,
    pub size_kb: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutput {
    Binary(BinaryDownload),
    Base64(Base64Envelope),
}

impl ExportOutput {
    pub fn filename(&self) -> &str {
        match self {
            ExportOutput::Binary(download) => &download.filename,
            ExportOutput::Base64(envelope) => &envelope.filename,
        }
    }
}

/// Wrap `report` in the shape `transport` asks for.
pub fn encode(report: RenderedReport, transport: Transport, filename: String) -> ExportOutput {
    match transport {
        Transport::Binary => {
            let content_length = report.bytes.len();
            ExportOutput::Binary(BinaryDownload {
                content_disposition: format!("attachment; filename={filename}"),
                bytes: report.bytes,
                filename,
                content_type: CONTENT_TYPE,
                content_length,
            })
        }
        Transport::Base64 => ExportOutput::Base64(Base64Envelope {
            success: true,
            document_bytes_b64: STANDARD.encode(&report.bytes),
            size_kb: size_kb(report.bytes.len()),
            filename,
            content_type: CONTENT_TYPE.to_string(),
        }),
    }
}

fn size_kb(len: usize) -> f64 {
    (len as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Download filename for a report.
pub fn report_filename(style: FilenameStyle, analysis_id: &str, generated_at: OffsetDateTime) -> String {
    match style {
        FilenameStyle::Dated => {
            let format = format_description!("[year]-[month]-[day]");
            let date = generated_at
                .to_offset(UtcOffset::UTC)
                .format(&format)
                .unwrap_or_else(|_| "1970-01-01".to_string());
            format!("StackStage-Analysis-Report-{date}.pdf")
        }
        FilenameStyle::ById => {
            let id: String = analysis_id
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                .collect();
            format!("StackStage_Analysis_Report_{id}.pdf")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFormat {
    pub format: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
    pub supported: bool,
}

/// Formats an export request may ask for.
pub fn supported_formats() -> Vec<ExportFormat> {
    vec![ExportFormat {
        format: crate::request::PDF_FORMAT.to_string(),
        name: "PDF Report".to_string(),
        description: "Architecture analysis report with score, metrics, issues, recommendations and cost breakdown".to_string(),
        mime_type: CONTENT_TYPE.to_string(),
        supported: true,
    }]
}
