//! Inline snapshots of the JSON shapes seen by transports.

use stackstage_core::{ExportError, ErrorResponse, export_json_at, supported_formats};
use stackstage_settings::ReportSettings;
use stackstage_store::MemoryStore;
use time::OffsetDateTime;

#[test]
fn not_found_error_json() {
    let store = MemoryStore::new();
    let json = export_json_at(
        &store,
        r#"{"analysisId": "analysis-404"}"#,
        &ReportSettings::default(),
        OffsetDateTime::UNIX_EPOCH,
    );
    insta::assert_snapshot!(json, @r#"{"error":true,"code":"input_not_found","message":"Analysis not found: analysis-404"}"#);
}

#[test]
fn unsupported_format_error_json() {
    let store = MemoryStore::new();
    let json = export_json_at(
        &store,
        r#"{"analysisId": "a-1", "format": "docx"}"#,
        &ReportSettings::default(),
        OffsetDateTime::UNIX_EPOCH,
    );
    insta::assert_snapshot!(json, @r#"{"error":true,"code":"validation_error","message":"Only PDF format is currently supported","details":"format: docx"}"#);
}

#[test]
fn render_error_json() {
    let json = ErrorResponse::from(ExportError::render_failed()).to_json();
    insta::assert_snapshot!(json, @r#"{"error":true,"code":"render_error","message":"Report generation failed"}"#);
}

#[test]
fn supported_formats_json() {
    let json = serde_json::to_string_pretty(&supported_formats()).expect("serialize");
    insta::assert_snapshot!(json, @r#"
    [
      {
        "format": "pdf",
        "name": "PDF Report",
        "description": "Architecture analysis report with score, metrics, issues, recommendations and cost breakdown",
        "mime_type": "application/pdf",
        "supported": true
      }
    ]
    "#);
}
