//! Fuzz target for the full render pipeline.
//!
//! Any analysis JSON that deserializes must render to a non-empty PDF.

#![no_main]
use libfuzzer_sys::fuzz_target;
use stackstage_core::render_report;
use stackstage_settings::ReportSettings;
use stackstage_types::AnalysisResult;
use time::OffsetDateTime;

fuzz_target!(|data: &[u8]| {
    let Ok(result) = serde_json::from_slice::<AnalysisResult>(data) else {
        return;
    };
    let report = render_report(&result, &ReportSettings::default(), OffsetDateTime::UNIX_EPOCH)
        .expect("well-formed input renders");
    assert!(report.bytes.starts_with(b"%PDF-"));
});
