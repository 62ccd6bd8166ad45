//! The single bytes-producing pipeline: compose, emit, then enforce ceilings.

use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use stackstage_layout::Frame;
use stackstage_pdf::EmitOptions;
use stackstage_render::{RenderOptions, compose};
use stackstage_settings::ReportSettings;
use stackstage_types::AnalysisResult;
use time::OffsetDateTime;

/// A finished document, ready for a transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    /// First 16 hex characters of the blake3 digest of `bytes`.
    pub digest: String,
    pub pages: u32,
}

/// Map settings onto the options the render tier understands.
pub fn render_options(settings: &ReportSettings, generated_at: OffsetDateTime) -> RenderOptions {
    let layout = &settings.layout;
    RenderOptions {
        frame: Frame::new(layout.width, layout.height, layout.margin),
        max_issues: settings.limits.max_issues,
        max_recommendations: settings.limits.max_recommendations,
        deadline: Some(settings.limits.render_deadline()),
        generated_at,
    }
}

/// Render `result` to PDF bytes.
///
/// `generated_at` is the only time input, so equal arguments give equal bytes.
pub fn render_report(
    result: &AnalysisResult,
    settings: &ReportSettings,
    generated_at: OffsetDateTime,
) -> Result<RenderedReport> {
    let started = Instant::now();
    settings.validate().context("invalid report settings")?;

    let options = render_options(settings, generated_at);
    let document = compose(result, &options).context("failed to lay out report")?;
    let pages = document.page_count();

    let emit_options = EmitOptions {
        compress: settings.output.compress,
    };
    let bytes = stackstage_pdf::emit(&document, &emit_options)?;

    let limit = settings.limits.render_deadline();
    let elapsed = started.elapsed();
    if elapsed >= limit {
        bail!(
            "render exceeded its deadline after emission ({} ms > {} ms)",
            elapsed.as_millis(),
            limit.as_millis()
        );
    }
    ensure!(!bytes.is_empty(), "emitter produced an empty document");
    let ceiling = settings.limits.max_output_bytes;
    ensure!(
        bytes.len() <= ceiling,
        "document is {} bytes, above the {ceiling} byte ceiling",
        bytes.len()
    );

    let digest = short_hash(&bytes);
    Ok(RenderedReport {
        bytes,
        digest,
        pages,
    })
}

fn short_hash(bytes: &[u8]) -> String {
    let mut hex = blake3::hash(bytes).to_hex().to_string();
    hex.truncate(16);
    hex
}
