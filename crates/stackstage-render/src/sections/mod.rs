//! Section renderers.
//!
//! Each renderer declares its full height up front, gets a region of exactly
//! that height from the cursor, and then draws into a [`SectionCanvas`] that
//! rejects anything outside the region.

mod cost;
mod footer;
mod header;
mod issues;
mod metrics;
mod recommendations;

pub use cost::{CostSection, REFERENCE_MAX_PERCENT};
pub use footer::{FooterSection, ID_TAIL, PLATFORM_LINE};
pub use header::HeaderSection;
pub use issues::{IssuesSection, NO_ISSUES_TITLE};
pub use metrics::MetricsSection;
pub use recommendations::{NO_RECOMMENDATIONS_TITLE, RecommendationsSection, detail_line};

use stackstage_layout::{Frame, LayoutCursor, LayoutError, Point, Rect};
use stackstage_tier::{Rgb, palette};
use stackstage_types::clamp_score;
use tracing::debug;

use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::{Section, SectionKind};

/// Height of a section title line.
pub const TITLE_HEIGHT: f32 = 24.0;
/// Space left below each section body.
pub const SECTION_GAP: f32 = 8.0;
/// Vertical pitch of one list row.
pub const ROW_PITCH: f32 = 52.0;
/// Drawn height of one list row.
pub const ROW_HEIGHT: f32 = 44.0;

const MARKER_RADIUS: f32 = 13.0;
const MARKER_INSET: f32 = 22.0;
/// Left offset of row text, past the marker.
const ROW_TEXT_INSET: f32 = 44.0;

pub trait SectionRenderer {
    fn kind(&self) -> SectionKind;

    /// Total height this section reserves for `frame`.
    fn height(&self, frame: &Frame) -> f32;

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError>;
}

/// Reserve the renderer's region on the cursor and draw into it.
pub fn render_section(
    renderer: &dyn SectionRenderer,
    cursor: &mut LayoutCursor,
) -> Result<Section, LayoutError> {
    let frame = *cursor.frame();
    let kind = renderer.kind();
    let height = renderer.height(&frame);
    let region = cursor.reserve_region(height)?;

    let mut canvas = SectionCanvas::new(region);
    renderer.draw(&mut canvas, &frame)?;
    let ops = canvas.into_ops();

    debug!(
        section = %kind,
        page = region.page,
        top = region.bounds.y,
        height,
        ops = ops.len(),
        "section rendered"
    );

    Ok(Section {
        kind,
        title: kind.title().to_string(),
        region,
        ops,
    })
}

/// Score as shown on the page: clamped, then rounded to a whole number.
pub fn display_score(value: f64) -> i64 {
    clamp_score(value).round() as i64
}

/// Height of a list section holding `rows` rows (at least one).
pub(crate) fn list_height(rows: usize) -> f32 {
    TITLE_HEIGHT + rows.max(1) as f32 * ROW_PITCH + SECTION_GAP
}

pub(crate) fn draw_title(
    canvas: &mut SectionCanvas,
    frame: &Frame,
    kind: SectionKind,
) -> Result<(), LayoutError> {
    let bounds = Rect::new(frame.left(), canvas.top() + 4.0, frame.content_width(), 16.0);
    canvas.text(kind.title(), bounds, TextStyle::bold(13.0, palette::INK))
}

/// Bordered box of list row `index`.
pub(crate) fn draw_row(
    canvas: &mut SectionCanvas,
    frame: &Frame,
    index: usize,
) -> Result<Rect, LayoutError> {
    let top = canvas.top() + TITLE_HEIGHT + index as f32 * ROW_PITCH;
    let row = Rect::new(frame.left(), top, frame.content_width(), ROW_HEIGHT);
    canvas.fill_rect(row, palette::WHITE)?;
    canvas.stroke_rect(row, palette::BORDER, 1.0)?;
    Ok(row)
}

/// Colored circle at the left of a row, with an optional label inside.
pub(crate) fn draw_marker(
    canvas: &mut SectionCanvas,
    row: &Rect,
    label: &str,
    color: Rgb,
) -> Result<(), LayoutError> {
    let center = Point::new(row.x + MARKER_INSET, row.y + MARKER_INSET);
    canvas.fill_circle(center, MARKER_RADIUS, color)?;
    if label.is_empty() {
        return Ok(());
    }
    let bounds = Rect::new(
        center.x - MARKER_RADIUS,
        center.y - 6.0,
        MARKER_RADIUS * 2.0,
        12.0,
    );
    canvas.text(label, bounds, TextStyle::bold(10.0, palette::WHITE).centered())
}

/// Text column of a row: left edge and width right of the marker.
pub(crate) fn row_text_column(row: &Rect) -> (f32, f32) {
    let x = row.x + ROW_TEXT_INSET;
    (x, (row.right() - x - 10.0).max(0.0))
}
