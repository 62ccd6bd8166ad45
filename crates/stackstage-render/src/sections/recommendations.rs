use stackstage_layout::{Frame, LayoutError, Rect};
use stackstage_tier::{Tier, palette};
use stackstage_types::Recommendation;

use super::{SectionRenderer, draw_marker, draw_row, draw_title, list_height, row_text_column};
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

pub const NO_RECOMMENDATIONS_TITLE: &str = "All optimizations applied";
const NO_RECOMMENDATIONS_MESSAGE: &str =
    "This architecture already follows the recommended practices.";

/// Numbered recommendation rows with position-colored markers.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsSection {
    pub recommendations: Vec<Recommendation>,
}

/// Second line of a recommendation row: rationale (or steps), then impact.
pub fn detail_line(rec: &Recommendation) -> String {
    let mut parts = Vec::new();
    if !rec.rationale.is_empty() {
        parts.push(rec.rationale.clone());
    } else if !rec.steps.is_empty() {
        parts.push(rec.steps.join("; "));
    }
    if let Some(impact) = &rec.impact {
        let summary = impact.summary();
        if !summary.is_empty() {
            parts.push(format!("Impact: {summary}"));
        }
    }
    parts.join(" | ")
}

impl SectionRenderer for RecommendationsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Recommendations
    }

    fn height(&self, _frame: &Frame) -> f32 {
        list_height(self.recommendations.len())
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        draw_title(canvas, frame, SectionKind::Recommendations)?;

        if self.recommendations.is_empty() {
            let row = draw_row(canvas, frame, 0)?;
            draw_marker(canvas, &row, "", Tier::Good.color())?;
            let (x, width) = row_text_column(&row);
            canvas.text(
                NO_RECOMMENDATIONS_TITLE,
                Rect::new(x, row.y + 6.0, width, 14.0),
                TextStyle::bold(10.0, palette::INK),
            )?;
            return canvas.text(
                NO_RECOMMENDATIONS_MESSAGE,
                Rect::new(x, row.y + 22.0, width, 14.0),
                TextStyle::regular(9.0, palette::MUTED),
            );
        }

        for (index, rec) in self.recommendations.iter().enumerate() {
            let row = draw_row(canvas, frame, index)?;
            draw_marker(
                canvas,
                &row,
                &(index + 1).to_string(),
                palette::position_color(index),
            )?;
            let (x, width) = row_text_column(&row);
            canvas.text(
                &rec.title,
                Rect::new(x, row.y + 6.0, width, 14.0),
                TextStyle::bold(10.0, palette::INK),
            )?;
            let detail = detail_line(rec);
            if !detail.is_empty() {
                canvas.text(
                    &detail,
                    Rect::new(x, row.y + 22.0, width, 14.0),
                    TextStyle::regular(9.0, palette::MUTED),
                )?;
            }
        }
        Ok(())
    }
}
