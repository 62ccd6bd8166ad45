use stackstage_layout::{Frame, GridSpec, LayoutError, Point, Rect};
use stackstage_tier::{fill_width, palette, tier_of};
use stackstage_types::{AnalysisResult, Metric};

use super::{SECTION_GAP, SectionRenderer, TITLE_HEIGHT, display_score, draw_title};
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

const GUTTER: f32 = 12.0;
const CARD_HEIGHT: f32 = 72.0;
const ROW_HEIGHT: f32 = CARD_HEIGHT + GUTTER;
const BAR_HEIGHT: f32 = 8.0;
const CARD_PADDING: f32 = 12.0;

/// 2-column grid of metric cards, one per [`Metric`], in fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSection {
    pub values: [(Metric, f64); 4],
}

impl MetricsSection {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            values: Metric::ORDER.map(|m| (m, result.metric(m))),
        }
    }

    pub fn grid(frame: &Frame, top: f32) -> GridSpec {
        GridSpec::two_column(
            Point::new(frame.left(), top + TITLE_HEIGHT),
            (frame.content_width() + GUTTER) / 2.0,
            ROW_HEIGHT,
        )
    }
}

impl SectionRenderer for MetricsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Metrics
    }

    fn height(&self, frame: &Frame) -> f32 {
        TITLE_HEIGHT + Self::grid(frame, 0.0).height_for(self.values.len()) + SECTION_GAP
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        draw_title(canvas, frame, SectionKind::Metrics)?;
        let grid = Self::grid(frame, canvas.top());
        let card_width = (grid.column_width - GUTTER).max(0.0);
        let inner = (card_width - 2.0 * CARD_PADDING).max(0.0);

        for (index, (metric, value)) in self.values.iter().enumerate() {
            let origin = grid.cell(index);
            let card = Rect::new(origin.x, origin.y, card_width, CARD_HEIGHT);
            let shown = display_score(*value);
            let tier = tier_of(shown as f64);
            let x = card.x + CARD_PADDING;

            canvas.fill_rect(card, palette::SUBTLE_FILL)?;
            canvas.stroke_rect(card, palette::BORDER, 1.0)?;
            canvas.text(
                metric.label(),
                Rect::new(x, card.y + 10.0, inner, 12.0),
                TextStyle::regular(10.0, palette::MUTED),
            )?;
            canvas.text(
                &shown.to_string(),
                Rect::new(x, card.y + 26.0, inner / 2.0, 22.0),
                TextStyle::bold(20.0, tier.color()),
            )?;
            canvas.text(
                &tier.as_str().to_uppercase(),
                Rect::new(x + inner / 2.0, card.y + 30.0, inner / 2.0, 12.0),
                TextStyle::bold(9.0, tier.color()).right(),
            )?;

            let track = Rect::new(x, card.y + 54.0, inner, BAR_HEIGHT);
            canvas.fill_rect(track, palette::TRACK)?;
            let filled = fill_width(inner, shown as f64);
            if filled > 0.0 {
                canvas.fill_rect(Rect::new(x, track.y, filled, BAR_HEIGHT), tier.color())?;
            }
        }
        Ok(())
    }
}
