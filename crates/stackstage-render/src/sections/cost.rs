use stackstage_layout::{Frame, GridSpec, LayoutError, Point, Rect};
use stackstage_tier::{palette, scaled_width};
use stackstage_types::{AnalysisResult, CostShare};

use super::{SECTION_GAP, SectionRenderer, TITLE_HEIGHT, draw_title};
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

/// Percentage that fills a bar completely.
pub const REFERENCE_MAX_PERCENT: f64 = 50.0;

const BAR_ROW_HEIGHT: f32 = 24.0;
const LABEL_WIDTH: f32 = 90.0;
const BAR_OFFSET: f32 = 100.0;
const VALUE_WIDTH: f32 = 50.0;
const LEGEND_ROW_HEIGHT: f32 = 20.0;
const SWATCH: f32 = 10.0;

/// Horizontal bars per cost category followed by a 2-column legend.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSection {
    pub shares: [CostShare; 4],
}

impl CostSection {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            shares: result.cost_shares(),
        }
    }

    fn bars_height(&self) -> f32 {
        self.shares.len() as f32 * BAR_ROW_HEIGHT
    }

    pub fn legend(&self, frame: &Frame, top: f32) -> GridSpec {
        GridSpec::two_column(
            Point::new(
                frame.left(),
                top + TITLE_HEIGHT + self.bars_height() + SECTION_GAP,
            ),
            frame.content_width() / 2.0,
            LEGEND_ROW_HEIGHT,
        )
    }
}

impl SectionRenderer for CostSection {
    fn kind(&self) -> SectionKind {
        SectionKind::CostBreakdown
    }

    fn height(&self, frame: &Frame) -> f32 {
        TITLE_HEIGHT
            + self.bars_height()
            + SECTION_GAP
            + self.legend(frame, 0.0).height_for(self.shares.len())
            + SECTION_GAP
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        draw_title(canvas, frame, SectionKind::CostBreakdown)?;
        let left = frame.left();
        let bar_width = (frame.content_width() - BAR_OFFSET - VALUE_WIDTH - 10.0).max(0.0);

        for (index, share) in self.shares.iter().enumerate() {
            let y = canvas.top() + TITLE_HEIGHT + index as f32 * BAR_ROW_HEIGHT;
            let color = palette::category_color(share.category);
            canvas.text(
                share.category.label(),
                Rect::new(left, y + 2.0, LABEL_WIDTH, 14.0),
                TextStyle::regular(10.0, palette::INK),
            )?;
            let track = Rect::new(left + BAR_OFFSET, y + 4.0, bar_width, 12.0);
            canvas.fill_rect(track, palette::TRACK)?;
            let filled = scaled_width(bar_width, share.percent, REFERENCE_MAX_PERCENT);
            if filled > 0.0 {
                canvas.fill_rect(Rect::new(track.x, track.y, filled, track.height), color)?;
            }
            canvas.text(
                &format!("{:.0}%", share.percent),
                Rect::new(frame.right() - VALUE_WIDTH, y + 2.0, VALUE_WIDTH, 14.0),
                TextStyle::bold(10.0, palette::INK).right(),
            )?;
        }

        let legend = self.legend(frame, canvas.top());
        for (index, share) in self.shares.iter().enumerate() {
            let cell = legend.cell(index);
            canvas.fill_rect(
                Rect::new(cell.x, cell.y + 4.0, SWATCH, SWATCH),
                palette::category_color(share.category),
            )?;
            canvas.text(
                &format!("{} ({:.0}%)", share.category.label(), share.percent),
                Rect::new(cell.x + 16.0, cell.y + 2.0, legend.column_width - 20.0, 14.0),
                TextStyle::regular(9.0, palette::MUTED),
            )?;
        }
        Ok(())
    }
}
