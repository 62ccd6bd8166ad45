use stackstage_layout::{Frame, LayoutError, Point, Rect};
use stackstage_tier::{palette, tier_of};

use super::{SectionRenderer, display_score};
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

const HEIGHT: f32 = 130.0;
const BANNER_HEIGHT: f32 = 110.0;
const BADGE_OUTER: f32 = 42.0;
const BADGE_INNER: f32 = 35.0;
const SUBTITLE: &str = "Cloud Architecture Analysis Platform";

/// Banner with the report title and the overall score badge.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSection {
    pub score: f64,
    pub analysis_id: String,
    pub analysis_date: String,
}

impl SectionRenderer for HeaderSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Header
    }

    fn height(&self, _frame: &Frame) -> f32 {
        HEIGHT
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        let top = canvas.top();
        canvas.fill_rect(Rect::new(0.0, top, frame.width, BANNER_HEIGHT), palette::BANNER)?;

        // Text column stops short of the badge.
        let text_width = (frame.content_width() - 2.0 * BADGE_OUTER - 26.0).max(0.0);
        canvas.text(
            SectionKind::Header.title(),
            Rect::new(frame.left(), top + 24.0, text_width, 26.0),
            TextStyle::bold(20.0, palette::WHITE),
        )?;
        canvas.text(
            SUBTITLE,
            Rect::new(frame.left(), top + 54.0, text_width, 14.0),
            TextStyle::regular(11.0, palette::WHITE),
        )?;
        let id = if self.analysis_id.trim().is_empty() {
            "N/A"
        } else {
            self.analysis_id.trim()
        };
        canvas.text(
            &format!("Analysis Date: {}  |  Analysis ID: {}", self.analysis_date, id),
            Rect::new(frame.left(), top + 74.0, text_width, 12.0),
            TextStyle::regular(9.0, palette::WHITE),
        )?;

        let score = display_score(self.score);
        let center = Point::new(frame.right() - BADGE_OUTER, top + 55.0);
        canvas.fill_circle(center, BADGE_OUTER, palette::WHITE)?;
        canvas.fill_circle(center, BADGE_INNER, tier_of(score as f64).color())?;
        canvas.text(
            &score.to_string(),
            Rect::new(center.x - 30.0, center.y - 14.0, 60.0, 22.0),
            TextStyle::bold(22.0, palette::WHITE).centered(),
        )?;
        canvas.text(
            "/100",
            Rect::new(center.x - 20.0, center.y + 10.0, 40.0, 10.0),
            TextStyle::regular(8.0, palette::WHITE).centered(),
        )
    }
}
