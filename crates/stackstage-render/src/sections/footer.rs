use stackstage_layout::{Frame, LayoutError, Rect, tail_chars};
use stackstage_tier::palette;

use super::SectionRenderer;
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

const HEIGHT: f32 = 56.0;
/// Characters of the analysis id shown in the footer.
pub const ID_TAIL: usize = 8;
pub const PLATFORM_LINE: &str = "Generated by StackStage - Cloud Architecture Analysis Platform";

#[derive(Debug, Clone, PartialEq)]
pub struct FooterSection {
    /// Pre-formatted generation time, e.g. `2024-03-05 14:30 UTC`.
    pub generated: String,
    pub analysis_id: String,
    pub cost_estimate: String,
}

impl SectionRenderer for FooterSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Footer
    }

    fn height(&self, _frame: &Frame) -> f32 {
        HEIGHT
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        let top = canvas.top();
        canvas.fill_rect(Rect::new(0.0, top, frame.width, HEIGHT), palette::FOOTER)?;

        let third = frame.content_width() / 3.0;
        let style = TextStyle::regular(9.0, palette::WHITE);
        let id = match tail_chars(self.analysis_id.trim(), ID_TAIL) {
            tail if tail.is_empty() => "N/A".to_string(),
            tail => tail,
        };
        let cost = match self.cost_estimate.trim() {
            "" => "Not available",
            literal => literal,
        };

        canvas.text(
            &format!("Generated {}", self.generated),
            Rect::new(frame.left(), top + 14.0, third, 12.0),
            style,
        )?;
        canvas.text(
            &format!("Report ID: {id}"),
            Rect::new(frame.left() + third, top + 14.0, third, 12.0),
            style.centered(),
        )?;
        canvas.text(
            &format!("Est. cost: {cost}"),
            Rect::new(frame.left() + 2.0 * third, top + 14.0, third, 12.0),
            style.right(),
        )?;
        canvas.text(
            PLATFORM_LINE,
            Rect::new(frame.left(), top + 32.0, frame.content_width(), 12.0),
            TextStyle::regular(8.0, palette::MUTED).centered(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render_section;
    use stackstage_layout::LayoutCursor;

    fn render(id: &str, cost: &str) -> crate::document::Section {
        let footer = FooterSection {
            generated: "2024-03-05 14:30 UTC".into(),
            analysis_id: id.into(),
            cost_estimate: cost.into(),
        };
        let mut cursor = LayoutCursor::new(Frame::new(595.0, 1500.0, 40.0));
        render_section(&footer, &mut cursor).expect("fits")
    }

    #[test]
    fn shows_id_tail_and_literal_cost() {
        let section = render("analysis-1234567890", "$1,200/month");
        assert!(section.mentions("Report ID: 34567890"));
        assert!(section.mentions("Est. cost: $1,200/month"));
        assert!(section.mentions("Generated 2024-03-05 14:30 UTC"));
        assert!(section.mentions(PLATFORM_LINE));
    }

    #[test]
    fn blank_fields_get_placeholders() {
        let section = render("  ", "");
        assert!(section.mentions("Report ID: N/A"));
        assert!(section.mentions("Est. cost: Not available"));
    }
}
