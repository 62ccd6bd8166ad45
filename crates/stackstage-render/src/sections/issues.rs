use stackstage_layout::{Frame, LayoutError, Rect};
use stackstage_tier::{Tier, palette};
use stackstage_types::Issue;

use super::{SectionRenderer, draw_marker, draw_row, draw_title, list_height, row_text_column};
use crate::canvas::{SectionCanvas, TextStyle};
use crate::document::SectionKind;

pub const NO_ISSUES_TITLE: &str = "No issues found";
const NO_ISSUES_MESSAGE: &str = "No critical issues were identified in this architecture.";

/// Numbered, severity-colored issue rows.
///
/// `issues` is already normalized and capped; an empty list renders the
/// "no issues found" block instead.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuesSection {
    pub issues: Vec<Issue>,
}

impl SectionRenderer for IssuesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Issues
    }

    fn height(&self, _frame: &Frame) -> f32 {
        list_height(self.issues.len())
    }

    fn draw(&self, canvas: &mut SectionCanvas, frame: &Frame) -> Result<(), LayoutError> {
        draw_title(canvas, frame, SectionKind::Issues)?;

        if self.issues.is_empty() {
            let row = draw_row(canvas, frame, 0)?;
            draw_marker(canvas, &row, "", Tier::Good.color())?;
            let (x, width) = row_text_column(&row);
            canvas.text(
                NO_ISSUES_TITLE,
                Rect::new(x, row.y + 6.0, width, 14.0),
                TextStyle::bold(10.0, palette::INK),
            )?;
            return canvas.text(
                NO_ISSUES_MESSAGE,
                Rect::new(x, row.y + 22.0, width, 14.0),
                TextStyle::regular(9.0, palette::MUTED),
            );
        }

        for (index, issue) in self.issues.iter().enumerate() {
            let color = palette::severity_color(issue.severity);
            let row = draw_row(canvas, frame, index)?;
            draw_marker(canvas, &row, &(index + 1).to_string(), color)?;

            let (x, width) = row_text_column(&row);
            let half = width / 2.0;
            canvas.text(
                &format!("{} | {}", issue.severity.tag(), issue.category),
                Rect::new(x, row.y + 6.0, half, 12.0),
                TextStyle::bold(8.0, color),
            )?;
            if !issue.evidence.is_empty() {
                canvas.text(
                    &issue.evidence,
                    Rect::new(x + half, row.y + 6.0, half, 12.0),
                    TextStyle::regular(8.0, palette::MUTED).right(),
                )?;
            }
            canvas.text(
                &issue.detail,
                Rect::new(x, row.y + 20.0, width, 16.0),
                TextStyle::regular(10.0, palette::INK),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::DrawOp;
    use crate::sections::render_section;
    use stackstage_layout::LayoutCursor;
    use stackstage_types::Severity;

    fn render(issues: Vec<Issue>) -> crate::document::Section {
        let mut cursor = LayoutCursor::new(Frame::new(595.0, 1500.0, 40.0));
        render_section(&IssuesSection { issues }, &mut cursor).expect("fits")
    }

    fn issue(severity: Severity, detail: &str) -> Issue {
        Issue {
            severity,
            category: "Security".into(),
            detail: detail.into(),
            evidence: String::new(),
        }
    }

    #[test]
    fn empty_list_renders_fallback_block() {
        let section = render(Vec::new());
        assert!(section.mentions(NO_ISSUES_TITLE));
        assert_eq!(section.region.bounds.height, list_height(1));
    }

    #[test]
    fn markers_use_severity_colors() {
        let section = render(vec![
            issue(Severity::Critical, "S3 bucket publicly accessible"),
            issue(Severity::Low, "Tags missing on volumes"),
        ]);
        let markers: Vec<_> = section
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec![palette::SEVERITY_CRITICAL, palette::SEVERITY_LOW]);
        assert!(section.mentions("CRITICAL | Security"));
        assert!(!section.mentions(NO_ISSUES_TITLE));
    }

    #[test]
    fn long_detail_stays_inside_row() {
        let long = "x".repeat(500);
        let section = render(vec![issue(Severity::Medium, &long)]);
        let run = section
            .texts()
            .find(|run| run.text.starts_with("xxx"))
            .expect("detail run");
        assert!(run.text.ends_with("..."));
        assert!(run.text.len() < 500);
    }
}
