//! Report composition: runs the section renderers in order over one cursor.

use std::fmt;
use std::time::{Duration, Instant};

use stackstage_layout::{Frame, LayoutCursor, LayoutError};
use stackstage_normalize::{normalize_issues, normalize_recommendations};
use stackstage_types::AnalysisResult;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::document::{ReportDocument, Section, SectionKind};
use crate::sections::{
    CostSection, FooterSection, HeaderSection, IssuesSection, MetricsSection,
    RecommendationsSection, SectionRenderer, render_section,
};

/// A4 width, tall enough for every section at the largest list caps.
pub const DEFAULT_FRAME: Frame = Frame::new(595.0, 1500.0, 40.0);
pub const DEFAULT_MAX_ISSUES: usize = 4;
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub frame: Frame,
    pub max_issues: usize,
    pub max_recommendations: usize,
    /// Wall-clock budget for composition, checked after each section.
    /// `None` disables the check.
    pub deadline: Option<Duration>,
    /// Timestamp printed in the footer; the only time input to a render.
    pub generated_at: OffsetDateTime,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            frame: DEFAULT_FRAME,
            max_issues: DEFAULT_MAX_ISSUES,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
            deadline: None,
            generated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Layout {
        section: SectionKind,
        source: LayoutError,
    },
    DeadlineExceeded {
        elapsed: Duration,
        limit: Duration,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Layout { section, .. } => write!(f, "layout failed in {section} section"),
            RenderError::DeadlineExceeded { elapsed, limit } => write!(
                f,
                "render exceeded its deadline ({} ms > {} ms)",
                elapsed.as_millis(),
                limit.as_millis()
            ),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Layout { source, .. } => Some(source),
            RenderError::DeadlineExceeded { .. } => None,
        }
    }
}

/// Owns the cursor for one render pass and collects finished sections.
#[derive(Debug)]
pub struct ReportBuilder {
    cursor: LayoutCursor,
    sections: Vec<Section>,
    started: Instant,
    deadline: Option<Duration>,
}

impl ReportBuilder {
    pub fn new(frame: Frame, deadline: Option<Duration>) -> Self {
        Self {
            cursor: LayoutCursor::new(frame),
            sections: Vec::new(),
            started: Instant::now(),
            deadline,
        }
    }

    /// Render one section below everything pushed so far.
    pub fn push(&mut self, renderer: &dyn SectionRenderer) -> Result<&mut Self, RenderError> {
        let section = render_section(renderer, &mut self.cursor).map_err(|source| {
            RenderError::Layout {
                section: renderer.kind(),
                source,
            }
        })?;
        self.sections.push(section);
        self.check_deadline()?;
        Ok(self)
    }

    /// Start the next section on a new page.
    pub fn page_break(&mut self) -> &mut Self {
        self.cursor.page_break();
        self
    }

    pub fn check_deadline(&self) -> Result<(), RenderError> {
        let Some(limit) = self.deadline else {
            return Ok(());
        };
        let elapsed = self.started.elapsed();
        if elapsed >= limit {
            return Err(RenderError::DeadlineExceeded { elapsed, limit });
        }
        Ok(())
    }

    pub fn finish(self) -> ReportDocument {
        ReportDocument {
            frame: *self.cursor.frame(),
            sections: self.sections,
        }
    }
}

/// Lay out the full report for `result`.
///
/// Sections are rendered in [`SectionKind::ORDER`]. Any layout violation or
/// a blown deadline aborts the whole report.
pub fn compose(result: &AnalysisResult, options: &RenderOptions) -> Result<ReportDocument, RenderError> {
    let issues = normalize_issues(&result.issues, options.max_issues);
    let recommendations = normalize_recommendations(&result.recommendations, options.max_recommendations);

    let header = HeaderSection {
        score: result.overall(),
        analysis_id: result.id.clone(),
        analysis_date: analysis_date(result.timestamp.as_deref(), options.generated_at),
    };
    let metrics = MetricsSection::from_result(result);
    let issues = IssuesSection { issues };
    let recommendations = RecommendationsSection { recommendations };
    let cost = CostSection::from_result(result);
    let footer = FooterSection {
        generated: generated_label(options.generated_at),
        analysis_id: result.id.clone(),
        cost_estimate: result.cost_estimate.clone(),
    };

    let mut builder = ReportBuilder::new(options.frame, options.deadline);
    builder
        .push(&header)?
        .push(&metrics)?
        .push(&issues)?
        .push(&recommendations)?
        .push(&cost)?
        .push(&footer)?;
    Ok(builder.finish())
}

/// Date shown in the header: the analysis timestamp's date when it has a
/// valid `YYYY-MM-DD` prefix, otherwise the generation date.
pub fn analysis_date(timestamp: Option<&str>, generated_at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    timestamp
        .and_then(|ts| ts.trim().get(..10))
        .and_then(|prefix| Date::parse(prefix, &format).ok())
        .unwrap_or_else(|| generated_at.to_offset(UtcOffset::UTC).date())
        .format(&format)
        .unwrap_or_else(|_| "1970-01-01".to_string())
}

/// Footer timestamp, always in UTC.
pub fn generated_label(generated_at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    generated_at
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| "1970-01-01 00:00 UTC".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn analysis_date_prefers_timestamp_prefix() {
        let now = datetime!(2025-06-01 10:00 UTC);
        assert_eq!(
            analysis_date(Some("2024-01-15T08:30:00Z"), now),
            "2024-01-15"
        );
        assert_eq!(analysis_date(Some("yesterday"), now), "2025-06-01");
        assert_eq!(analysis_date(None, now), "2025-06-01");
    }

    #[test]
    fn generated_label_is_utc() {
        let at = datetime!(2024-03-05 16:30 +02:00);
        assert_eq!(generated_label(at), "2024-03-05 14:30 UTC");
    }

    #[test]
    fn sections_follow_fixed_order() {
        let doc = compose(&AnalysisResult::default(), &RenderOptions::default()).expect("render");
        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ORDER.to_vec());
    }

    #[test]
    fn regions_never_overlap() {
        let doc = compose(&AnalysisResult::default(), &RenderOptions::default()).expect("render");
        for pair in doc.sections.windows(2) {
            assert!(pair[0].region.bounds.bottom() <= pair[1].region.bounds.y);
        }
    }

    #[test]
    fn short_canvas_fails_with_overflow() {
        let options = RenderOptions {
            frame: Frame::new(595.0, 300.0, 40.0),
            ..RenderOptions::default()
        };
        let err = compose(&AnalysisResult::default(), &options).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Layout {
                source: LayoutError::Overflow { .. },
                ..
            }
        ));
    }

    #[test]
    fn layout_cause_is_reported_once_through_the_source_chain() {
        let options = RenderOptions {
            frame: Frame::new(595.0, 300.0, 40.0),
            ..RenderOptions::default()
        };
        let err = compose(&AnalysisResult::default(), &options).unwrap_err();
        let shown = err.to_string();
        assert!(shown.starts_with("layout failed in "), "{shown}");
        assert!(!shown.contains("canvas overflow"), "{shown}");

        let mut chain = vec![shown];
        let mut next = std::error::Error::source(&err);
        while let Some(cause) = next {
            chain.push(cause.to_string());
            next = cause.source();
        }
        let joined = chain.join(": ");
        assert_eq!(joined.matches("canvas overflow").count(), 1, "{joined}");
    }

    #[test]
    fn zero_deadline_aborts() {
        let options = RenderOptions {
            deadline: Some(Duration::ZERO),
            ..RenderOptions::default()
        };
        let err = compose(&AnalysisResult::default(), &options).unwrap_err();
        assert!(matches!(err, RenderError::DeadlineExceeded { .. }));
    }

    #[test]
    fn page_break_moves_later_sections_to_next_page() {
        let mut builder = ReportBuilder::new(DEFAULT_FRAME, None);
        builder
            .push(&MetricsSection::from_result(&AnalysisResult::default()))
            .expect("metrics");
        builder.page_break();
        builder
            .push(&CostSection::from_result(&AnalysisResult::default()))
            .expect("cost");
        let doc = builder.finish();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.sections[1].region.bounds.y, 0.0);
    }
}
