//! The laid-out report: ordered sections of drawing operations.

use serde::{Deserialize, Serialize};
use stackstage_layout::{Frame, Region};

use crate::ops::{DrawOp, TextRun};

/// Logical blocks of a report, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Metrics,
    Issues,
    Recommendations,
    CostBreakdown,
    Footer,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Header,
        SectionKind::Metrics,
        SectionKind::Issues,
        SectionKind::Recommendations,
        SectionKind::CostBreakdown,
        SectionKind::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Metrics => "metrics",
            SectionKind::Issues => "issues",
            SectionKind::Recommendations => "recommendations",
            SectionKind::CostBreakdown => "cost_breakdown",
            SectionKind::Footer => "footer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Header => "StackStage Architecture Analysis Report",
            SectionKind::Metrics => "Key Metrics",
            SectionKind::Issues => "Critical Issues Identified",
            SectionKind::Recommendations => "Architecture Recommendations",
            SectionKind::CostBreakdown => "Cost Breakdown",
            SectionKind::Footer => "Report Details",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub region: Region,
    pub ops: Vec<DrawOp>,
}

impl Section {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }

    /// Whether any text run in this section contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }
}

/// Fully laid-out report. Built once per export and never modified after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub frame: Frame,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Number of pages spanned by the sections (at least one).
    pub fn page_count(&self) -> u32 {
        self.sections
            .iter()
            .map(|s| s.region.page + 1)
            .max()
            .unwrap_or(1)
    }

    /// Lowest point written on `page`, i.e. the height the page needs.
    pub fn page_extent(&self, page: u32) -> f32 {
        self.sections
            .iter()
            .filter(|s| s.region.page == page)
            .map(|s| s.region.bounds.bottom())
            .fold(0.0, f32::max)
    }

    /// All operations on `page`, in section order.
    pub fn page_ops(&self, page: u32) -> impl Iterator<Item = &DrawOp> {
        self.sections
            .iter()
            .filter(move |s| s.region.page == page)
            .flat_map(|s| s.ops.iter())
    }
}
