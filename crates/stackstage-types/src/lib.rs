//! # stackstage-types
//!
//! **Tier 0 (Report Contract)**
//!
//! Pure data structures for analysis results and the canonical records the
//! report renderer consumes. No I/O or business logic.
//!
//! ## What belongs here
//! * `AnalysisResult` as fetched from the analysis store
//! * Raw issue/recommendation shapes (plain text or structured record)
//! * Canonical `Issue` / `Recommendation` records and `Severity`
//!
//! ## What does NOT belong here
//! * Severity inference or normalization (use stackstage-normalize)
//! * Layout or drawing (use stackstage-layout / stackstage-render)
//! * Store access

pub mod canonical;
pub mod entries;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use canonical::{Impact, Issue, Recommendation, Severity};
pub use entries::{
    ImpactRecord, IssueRecord, RawIssue, RawRecommendation, RecommendationRecord, RiskReduction,
};

/// Result of a previously computed architecture analysis.
///
/// The analysis pipeline is loose about shapes, so every field is defaulted
/// and the common spellings of each key are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, alias = "analysis_id", alias = "analysisId")]
    pub id: String,
    /// Overall score, nominally 0-100.
    #[serde(default, alias = "overall", alias = "overall_score")]
    pub score: f64,
    #[serde(default, alias = "categories")]
    pub scores: CategoryScores,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    #[serde(default)]
    pub recommendations: Vec<RawRecommendation>,
    /// Literal cost estimate, rendered verbatim in the footer.
    #[serde(default, alias = "estimated_cost", alias = "costEstimate")]
    pub cost_estimate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Percentage overrides keyed by cost category name; unknown keys are ignored.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cost_breakdown: BTreeMap<String, f64>,
}

/// Per-category sub-scores. Absent values are derived from the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
}

/// Named metric shown on a metrics card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Security,
    Performance,
    Cost,
    Reliability,
}

impl Metric {
    /// Fixed render order of the metrics grid.
    pub const ORDER: [Metric; 4] = [
        Metric::Security,
        Metric::Performance,
        Metric::Cost,
        Metric::Reliability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Security => "Security",
            Metric::Performance => "Performance",
            Metric::Cost => "Cost Efficiency",
            Metric::Reliability => "Reliability",
        }
    }
}

impl AnalysisResult {
    /// Overall score clamped to 0-100. NaN reads as 0.
    pub fn overall(&self) -> f64 {
        clamp_score(self.score)
    }

    /// Sub-score for `metric`, falling back to the overall score when absent.
    pub fn metric(&self, metric: Metric) -> f64 {
        let raw = match metric {
            Metric::Security => self.scores.security,
            Metric::Performance => self.scores.performance,
            Metric::Cost => self.scores.cost,
            Metric::Reliability => self.scores.reliability,
        };
        raw.map(clamp_score).unwrap_or_else(|| self.overall())
    }

    /// Cost split in fixed category order, with input overrides applied.
    pub fn cost_shares(&self) -> [CostShare; 4] {
        CostCategory::ORDER.map(|category| {
            let percent = self
                .cost_breakdown
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(category.label()))
                .map(|(_, percent)| *percent)
                .filter(|p| p.is_finite())
                .unwrap_or_else(|| category.default_percent());
            CostShare {
                category,
                percent: percent.clamp(0.0, 100.0),
            }
        })
    }
}

/// Clamp a score into 0-100, mapping NaN to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Fixed cost categories shown in the cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Compute,
    Storage,
    Network,
    Security,
}

impl CostCategory {
    pub const ORDER: [CostCategory; 4] = [
        CostCategory::Compute,
        CostCategory::Storage,
        CostCategory::Network,
        CostCategory::Security,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Compute => "Compute",
            CostCategory::Storage => "Storage",
            CostCategory::Network => "Network",
            CostCategory::Security => "Security",
        }
    }

    pub fn default_percent(self) -> f64 {
        match self {
            CostCategory::Compute => 45.0,
            CostCategory::Storage => 25.0,
            CostCategory::Network => 20.0,
            CostCategory::Security => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub category: CostCategory,
    pub percent: f64,
}
