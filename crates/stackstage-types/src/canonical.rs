//! Canonical report records.
//!
//! Every issue and recommendation is normalized into one of these shapes
//! before it reaches a section renderer.

use serde::{Deserialize, Serialize};

/// Severity of an issue. Always one of the four fixed levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Parse an explicit severity label, case-insensitively.
    ///
    /// Returns `None` for anything outside the fixed set.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Upper-case tag used in rendered rows.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical issue. `detail` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub detail: String,
    pub evidence: String,
}

/// Canonical recommendation. `title` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub rationale: String,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
}

/// Expected effect of applying a recommendation. Missing parts read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub cost_monthly_delta: f64,
    pub latency_ms: f64,
    pub risk_reduction: f64,
    /// Risk reduction given as a sentence instead of a percentage.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub risk_note: String,
}

impl Impact {
    /// Compact one-line summary, omitting zero components.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.cost_monthly_delta != 0.0 {
            let sign = if self.cost_monthly_delta < 0.0 { "-" } else { "+" };
            parts.push(format!("{sign}${:.0}/mo", self.cost_monthly_delta.abs()));
        }
        if self.latency_ms != 0.0 {
            let sign = if self.latency_ms < 0.0 { "-" } else { "+" };
            parts.push(format!("{sign}{:.0}ms latency", self.latency_ms.abs()));
        }
        if self.risk_reduction != 0.0 {
            parts.push(format!("risk -{:.0}%", self.risk_reduction.abs()));
        } else if !self.risk_note.is_empty() {
            parts.push(self.risk_note.clone());
        }
        parts.join(", ")
    }
}
