//! Keyword heuristics for entries that carry no explicit severity or category.
//!
//! Kept as small pure functions over lowercase text so the rules can be
//! swapped for a table or classifier without touching layout code.

use stackstage_types::Severity;

/// Ordered severity rules. The first rule with a matching keyword wins.
const SEVERITY_RULES: &[(&[&str], Severity)] = &[
    (&["accessible", "security"], Severity::Critical),
    (&["duplicate"], Severity::High),
    (&["lacks", "missing"], Severity::Medium),
];

/// Ordered category rules, same first-match semantics.
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (
        &["security", "accessible", "encrypt", "iam", "public", "tls", "ssl"],
        "Security",
    ),
    (&["cost", "spend", "pricing", "idle", "oversized"], "Cost"),
    (&["latency", "performance", "cache", "throughput", "cdn"], "Performance"),
    (
        &["backup", "availability", "failover", "redundan", "single point", "multi-az"],
        "Reliability",
    ),
];

pub const DEFAULT_CATEGORY: &str = "General";

/// Infer a severity from free text.
///
/// Priority: "accessible"/"security" → critical, "duplicate" → high,
/// "lacks"/"missing" → medium, otherwise medium.
#[must_use]
pub fn infer_severity(text: &str) -> Severity {
    let lower = text.to_lowercase();
    SEVERITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Medium)
}

/// Infer a display category from free text.
#[must_use]
pub fn infer_category(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
