//! # stackstage-normalize
//!
//! **Tier 1 (Input Normalization)**
//!
//! Maps raw issue and recommendation entries, whatever their shape, onto the
//! canonical records in `stackstage-types`. Normalization never fails.
//!
//! ## Rules
//! * Explicit values on a structured entry always win over inference.
//! * Missing severity is inferred from the entry text (see [`heuristics`]).
//! * An entry with no usable text gets a fallback text chosen by its position.
//! * List normalization takes at most `cap` entries, in input order. Entries
//!   past the cap are dropped silently: they are not counted or summarized.

pub mod fallback;
pub mod heuristics;

use serde_json::Value;
use stackstage_types::{
    Impact, ImpactRecord, Issue, IssueRecord, RawIssue, RawRecommendation, Recommendation,
    RecommendationRecord, RiskReduction, Severity,
};

pub use heuristics::{infer_category, infer_severity};

/// Normalize one issue entry. `index` selects the fallback text if needed.
pub fn normalize_issue(raw: &RawIssue, index: usize) -> Issue {
    match raw {
        RawIssue::Text(text) => issue_from_text(text.trim(), index),
        RawIssue::Structured(record) => issue_from_record(record, index),
        RawIssue::Other(_) => issue_from_text("", index),
    }
}

/// Normalize one recommendation entry. `index` selects the fallback if needed.
pub fn normalize_recommendation(raw: &RawRecommendation, index: usize) -> Recommendation {
    match raw {
        RawRecommendation::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                fallback_recommendation(index)
            } else {
                Recommendation {
                    title: text.to_string(),
                    rationale: String::new(),
                    steps: Vec::new(),
                    impact: None,
                }
            }
        }
        RawRecommendation::Structured(record) => recommendation_from_record(record, index),
        RawRecommendation::Other(_) => fallback_recommendation(index),
    }
}

/// Normalize the first `cap` issues, preserving input order.
pub fn normalize_issues(raws: &[RawIssue], cap: usize) -> Vec<Issue> {
    raws.iter()
        .take(cap)
        .enumerate()
        .map(|(index, raw)| normalize_issue(raw, index))
        .collect()
}

/// Normalize the first `cap` recommendations, preserving input order.
pub fn normalize_recommendations(raws: &[RawRecommendation], cap: usize) -> Vec<Recommendation> {
    raws.iter()
        .take(cap)
        .enumerate()
        .map(|(index, raw)| normalize_recommendation(raw, index))
        .collect()
}

fn issue_from_text(text: &str, index: usize) -> Issue {
    let detail = if text.is_empty() {
        fallback::issue_text(index)
    } else {
        text
    };
    Issue {
        severity: infer_severity(detail),
        category: infer_category(detail).to_string(),
        detail: detail.to_string(),
        evidence: String::new(),
    }
}

fn issue_from_record(record: &IssueRecord, index: usize) -> Issue {
    let detail = record
        .primary_text()
        .unwrap_or_else(|| fallback::issue_text(index));
    let severity = record
        .severity
        .as_deref()
        .and_then(Severity::parse)
        .unwrap_or_else(|| infer_severity(detail));
    let category = record
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| infer_category(detail));
    Issue {
        severity,
        category: category.to_string(),
        detail: detail.to_string(),
        evidence: record
            .evidence
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    }
}

fn recommendation_from_record(record: &RecommendationRecord, index: usize) -> Recommendation {
    let steps = record
        .steps
        .iter()
        .chain(&record.implementation)
        .filter_map(step_text)
        .collect();
    let impact = record.impact.as_ref().map(impact_from_record);

    let Some(title) = record.primary_title() else {
        let fallback = fallback_recommendation(index);
        return Recommendation {
            steps,
            impact,
            ..fallback
        };
    };
    Recommendation {
        title: title.to_string(),
        rationale: record.rationale_for(title).unwrap_or_default().to_string(),
        steps,
        impact,
    }
}

fn fallback_recommendation(index: usize) -> Recommendation {
    let (title, rationale) = fallback::recommendation(index);
    Recommendation {
        title: title.to_string(),
        rationale: rationale.to_string(),
        steps: Vec::new(),
        impact: None,
    }
}

fn step_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn impact_from_record(record: &ImpactRecord) -> Impact {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite()).unwrap_or(0.0);
    let (risk_reduction, risk_note) = match &record.risk_reduction {
        Some(RiskReduction::Percent(percent)) => (finite(Some(*percent)), String::new()),
        Some(RiskReduction::Text(text)) => (0.0, text.trim().to_string()),
        None => (0.0, String::new()),
    };
    Impact {
        cost_monthly_delta: finite(record.cost_monthly_delta),
        latency_ms: finite(record.latency_ms),
        risk_reduction,
        risk_note,
    }
}
