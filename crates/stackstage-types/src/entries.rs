//! Raw issue and recommendation entries as produced by the analysis pipeline.
//!
//! Entries arrive either as plain text or as a JSON object. Objects are read
//! field by field: a field with an unexpected type is ignored and the rest of
//! the record survives. Anything else (numbers, nulls, arrays) lands in the
//! `Other` variant, so deserialization of an entry list never fails.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawIssue {
    Text(String),
    Structured(IssueRecord),
    Other(Value),
}

impl<'de> Deserialize<'de> for RawIssue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => RawIssue::Text(text),
            Value::Object(map) => RawIssue::Structured(IssueRecord::from_map(&map)),
            other => RawIssue::Other(other),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A string, or a list of matches joined with `, `.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl IssueRecord {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            severity: string_field(map, "severity"),
            category: string_field(map, "category"),
            text: string_field(map, "text"),
            detail: string_field(map, "detail"),
            description: string_field(map, "description"),
            message: string_field(map, "message"),
            title: string_field(map, "title"),
            evidence: evidence_field(map, "evidence"),
        }
    }

    /// First non-blank text field: text, detail, description, message, title.
    pub fn primary_text(&self) -> Option<&str> {
        [
            &self.text,
            &self.detail,
            &self.description,
            &self.message,
            &self.title,
        ]
        .into_iter()
        .find_map(|field| non_blank(field.as_deref()))
    }
}

impl<'de> Deserialize<'de> for IssueRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(|map| Self::from_map(&map))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawRecommendation {
    Text(String),
    Structured(RecommendationRecord),
    Other(Value),
}

impl<'de> Deserialize<'de> for RawRecommendation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => RawRecommendation::Text(text),
            Value::Object(map) => {
                RawRecommendation::Structured(RecommendationRecord::from_map(&map))
            }
            other => RawRecommendation::Other(other),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Implementation steps; non-string entries are stringified.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implementation: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactRecord>,
}

impl RecommendationRecord {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            title: string_field(map, "title"),
            text: string_field(map, "text"),
            description: string_field(map, "description"),
            rationale: string_field(map, "rationale"),
            detail: string_field(map, "detail"),
            steps: list_field(map, "steps"),
            implementation: list_field(map, "implementation"),
            impact: match map.get("impact") {
                Some(Value::Object(impact)) => Some(ImpactRecord::from_map(impact)),
                _ => None,
            },
        }
    }

    /// Title, falling back to the first non-blank descriptive field.
    pub fn primary_title(&self) -> Option<&str> {
        [
            &self.title,
            &self.text,
            &self.description,
            &self.rationale,
            &self.detail,
        ]
        .into_iter()
        .find_map(|field| non_blank(field.as_deref()))
    }

    /// First non-blank descriptive field that differs from `title`.
    pub fn rationale_for(&self, title: &str) -> Option<&str> {
        [
            &self.rationale,
            &self.description,
            &self.detail,
            &self.text,
        ]
        .into_iter()
        .filter_map(|field| non_blank(field.as_deref()))
        .find(|text| *text != title)
    }
}

impl<'de> Deserialize<'de> for RecommendationRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(|map| Self::from_map(&map))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_monthly_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reduction: Option<RiskReduction>,
}

impl ImpactRecord {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let risk_reduction = match map.get("risk_reduction") {
            Some(Value::Number(n)) => n.as_f64().map(RiskReduction::Percent),
            Some(Value::String(s)) => {
                non_blank(Some(s.as_str())).map(|s| RiskReduction::Text(s.to_string()))
            }
            _ => None,
        };
        Self {
            cost_monthly_delta: number_field(map, "cost_monthly_delta"),
            latency_ms: number_field(map, "latency_ms"),
            risk_reduction,
        }
    }
}

impl<'de> Deserialize<'de> for ImpactRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(|map| Self::from_map(&map))
    }
}

/// Risk reduction is either a percentage or a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskReduction {
    Percent(f64),
    Text(String),
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn evidence_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => non_blank(Some(s.as_str())).map(str::to_string),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => string_field(map, key),
    }
}

fn list_field(map: &Map<String, Value>, key: &str) -> Vec<Value> {
    match map.get(key) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(s)) => vec![Value::String(s.clone())],
        _ => Vec::new(),
    }
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
