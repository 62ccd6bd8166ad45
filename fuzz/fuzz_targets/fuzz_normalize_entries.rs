//! Fuzz target for raw issue and recommendation normalization.
//!
//! Any JSON array deserializes into raw entries; normalization must never
//! panic and must respect the cap.

#![no_main]
use libfuzzer_sys::fuzz_target;
use stackstage_normalize::{normalize_issues, normalize_recommendations};
use stackstage_types::{RawIssue, RawRecommendation};

fuzz_target!(|data: &[u8]| {
    if let Ok(issues) = serde_json::from_slice::<Vec<RawIssue>>(data) {
        let normalized = normalize_issues(&issues, 4);
        assert!(normalized.len() <= 4);
        assert!(normalized.iter().all(|issue| !issue.detail.is_empty()));
    }
    if let Ok(recommendations) = serde_json::from_slice::<Vec<RawRecommendation>>(data) {
        let normalized = normalize_recommendations(&recommendations, 4);
        assert!(normalized.len() <= 4);
        assert!(normalized.iter().all(|rec| !rec.title.is_empty()));
    }
});
