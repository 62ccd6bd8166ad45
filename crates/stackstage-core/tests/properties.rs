//! Property tests for the render pipeline and filenames.

use proptest::prelude::*;
use stackstage_core::{render_report, report_filename};
use stackstage_settings::{FilenameStyle, ReportSettings};
use stackstage_types::{AnalysisResult, RawIssue, RawRecommendation};
use time::OffsetDateTime;

fn arb_result() -> impl Strategy<Value = AnalysisResult> {
    (
        prop_oneof![-50.0f64..150.0, Just(f64::NAN)],
        proptest::collection::vec(".{0,80}", 0..12),
        proptest::collection::vec(".{0,80}", 0..12),
        "[ -~]{0,40}",
        ".{0,30}",
    )
        .prop_map(|(score, issues, recommendations, id, cost)| AnalysisResult {
            id,
            score,
            issues: issues.into_iter().map(RawIssue::Text).collect(),
            recommendations: recommendations
                .into_iter()
                .map(RawRecommendation::Text)
                .collect(),
            cost_estimate: cost,
            ..AnalysisResult::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn render_never_fails_and_is_deterministic(result in arb_result()) {
        let settings = ReportSettings::default();
        let first = render_report(&result, &settings, OffsetDateTime::UNIX_EPOCH)
            .expect("render");
        prop_assert!(!first.bytes.is_empty());
        prop_assert_eq!(first.pages, 1);
        let second = render_report(&result, &settings, OffsetDateTime::UNIX_EPOCH)
            .expect("render");
        prop_assert_eq!(first.digest, second.digest);
    }

    #[test]
    fn id_filenames_only_use_safe_characters(id in ".{0,40}") {
        let name = report_filename(FilenameStyle::ById, &id, OffsetDateTime::UNIX_EPOCH);
        let stem = name
            .strip_prefix("StackStage_Analysis_Report_")
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .expect("pattern");
        prop_assert!(stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        prop_assert_eq!(stem.chars().count(), id.chars().count());
    }
}
