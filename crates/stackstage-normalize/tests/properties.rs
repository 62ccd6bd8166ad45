//! Property-based tests: normalization is total and order-preserving.

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use stackstage_normalize::{
    infer_severity, normalize_issue, normalize_issues, normalize_recommendation,
    normalize_recommendations,
};
use stackstage_types::{IssueRecord, RawIssue, RawRecommendation, Severity};

fn arb_raw_issue() -> impl Strategy<Value = RawIssue> {
    prop_oneof![
        ".{0,40}".prop_map(RawIssue::Text),
        (
            proptest::option::of("[a-zA-Z]{0,10}"),
            proptest::option::of(".{0,40}"),
        )
            .prop_map(|(severity, text)| RawIssue::Structured(IssueRecord {
                severity,
                text,
                ..Default::default()
            })),
        Just(RawIssue::Other(serde_json::Value::Null)),
    ]
}

fn arb_junk_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>().prop_map(|n| json!(n)),
        ".{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Extra keys with arbitrary values, plus odd values for known optional keys.
fn arb_junk_fields() -> impl Strategy<Value = Map<String, Value>> {
    (
        proptest::collection::btree_map("[a-z_]{1,12}", arb_junk_value(), 0..6),
        proptest::collection::btree_map(
            prop_oneof![
                Just("evidence"),
                Just("category"),
                Just("impact"),
                Just("steps"),
                Just("implementation"),
            ],
            arb_junk_value(),
            0..5,
        ),
    )
        .prop_map(|(extra, known)| {
            extra
                .into_iter()
                .chain(known.into_iter().map(|(k, v)| (k.to_string(), v)))
                .collect()
        })
}

const EXPLICIT_KEYS: [&str; 5] = ["severity", "title", "detail", "text", "rationale"];

proptest! {
    #[test]
    fn explicit_issue_values_survive_junk_fields(
        junk in arb_junk_fields(),
        severity in prop::sample::select(Severity::ALL.to_vec()),
        detail in "[A-Za-z][A-Za-z ]{0,30}",
    ) {
        let mut map = junk;
        for key in EXPLICIT_KEYS {
            map.remove(key);
        }
        map.insert("severity".into(), json!(severity.as_str()));
        map.insert("detail".into(), json!(detail));
        let raw: RawIssue = serde_json::from_value(Value::Object(map)).expect("raw issue");
        let issue = normalize_issue(&raw, 0);
        prop_assert_eq!(issue.severity, severity);
        prop_assert_eq!(issue.detail, detail.trim());
    }

    #[test]
    fn explicit_recommendation_values_survive_junk_fields(
        junk in arb_junk_fields(),
        title in "[A-Za-z][A-Za-z ]{0,30}",
        rationale in "[0-9][A-Za-z ]{0,30}",
    ) {
        let mut map = junk;
        for key in EXPLICIT_KEYS {
            map.remove(key);
        }
        map.remove("description");
        map.insert("title".into(), json!(title));
        map.insert("rationale".into(), json!(rationale));
        let raw: RawRecommendation =
            serde_json::from_value(Value::Object(map)).expect("raw recommendation");
        let rec = normalize_recommendation(&raw, 0);
        prop_assert_eq!(rec.title, title.trim());
        prop_assert_eq!(rec.rationale, rationale.trim());
    }

    #[test]
    fn every_issue_has_non_empty_detail(raws in proptest::collection::vec(arb_raw_issue(), 0..12)) {
        for issue in normalize_issues(&raws, 12) {
            prop_assert!(!issue.detail.trim().is_empty());
            prop_assert!(Severity::ALL.contains(&issue.severity));
        }
    }

    #[test]
    fn cap_bounds_output_length(
        raws in proptest::collection::vec(arb_raw_issue(), 0..20),
        cap in 0usize..10,
    ) {
        let out = normalize_issues(&raws, cap);
        prop_assert_eq!(out.len(), raws.len().min(cap));
    }

    #[test]
    fn recommendations_always_titled(texts in proptest::collection::vec(".{0,30}", 0..10)) {
        let raws: Vec<_> = texts.into_iter().map(RawRecommendation::Text).collect();
        for rec in normalize_recommendations(&raws, 10) {
            prop_assert!(!rec.title.trim().is_empty());
        }
    }

    #[test]
    fn inference_is_case_insensitive(text in "[a-z ]{0,30}") {
        prop_assert_eq!(infer_severity(&text), infer_severity(&text.to_uppercase()));
    }
}
