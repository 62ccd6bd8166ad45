//! BDD-style scenarios for report composition.

use stackstage_layout::Rect;
use stackstage_render::sections::{NO_ISSUES_TITLE, NO_RECOMMENDATIONS_TITLE};
use stackstage_render::{DrawOp, RenderOptions, ReportDocument, SectionKind, compose};
use stackstage_tier::palette;
use stackstage_types::{AnalysisResult, RawIssue};
use time::macros::datetime;

// ── Helpers ──────────────────────────────────────────────────────────

fn result_from(json: &str) -> AnalysisResult {
    serde_json::from_str(json).expect("valid analysis result")
}

fn render(result: &AnalysisResult) -> ReportDocument {
    let options = RenderOptions {
        generated_at: datetime!(2024-07-01 09:15 UTC),
        ..RenderOptions::default()
    };
    compose(result, &options).expect("render succeeds")
}

fn circle_colors(doc: &ReportDocument, kind: SectionKind) -> Vec<palette::Rgb> {
    doc.section(kind)
        .expect("section present")
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillCircle { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

// ── End-to-end ───────────────────────────────────────────────────────

#[test]
fn given_score_73_and_no_entries_when_composed_then_badge_is_watch() {
    let doc = render(&result_from(r#"{"score": 73, "issues": [], "recommendations": []}"#));

    let header = doc.section(SectionKind::Header).expect("header");
    assert!(header.texts().any(|t| t.text == "73"));
    assert_eq!(
        circle_colors(&doc, SectionKind::Header),
        vec![palette::WHITE, palette::TIER_WATCH]
    );
}

#[test]
fn given_score_73_when_composed_then_four_metric_cards_use_overall() {
    let doc = render(&result_from(r#"{"score": 73}"#));

    let metrics = doc.section(SectionKind::Metrics).expect("metrics");
    let values = metrics.texts().filter(|t| t.text == "73").count();
    assert_eq!(values, 4);
}

#[test]
fn given_no_entries_when_composed_then_both_fallback_blocks_render() {
    let doc = render(&result_from(r#"{"score": 73}"#));

    assert!(doc.section(SectionKind::Issues).expect("issues").mentions(NO_ISSUES_TITLE));
    assert!(
        doc.section(SectionKind::Recommendations)
            .expect("recommendations")
            .mentions(NO_RECOMMENDATIONS_TITLE)
    );
}

#[test]
fn given_generation_time_when_composed_then_footer_shows_date() {
    let doc = render(&AnalysisResult::default());
    assert!(
        doc.section(SectionKind::Footer)
            .expect("footer")
            .mentions("2024-07-01")
    );
}

// ── Truncation ───────────────────────────────────────────────────────

#[test]
fn given_ten_issues_and_cap_four_when_composed_then_first_four_render_in_order() {
    let result = AnalysisResult {
        issues: (1..=10)
            .map(|i| RawIssue::Text(format!("Issue number {i}")))
            .collect(),
        ..AnalysisResult::default()
    };
    let doc = render(&result);

    let issues = doc.section(SectionKind::Issues).expect("issues");
    let details: Vec<_> = issues
        .texts()
        .filter(|t| t.text.starts_with("Issue number"))
        .map(|t| t.text.clone())
        .collect();
    assert_eq!(
        details,
        vec!["Issue number 1", "Issue number 2", "Issue number 3", "Issue number 4"]
    );
    assert!(!issues.mentions("6 more"));
    assert!(!issues.mentions(NO_ISSUES_TITLE));
}

// ── Normalization precedence ─────────────────────────────────────────

#[test]
fn given_plain_accessible_text_when_composed_then_marker_is_critical() {
    let doc = render(&result_from(
        r#"{"issues": ["S3 bucket publicly accessible"]}"#,
    ));
    assert_eq!(
        circle_colors(&doc, SectionKind::Issues),
        vec![palette::SEVERITY_CRITICAL]
    );
}

#[test]
fn given_explicit_low_severity_when_composed_then_explicit_wins() {
    let doc = render(&result_from(
        r#"{"issues": [{"text": "S3 bucket publicly accessible", "severity": "low"}]}"#,
    ));
    assert_eq!(
        circle_colors(&doc, SectionKind::Issues),
        vec![palette::SEVERITY_LOW]
    );
    assert!(
        doc.section(SectionKind::Issues)
            .expect("issues")
            .mentions("LOW | Security")
    );
}

#[test]
fn given_malformed_entries_when_composed_then_fallback_text_fills_rows() {
    let doc = render(&result_from(r#"{"issues": [42, null, {"severity": "high"}]}"#));

    let issues = doc.section(SectionKind::Issues).expect("issues");
    let markers = circle_colors(&doc, SectionKind::Issues);
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[2], palette::SEVERITY_HIGH);
    assert!(issues.texts().all(|t| !t.text.is_empty()));
}

// ── Layout contract ──────────────────────────────────────────────────

#[test]
fn given_long_text_when_composed_then_every_op_stays_in_its_region() {
    let long = "missing encryption ".repeat(40);
    let result = AnalysisResult {
        id: "x".repeat(300),
        cost_estimate: "$".repeat(300),
        issues: vec![RawIssue::Text(long.clone()); 8],
        ..AnalysisResult::default()
    };
    let doc = render(&result);

    for section in &doc.sections {
        for op in &section.ops {
            let bounds: Rect = op.bounds();
            assert!(
                section.region.bounds.contains(&bounds),
                "{} op escaped its region: {bounds:?}",
                section.kind
            );
        }
    }
}

#[test]
fn given_any_report_when_composed_then_sections_are_stacked_top_down() {
    let doc = render(&result_from(r#"{"score": 91, "issues": ["a", "b"]}"#));
    let tops: Vec<f32> = doc.sections.iter().map(|s| s.region.bounds.y).collect();
    assert!(tops.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(doc.page_count(), 1);
}
