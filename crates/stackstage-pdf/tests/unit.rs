//! Round trips through lopdf's parser to check the emitted object graph.

use lopdf::content::Content;
use lopdf::{Document, Object};
use stackstage_pdf::{EmitOptions, emit};
use stackstage_render::{ReportBuilder, ReportDocument, RenderOptions, compose};
use stackstage_render::sections::{CostSection, MetricsSection};
use stackstage_types::AnalysisResult;

fn reference() -> ReportDocument {
    compose(&sample_result(), &RenderOptions::default()).expect("render")
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        id: "analysis-42".into(),
        score: 73.0,
        cost_estimate: "$800/month".into(),
        ..AnalysisResult::default()
    }
}

fn shown_strings(doc: &Document, page_id: lopdf::ObjectId) -> Vec<String> {
    let raw = doc.get_page_content(page_id).expect("page content");
    let content = Content::decode(&raw).expect("decodable content");
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

fn media_box(doc: &Document, page_id: lopdf::ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .expect("page dictionary")
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("media box")
        .iter()
        .filter_map(|o| o.as_float().ok())
        .collect()
}

#[test]
fn single_page_report_is_cropped_to_extent() {
    let report = reference();
    let bytes = emit(&report, &EmitOptions::default()).expect("emit");
    let doc = Document::load_mem(&bytes).expect("parse");

    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = *pages.get(&1).expect("first page");
    assert_eq!(media_box(&doc, page_id), vec![0.0, 0.0, 595.0, report.page_extent(0)]);
}

#[test]
fn text_runs_reach_the_content_stream() {
    let bytes = emit(&reference(), &EmitOptions::default()).expect("emit");
    let doc = Document::load_mem(&bytes).expect("parse");
    let page_id = *doc.get_pages().get(&1).expect("first page");

    let strings = shown_strings(&doc, page_id);
    assert!(strings.iter().any(|s| s == "73"));
    assert!(strings.iter().any(|s| s == "Report ID: lysis-42"));
    assert!(strings.iter().any(|s| s == "Est. cost: $800/month"));
}

#[test]
fn each_cursor_page_becomes_a_pdf_page() {
    let result = AnalysisResult::default();
    let mut builder = ReportBuilder::new(stackstage_render::DEFAULT_FRAME, None);
    builder
        .push(&MetricsSection::from_result(&result))
        .expect("metrics");
    builder.page_break();
    builder
        .push(&CostSection::from_result(&result))
        .expect("cost");
    let report = builder.finish();

    let bytes = emit(&report, &EmitOptions { compress: true }).expect("emit");
    let doc = Document::load_mem(&bytes).expect("parse");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 2);

    let second = *pages.get(&2).expect("second page");
    assert_eq!(media_box(&doc, second)[3], report.page_extent(1));
}

#[test]
fn euro_cost_is_written_in_win_ansi() {
    let result = AnalysisResult {
        cost_estimate: "€1,200/month".into(),
        ..sample_result()
    };
    let report = compose(&result, &RenderOptions::default()).expect("render");
    let bytes = emit(&report, &EmitOptions::default()).expect("emit");
    let doc = Document::load_mem(&bytes).expect("parse");
    let page_id = *doc.get_pages().get(&1).expect("first page");

    let raw = doc.get_page_content(page_id).expect("page content");
    let shown: Vec<Vec<u8>> = Content::decode(&raw)
        .expect("decodable content")
        .operations
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.into_iter().next() {
            Some(Object::String(bytes, _)) => Some(bytes),
            _ => None,
        })
        .collect();
    assert!(shown.iter().any(|s| s.as_slice() == b"Est. cost: \x801,200/month"));
    assert!(!shown.iter().any(|s| s.starts_with(b"Est. cost: ?")));
}
