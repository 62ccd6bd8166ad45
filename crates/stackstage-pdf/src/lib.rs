//! # stackstage-pdf
//!
//! **Tier 3 (Document Emitter)**
//!
//! Encodes a finished [`ReportDocument`] as a PDF byte buffer. Each cursor
//! page becomes one PDF page whose height is the vertical extent actually
//! used on it, so a single-page report is cropped rather than paginated.
//!
//! ## What belongs here
//! * Mapping draw operations onto content-stream operators
//! * Object graph assembly (catalog, pages, fonts) and serialization
//!
//! ## What does NOT belong here
//! * Layout decisions (use stackstage-render)
//! * Transport encodings such as base64 (use stackstage-core)
//!
//! Output is a pure function of the document: no creation dates, producer
//! strings or random file identifiers are written.

#![forbid(unsafe_code)]

pub mod content;

use anyhow::{Context, Result};
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use stackstage_render::ReportDocument;
use tracing::debug;

pub use content::{FONT_BOLD, FONT_REGULAR, page_operations, pdf_text};

pub const PDF_VERSION: &str = "1.5";
pub const CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Flate-compress content streams.
    pub compress: bool,
}

/// Serialize `report` into PDF bytes.
///
/// Fails without producing partial output.
pub fn emit(report: &ReportDocument, options: &EmitOptions) -> Result<Vec<u8>> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();
    let resources_id = add_font_resources(&mut doc);

    let page_count = report.page_count();
    let mut kids: Vec<Object> = Vec::with_capacity(page_count as usize);
    for page in 0..page_count {
        let page_id = add_page(&mut doc, report, page, pages_id)
            .with_context(|| format!("failed to emit page {}", page + 1))?;
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => i64::from(page_count),
        "Resources" => resources_id,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if options.compress {
        doc.compress();
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .context("failed to serialize PDF document")?;
    debug!(bytes = bytes.len(), pages = page_count, "document emitted");
    Ok(bytes)
}

fn add_font_resources(doc: &mut Document) -> ObjectId {
    let regular = doc.add_object(standard_font("Helvetica"));
    let bold = doc.add_object(standard_font("Helvetica-Bold"));
    doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular,
            FONT_BOLD => bold,
        },
    })
}

fn standard_font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn add_page(
    doc: &mut Document,
    report: &ReportDocument,
    page: u32,
    pages_id: ObjectId,
) -> Result<ObjectId> {
    let extent = report.page_extent(page);
    let height = if extent > 0.0 {
        extent
    } else {
        report.frame.height
    };
    let content = Content {
        operations: page_operations(report.page_ops(page), height),
    };
    let encoded = content
        .encode()
        .context("failed to encode content stream")?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(report.frame.width),
            Object::Real(height),
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackstage_render::{RenderOptions, compose};
    use stackstage_types::AnalysisResult;

    fn report() -> ReportDocument {
        compose(&AnalysisResult::default(), &RenderOptions::default()).expect("render")
    }

    #[test]
    fn output_is_a_pdf() {
        let bytes = emit(&report(), &EmitOptions::default()).expect("emit");
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]).into_owned();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn output_is_deterministic() {
        let doc = report();
        let options = EmitOptions { compress: true };
        assert_eq!(
            emit(&doc, &options).expect("first"),
            emit(&doc, &options).expect("second")
        );
    }

    #[test]
    fn compression_shrinks_output() {
        let doc = report();
        let plain = emit(&doc, &EmitOptions { compress: false }).expect("plain");
        let packed = emit(&doc, &EmitOptions { compress: true }).expect("packed");
        assert!(packed.len() < plain.len());
    }
}
