//! Translation of drawing operations into PDF content-stream operators.
//!
//! Layout coordinates have a top-left origin; PDF user space has a
//! bottom-left one, so every y is flipped against the page height.

use lopdf::{Object, StringFormat};
use lopdf::content::Operation;
use stackstage_layout::{Point, Rect, approx_text_width};
use stackstage_render::{Align, DrawOp, Font, TextRun};
use stackstage_tier::Rgb;

/// Resource names of the two standard fonts.
pub const FONT_REGULAR: &str = "F1";
pub const FONT_BOLD: &str = "F2";

/// Bezier control distance for a quarter circle, as a fraction of the radius.
const KAPPA: f32 = 0.552_284_8;
/// Cap height as a fraction of the font size, for vertical centering.
const CAP_HEIGHT_EM: f32 = 0.7;

/// Operators for every op, in order, on a page `page_height` tall.
pub fn page_operations<'a>(
    ops: impl IntoIterator<Item = &'a DrawOp>,
    page_height: f32,
) -> Vec<Operation> {
    let mut out = Vec::new();
    for op in ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                out.push(fill_color(*color));
                out.push(rect_path(rect, page_height));
                out.push(Operation::new("f", vec![]));
            }
            DrawOp::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                out.push(stroke_color(*color));
                out.push(Operation::new("w", vec![real(*line_width)]));
                out.push(rect_path(rect, page_height));
                out.push(Operation::new("S", vec![]));
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                out.push(fill_color(*color));
                out.extend(circle_path(*center, *radius, page_height));
                out.push(Operation::new("f", vec![]));
            }
            DrawOp::Text(run) => out.extend(text_run(run, page_height)),
        }
    }
    out
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.fractions().into_iter().map(real).collect()
}

fn fill_color(color: Rgb) -> Operation {
    Operation::new("rg", color_operands(color))
}

fn stroke_color(color: Rgb) -> Operation {
    Operation::new("RG", color_operands(color))
}

fn rect_path(rect: &Rect, page_height: f32) -> Operation {
    Operation::new(
        "re",
        vec![
            real(rect.x),
            real(page_height - rect.bottom()),
            real(rect.width),
            real(rect.height),
        ],
    )
}

/// Closed circle path made of four cubic curves.
fn circle_path(center: Point, radius: f32, page_height: f32) -> Vec<Operation> {
    let cx = center.x;
    let cy = page_height - center.y;
    let k = radius * KAPPA;
    let curve = |pts: [f32; 6]| Operation::new("c", pts.into_iter().map(real).collect());
    vec![
        Operation::new("m", vec![real(cx + radius), real(cy)]),
        curve([cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius]),
        curve([cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy]),
        curve([cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius]),
        curve([cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy]),
        Operation::new("h", vec![]),
    ]
}

/// A text run clipped to its box.
fn text_run(run: &TextRun, page_height: f32) -> Vec<Operation> {
    let bounds = run.bounds;
    let width = approx_text_width(&run.text, run.size).min(bounds.width);
    let x = match run.align {
        Align::Left => bounds.x,
        Align::Center => bounds.x + (bounds.width - width) / 2.0,
        Align::Right => bounds.right() - width,
    };
    let baseline = bounds.y + (bounds.height + run.size * CAP_HEIGHT_EM) / 2.0;
    let font = match run.font {
        Font::Regular => FONT_REGULAR,
        Font::Bold => FONT_BOLD,
    };

    vec![
        Operation::new("q", vec![]),
        rect_path(&bounds, page_height),
        Operation::new("W", vec![]),
        Operation::new("n", vec![]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), real(run.size)]),
        fill_color(run.color),
        Operation::new("Td", vec![real(x), real(page_height - baseline)]),
        Operation::new(
            "Tj",
            vec![Object::String(pdf_text(&run.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
        Operation::new("Q", vec![]),
    ]
}

/// Encode text for the WinAnsi-encoded standard fonts.
///
/// Printable ASCII and Latin-1 map to themselves, the CP1252 punctuation
/// block (euro sign, curly quotes, dashes) maps to 0x80..=0x9F, and anything
/// else becomes `?`.
pub fn pdf_text(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}
