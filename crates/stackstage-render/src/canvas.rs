//! Bounds-checked drawing surface for one section.

use stackstage_layout::{LayoutError, Point, Rect, Region, fit_text};
use stackstage_tier::Rgb;

use crate::ops::{Align, DrawOp, Font, TextRun};

/// Collects the operations of one section and rejects any operation that
/// would leave the section's reserved region.
#[derive(Debug)]
pub struct SectionCanvas {
    region: Region,
    ops: Vec<DrawOp>,
}

impl SectionCanvas {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            ops: Vec::new(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Top edge of the region.
    pub fn top(&self) -> f32 {
        self.region.bounds.y
    }

    pub fn push(&mut self, op: DrawOp) -> Result<(), LayoutError> {
        self.region.check(&op.bounds())?;
        self.ops.push(op);
        Ok(())
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), LayoutError> {
        self.push(DrawOp::FillRect { rect, color })
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f32) -> Result<(), LayoutError> {
        self.push(DrawOp::StrokeRect {
            rect,
            color,
            line_width,
        })
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) -> Result<(), LayoutError> {
        self.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        })
    }

    /// Place `text` in `bounds`, cut to the box width.
    pub fn text(&mut self, text: &str, bounds: Rect, style: TextStyle) -> Result<(), LayoutError> {
        let fitted = fit_text(text.trim(), bounds.width, style.size);
        self.push(DrawOp::Text(TextRun {
            text: fitted,
            bounds,
            size: style.size,
            font: style.font,
            color: style.color,
            align: style.align,
        }))
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

/// Font, size, color and alignment of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub font: Font,
    pub color: Rgb,
    pub align: Align,
}

impl TextStyle {
    pub const fn regular(size: f32, color: Rgb) -> Self {
        Self {
            size,
            font: Font::Regular,
            color,
            align: Align::Left,
        }
    }

    pub const fn bold(size: f32, color: Rgb) -> Self {
        Self {
            size,
            font: Font::Bold,
            color,
            align: Align::Left,
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    pub const fn right(self) -> Self {
        Self {
            align: Align::Right,
            ..self
        }
    }
}
