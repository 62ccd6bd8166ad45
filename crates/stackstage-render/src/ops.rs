//! Primitive drawing operations.

use serde::{Deserialize, Serialize};
use stackstage_layout::{Point, Rect};
use stackstage_tier::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A run of text placed in a fixed box. The box is never exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub bounds: Rect,
    pub size: f32,
    pub font: Font,
    pub color: Rgb,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
    Text(TextRun),
}

impl DrawOp {
    /// Area touched by this operation, including stroke overhang.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawOp::FillRect { rect, .. } => *rect,
            DrawOp::StrokeRect {
                rect, line_width, ..
            } => {
                let half = line_width / 2.0;
                Rect::new(
                    rect.x - half,
                    rect.y - half,
                    rect.width + line_width,
                    rect.height + line_width,
                )
            }
            DrawOp::FillCircle { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            DrawOp::Text(run) => run.bounds,
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            DrawOp::Text(run) => Some(run),
            _ => None,
        }
    }
}
