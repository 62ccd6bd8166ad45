//! Layout cursor and region allocator.
//!
//! The cursor only ever moves forward: down the current page, or onto a
//! later page through [`LayoutCursor::page_break`]. Nothing can be reserved
//! behind a region that has already been handed out.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{EPSILON, Point, Rect};

/// Canvas bounds plus the horizontal content margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Frame {
    pub const fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn left(&self) -> f32 {
        self.margin
    }

    pub fn right(&self) -> f32 {
        self.width - self.margin
    }

    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }
}

/// Cursor position, ordered by page first and then by offset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CursorPos {
    pub page: u32,
    pub y: f32,
}

/// A vertical block handed out by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub page: u32,
    /// Full canvas width, reserved height.
    pub bounds: Rect,
}

impl Region {
    /// Content area of the region, inside the frame margins.
    pub fn content(&self, frame: &Frame) -> Rect {
        Rect::new(
            frame.left(),
            self.bounds.y,
            frame.content_width(),
            self.bounds.height,
        )
    }

    /// Fail if `bounds` is not fully inside this region.
    pub fn check(&self, bounds: &Rect) -> Result<(), LayoutError> {
        if bounds.is_finite() && self.bounds.contains(bounds) {
            Ok(())
        } else {
            Err(LayoutError::OutOfRegion {
                bounds: *bounds,
                region: self.bounds,
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutCursor {
    frame: Frame,
    page: u32,
    x: f32,
    y: f32,
    row_height: f32,
}

impl LayoutCursor {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            page: 0,
            x: frame.left(),
            y: 0.0,
            row_height: 0.0,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn position(&self) -> CursorPos {
        CursorPos {
            page: self.page,
            y: self.y + self.row_height,
        }
    }

    /// Height left on the current page below any pending row.
    pub fn remaining(&self) -> f32 {
        (self.frame.height - self.y - self.row_height).max(0.0)
    }

    /// Return the current top-left point and advance past `height`.
    ///
    /// Any pending inline row is closed first.
    pub fn reserve_block(&mut self, height: f32) -> Result<Point, LayoutError> {
        self.new_row();
        self.ensure_fits(height)?;
        let top_left = Point::new(self.frame.left(), self.y);
        self.y += height;
        Ok(top_left)
    }

    /// Reserve a full-width block and return it as a region.
    pub fn reserve_region(&mut self, height: f32) -> Result<Region, LayoutError> {
        let top_left = self.reserve_block(height)?;
        Ok(Region {
            page: self.page,
            bounds: Rect::new(0.0, top_left.y, self.frame.width, height),
        })
    }

    /// Place a `width` x `height` box on the current row, wrapping to a new
    /// row when it would cross the right margin.
    pub fn reserve_inline(&mut self, width: f32, height: f32) -> Result<Point, LayoutError> {
        check_extent(width)?;
        if self.x > self.frame.left() && self.x + width > self.frame.right() + EPSILON {
            self.new_row();
        }
        let needed = height.max(self.row_height);
        self.ensure_fits(needed)?;
        let top_left = Point::new(self.x, self.y);
        self.x += width;
        self.row_height = needed;
        Ok(top_left)
    }

    /// Move down by `height` without handing out a region.
    pub fn advance(&mut self, height: f32) -> Result<(), LayoutError> {
        self.new_row();
        self.ensure_fits(height)?;
        self.y += height;
        Ok(())
    }

    /// Close the pending inline row and return to the left margin.
    pub fn new_row(&mut self) {
        self.y += self.row_height;
        self.row_height = 0.0;
        self.x = self.frame.left();
    }

    /// Continue on a fresh page. Reports are single-page today; the emitter
    /// already writes one PDF page per cursor page.
    pub fn page_break(&mut self) {
        self.new_row();
        self.page += 1;
        self.y = 0.0;
    }

    fn ensure_fits(&self, height: f32) -> Result<(), LayoutError> {
        check_extent(height)?;
        let available = self.frame.height - self.y;
        if height > available + EPSILON {
            return Err(LayoutError::Overflow {
                requested: height,
                available: available.max(0.0),
            });
        }
        Ok(())
    }
}

fn check_extent(value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::NonMonotonic { requested: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(600.0, 1000.0, 40.0)
    }

    #[test]
    fn reserve_block_returns_current_then_advances() {
        let mut cursor = LayoutCursor::new(frame());
        assert_eq!(cursor.reserve_block(100.0), Ok(Point::new(40.0, 0.0)));
        assert_eq!(cursor.reserve_block(50.0), Ok(Point::new(40.0, 100.0)));
        assert_eq!(cursor.position(), CursorPos { page: 0, y: 150.0 });
    }

    #[test]
    fn overflow_is_rejected_without_moving() {
        let mut cursor = LayoutCursor::new(frame());
        cursor.advance(900.0).expect("fits");
        let err = cursor.reserve_block(200.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Overflow {
                requested: 200.0,
                available: 100.0
            }
        );
        assert_eq!(cursor.position().y, 900.0);
    }

    #[test]
    fn negative_and_nan_heights_are_rejected() {
        let mut cursor = LayoutCursor::new(frame());
        assert!(matches!(
            cursor.advance(-5.0),
            Err(LayoutError::NonMonotonic { .. })
        ));
        assert!(cursor.reserve_block(f32::NAN).is_err());
        assert_eq!(cursor.position().y, 0.0);
    }

    #[test]
    fn inline_boxes_wrap_at_right_margin() {
        let mut cursor = LayoutCursor::new(frame());
        let a = cursor.reserve_inline(260.0, 30.0).expect("a");
        let b = cursor.reserve_inline(260.0, 40.0).expect("b");
        let c = cursor.reserve_inline(260.0, 30.0).expect("c");
        assert_eq!(a, Point::new(40.0, 0.0));
        assert_eq!(b, Point::new(300.0, 0.0));
        assert_eq!(c, Point::new(40.0, 40.0));
        cursor.new_row();
        assert_eq!(cursor.position().y, 70.0);
    }

    #[test]
    fn block_after_inline_row_starts_below_it() {
        let mut cursor = LayoutCursor::new(frame());
        cursor.reserve_inline(100.0, 25.0).expect("inline");
        let top = cursor.reserve_block(10.0).expect("block");
        assert_eq!(top.y, 25.0);
    }

    #[test]
    fn page_break_moves_forward() {
        let mut cursor = LayoutCursor::new(frame());
        cursor.advance(700.0).expect("fits");
        let before = cursor.position();
        cursor.page_break();
        let after = cursor.position();
        assert!(after > before);
        assert_eq!(after, CursorPos { page: 1, y: 0.0 });
        let region = cursor.reserve_region(100.0).expect("fits");
        assert_eq!(region.page, 1);
        assert_eq!(region.bounds, Rect::new(0.0, 0.0, 600.0, 100.0));
    }

    #[test]
    fn region_check_rejects_spill() {
        let mut cursor = LayoutCursor::new(frame());
        let region = cursor.reserve_region(100.0).expect("fits");
        assert!(region.check(&Rect::new(40.0, 10.0, 520.0, 90.0)).is_ok());
        assert!(region.check(&Rect::new(40.0, 10.0, 520.0, 91.0)).is_err());
        assert!(region.check(&Rect::new(f32::NAN, 0.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn region_content_respects_margins() {
        let mut cursor = LayoutCursor::new(frame());
        cursor.advance(20.0).expect("fits");
        let region = cursor.reserve_region(50.0).expect("fits");
        assert_eq!(region.content(&frame()), Rect::new(40.0, 20.0, 520.0, 50.0));
    }
}
