//! Layout errors.

use std::fmt;

use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A reservation does not fit in the remaining canvas height.
    Overflow { requested: f32, available: f32 },
    /// A drawing operation leaves the region reserved for its section.
    OutOfRegion { bounds: Rect, region: Rect },
    /// A reservation would move the cursor backwards (negative or NaN height).
    NonMonotonic { requested: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Overflow {
                requested,
                available,
            } => write!(
                f,
                "canvas overflow: requested {requested:.1}pt, {available:.1}pt available"
            ),
            LayoutError::OutOfRegion { bounds, region } => write!(
                f,
                "drawing at ({:.1}, {:.1}, {:.1}x{:.1}) leaves region ({:.1}, {:.1}, {:.1}x{:.1})",
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                region.x,
                region.y,
                region.width,
                region.height
            ),
            LayoutError::NonMonotonic { requested } => {
                write!(f, "cursor cannot move by {requested}pt")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
