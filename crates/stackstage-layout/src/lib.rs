//! # stackstage-layout
//!
//! **Tier 1 (Layout Primitives)**
//!
//! Manual coordinate bookkeeping for fixed-layout reports: a forward-only
//! cursor that hands out vertical regions, the 2-column grid arithmetic, and
//! fixed-box text fitting. There is no reflow: every region is reserved at
//! its final height before anything is drawn into it.
//!
//! ## What belongs here
//! * Geometry (`Point`, `Rect`) and canvas bounds (`Frame`)
//! * `LayoutCursor` and `Region`
//! * `GridSpec` cell placement
//! * Text fitting against a box width
//!
//! ## What does NOT belong here
//! * Drawing operations or colors (use stackstage-render / stackstage-tier)
//! * Document encoding (use stackstage-pdf)

#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod text;

pub use cursor::{CursorPos, Frame, LayoutCursor, Region};
pub use error::LayoutError;
pub use geometry::{Point, Rect};
pub use grid::{GridSpec, TWO_COLUMNS};
pub use text::{approx_text_width, fit_text, tail_chars};
