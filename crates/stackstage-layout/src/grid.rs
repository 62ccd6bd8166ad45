//! Fixed-column grid placement.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Column count used by the metric cards and the cost legend.
pub const TWO_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: usize,
    pub base: Point,
    pub column_width: f32,
    pub row_height: f32,
}

impl GridSpec {
    pub fn two_column(base: Point, column_width: f32, row_height: f32) -> Self {
        Self {
            columns: TWO_COLUMNS,
            base,
            column_width,
            row_height,
        }
    }

    /// `(col, row)` of cell `index`: `(i mod N, i div N)`.
    pub fn cell_index(&self, index: usize) -> (usize, usize) {
        let columns = self.columns.max(1);
        (index % columns, index / columns)
    }

    /// Top-left of cell `index`:
    /// `x = baseX + col * columnWidth`, `y = baseY + row * rowHeight`.
    pub fn cell(&self, index: usize) -> Point {
        let (col, row) = self.cell_index(index);
        Point::new(
            self.base.x + col as f32 * self.column_width,
            self.base.y + row as f32 * self.row_height,
        )
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1))
    }

    /// Total height taken by `count` cells.
    pub fn height_for(&self, count: usize) -> f32 {
        self.rows_for(count) as f32 * self.row_height
    }
}
