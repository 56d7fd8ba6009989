use edakit_core::{pt, Point, Vector};
use serde::{Deserialize, Serialize};

/// One cell of a table
///
/// Dragging a cell's handles resizes the whole column or row it sits in,
/// so the cell knows its position in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCellShape {
    /// Top-left corner
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub column: usize,
    pub row: usize,
}

impl TableCellShape {
    pub fn new(origin: Point, width: f64, height: f64, column: usize, row: usize) -> Self {
        Self {
            origin,
            width,
            height,
            column,
            row,
        }
    }

    /// Bottom-right corner
    pub fn end(&self) -> Point {
        pt(self.origin.x + self.width, self.origin.y + self.height)
    }

    pub fn translate(&mut self, by: &Vector) {
        self.origin += by;
    }
}
