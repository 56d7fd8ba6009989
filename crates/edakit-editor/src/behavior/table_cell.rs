use edakit_core::{Point, Vector};

use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{Shape, TableCellShape};

pub const COL_WIDTH: usize = 0;
pub const ROW_HEIGHT: usize = 1;

const TABLE_CELL_POINTS: usize = 2;

/// Resizes a table column or row by dragging the right or bottom edge of
/// one of its cells
pub struct TableCellPointEditBehavior {
    cell: TableCellShape,
    min_size: f64,
}

impl TableCellPointEditBehavior {
    pub fn new(cell: TableCellShape, min_size: f64) -> Self {
        Self { cell, min_size }
    }

    pub fn cell(&self) -> &TableCellShape {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut TableCellShape {
        &mut self.cell
    }

    fn column_handle(&self) -> Point {
        self.cell.end() - Vector::new(0.0, self.cell.height / 2.0)
    }

    fn row_handle(&self) -> Point {
        self.cell.end() - Vector::new(self.cell.width / 2.0, 0.0)
    }
}

impl PointEditBehavior for TableCellPointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        points.add_point(self.column_handle());
        points.add_point(self.row_handle());
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        check_point_count!(points, TABLE_CELL_POINTS, "table cell", true);

        points.set_position(COL_WIDTH, self.column_handle());
        points.set_position(ROW_HEIGHT, self.row_handle());
        true
    }

    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        commit: &mut dyn Commit,
        updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, TABLE_CELL_POINTS, "table cell");

        let item = if points.is_point(edited, COL_WIDTH) {
            let width = (points.position(COL_WIDTH).x - self.cell.origin.x).max(self.min_size);
            self.cell.width = width;
            UpdatedItem::TableColumnWidth {
                column: self.cell.column,
                width,
            }
        } else if points.is_point(edited, ROW_HEIGHT) {
            let height = (points.position(ROW_HEIGHT).y - self.cell.origin.y).max(self.min_size);
            self.cell.height = height;
            UpdatedItem::TableRowHeight {
                row: self.cell.row,
                height,
            }
        } else {
            return;
        };

        commit.modify(&item);
        updated.push(item);
    }

    fn shape(&self) -> Shape {
        Shape::TableCell(self.cell.clone())
    }
}
