//! View collaborator
//!
//! Some arc edits follow the live cursor rather than the dragged handle,
//! and snapping tolerances are given in screen pixels. Both come from
//! the view.

use std::cell::Cell;

use edakit_core::Point;

pub trait ViewControls {
    /// Cursor position in internal units
    fn cursor_position(&self) -> Point;

    /// Size of one screen pixel in internal units
    fn world_units_per_pixel(&self) -> f64;
}

/// View state owned by the caller and shared with behaviors through `Rc`
#[derive(Debug)]
pub struct CursorState {
    cursor: Cell<Point>,
    world_units_per_pixel: Cell<f64>,
}

impl CursorState {
    pub fn new(world_units_per_pixel: f64) -> Self {
        Self {
            cursor: Cell::new(Point::origin()),
            world_units_per_pixel: Cell::new(world_units_per_pixel),
        }
    }

    pub fn set_cursor(&self, cursor: Point) {
        self.cursor.set(cursor);
    }

    pub fn set_world_units_per_pixel(&self, scale: f64) {
        self.world_units_per_pixel.set(scale);
    }
}

impl Default for CursorState {
    /// 1 px = 0.01 mm
    fn default() -> Self {
        Self::new(10_000.0)
    }
}

impl ViewControls for CursorState {
    fn cursor_position(&self) -> Point {
        self.cursor.get()
    }

    fn world_units_per_pixel(&self) -> f64 {
        self.world_units_per_pixel.get()
    }
}
