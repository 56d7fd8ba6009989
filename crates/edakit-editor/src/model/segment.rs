use edakit_core::{Point, Vector};
use serde::{Deserialize, Serialize};

/// A straight graphic line between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentShape {
    pub start: Point,
    pub end: Point,
}

impl SegmentShape {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn translate(&mut self, by: &Vector) {
        self.start += by;
        self.end += by;
    }
}
