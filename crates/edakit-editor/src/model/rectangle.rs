use edakit_core::{pt, rotate_about, Point, Vector};
use serde::{Deserialize, Serialize};

use super::PolySet;

/// A rectangle given by two opposite corners and a rotation about its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub start: Point,
    pub end: Point,
    /// Rotation in degrees, counter-clockwise
    #[serde(default)]
    pub rotation: f64,
}

impl RectangleShape {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn center(&self) -> Point {
        nalgebra::center(&self.start, &self.end)
    }

    /// True when the rotation keeps every edge horizontal or vertical
    pub fn is_axis_aligned(&self) -> bool {
        let quarters = self.rotation / 90.0;
        (quarters - quarters.round()).abs() < 1e-9
    }

    /// Corners in outline order, rotation applied
    pub fn corners(&self) -> [Point; 4] {
        let center = self.center();
        let angle = self.rotation.to_radians();
        [
            self.start,
            pt(self.end.x, self.start.y),
            self.end,
            pt(self.start.x, self.end.y),
        ]
        .map(|corner| rotate_about(&corner, &center, angle))
    }

    /// Bounding box of the rotated corners as `(min, max)`
    pub fn bounds(&self) -> (Point, Point) {
        let corners = self.corners();
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = pt(min.x.min(c.x), min.y.min(c.y));
            max = pt(max.x.max(c.x), max.y.max(c.y));
        }
        (min, max)
    }

    /// Replace the geometry with an unrotated box
    pub fn set_bounds(&mut self, min: Point, max: Point) {
        self.start = min;
        self.end = max;
        self.rotation = 0.0;
    }

    pub fn translate(&mut self, by: &Vector) {
        self.start += by;
        self.end += by;
    }

    /// The same outline as a polygon
    pub fn to_polygon(&self) -> PolySet {
        PolySet::from_outline(self.corners().to_vec())
    }
}
