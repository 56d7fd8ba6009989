use edakit_core::{Point, Vector};
use serde::{Deserialize, Serialize};

/// A circle stored as its center and one point on the circumference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Point,
    /// Point on the circumference; its distance to `center` is the radius
    pub end: Point,
}

impl CircleShape {
    pub fn new(center: Point, end: Point) -> Self {
        Self { center, end }
    }

    /// Circle with the radius point placed on the positive X axis
    pub fn from_radius(center: Point, radius: f64) -> Self {
        Self {
            center,
            end: center + Vector::new(radius, 0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        (self.end - self.center).norm()
    }

    pub fn translate(&mut self, by: &Vector) {
        self.center += by;
        self.end += by;
    }
}
