use std::f64::consts::TAU;

use edakit_core::{circumcenter, cross, positive_sweep, rotate_about, Point, Vector};
use serde::{Deserialize, Serialize};

/// A circular arc
///
/// The arc runs from `start` to `end` around `center`, counter-clockwise
/// unless `clockwise` is set. The radius is the distance from `center` to
/// `start`. A start equal to the end describes a full circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    #[serde(default)]
    pub clockwise: bool,
}

impl ArcShape {
    pub fn new(center: Point, start: Point, end: Point, clockwise: bool) -> Self {
        Self {
            start,
            end,
            center,
            clockwise,
        }
    }

    /// Arc through three points, `None` when they are collinear
    pub fn from_three_points(start: Point, mid: Point, end: Point) -> Option<Self> {
        let mut arc = Self::new(start, start, end, false);
        arc.set_arc_geometry(start, mid, end).then_some(arc)
    }

    pub fn radius(&self) -> f64 {
        (self.start - self.center).norm()
    }

    /// Signed included angle in radians; negative for clockwise arcs.
    ///
    /// The magnitude is in `(0, 2π]`; a closed arc reports a full turn.
    pub fn angle(&self) -> f64 {
        let sweep = positive_sweep(&(self.start - self.center), &(self.end - self.center));
        match (self.clockwise, sweep >= TAU) {
            (false, _) => sweep,
            (true, true) => -TAU,
            (true, false) => sweep - TAU,
        }
    }

    pub fn is_full_circle(&self) -> bool {
        self.start == self.end
    }

    /// Point halfway along the arc
    pub fn mid(&self) -> Point {
        rotate_about(&self.start, &self.center, self.angle() / 2.0)
    }

    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Move the center, keeping endpoints and winding
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Redefine the arc through `start`, `mid` and `end`.
    ///
    /// Returns `false` and leaves the arc untouched when the three points
    /// are collinear or coincident.
    pub fn set_arc_geometry(&mut self, start: Point, mid: Point, end: Point) -> bool {
        let Some(center) = circumcenter(&start, &mid, &end) else {
            return false;
        };
        self.start = start;
        self.end = end;
        self.center = center;
        self.clockwise = cross(&(mid - start), &(end - mid)) < 0.0;
        true
    }

    pub fn translate(&mut self, by: &Vector) {
        self.start += by;
        self.end += by;
        self.center += by;
    }
}
