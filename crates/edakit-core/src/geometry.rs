//! 2D geometry primitives shared by the shape models and the point editor.
//!
//! Points and vectors are `nalgebra` types in internal units. The helpers
//! here are the small vocabulary the arc solvers are written in: resizing,
//! perpendiculars, the 2D cross product ("det"), segment projection and
//! line intersection.

use nalgebra::{Point2, Vector2};
use std::f64::consts::{FRAC_PI_4, TAU};

/// A position in internal units
pub type Point = Point2<f64>;

/// A displacement in internal units
pub type Vector = Vector2<f64>;

/// Shorthand constructor for a [`Point`]
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// 2D cross product (determinant of `[a b]`)
#[inline]
pub fn cross(a: &Vector, b: &Vector) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Counter-clockwise perpendicular, same length
#[inline]
pub fn perpendicular(v: &Vector) -> Vector {
    Vector::new(-v.y, v.x)
}

/// Returns `v` scaled to `length`, keeping its direction.
///
/// A zero vector stays zero.
pub fn resize(v: &Vector, length: f64) -> Vector {
    let norm = v.norm();
    if norm == 0.0 {
        return Vector::zeros();
    }
    v * (length / norm)
}

/// Rotate `v` counter-clockwise by `angle` radians
pub fn rotate(v: &Vector, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `p` about `center` counter-clockwise by `angle` radians
pub fn rotate_about(p: &Point, center: &Point, angle: f64) -> Point {
    center + rotate(&(p - center), angle)
}

/// Counter-clockwise sweep from `from` to `to`, in `(0, 2π]`.
///
/// Two vectors pointing the same way give a full turn.
pub fn positive_sweep(from: &Vector, to: &Vector) -> f64 {
    let mut sweep = to.y.atan2(to.x) - from.y.atan2(from.x);
    while sweep <= 0.0 {
        sweep += TAU;
    }
    while sweep > TAU {
        sweep -= TAU;
    }
    sweep
}

/// Snap `v` to the nearest multiple of 45 degrees.
///
/// The result is the projection of `v` onto the snapped direction.
pub fn snap_vector_45(v: &Vector) -> Vector {
    if v.x == 0.0 && v.y == 0.0 {
        return *v;
    }
    let angle = v.y.atan2(v.x);
    let snapped = (angle / FRAC_PI_4).round() * FRAC_PI_4;
    let dir = Vector::new(snapped.cos(), snapped.sin());
    let mut out = dir * v.dot(&dir);

    // Keep exact axis alignment; cos(pi/2) is not exactly zero.
    if out.x.abs() < 1e-9 * out.norm() {
        out.x = 0.0;
    }
    if out.y.abs() < 1e-9 * out.norm() {
        out.y = 0.0;
    }
    out
}

/// Center of the circle through three points, `None` when they are collinear
pub fn circumcenter(a: &Point, b: &Point, c: &Point) -> Option<Point> {
    let ab = b - a;
    let ac = c - a;
    let d = 2.0 * cross(&ab, &ac);
    if d == 0.0 {
        return None;
    }
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    if !ux.is_finite() || !uy.is_finite() {
        return None;
    }
    Some(a + Vector::new(ux, uy))
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Vector from `a` to `b`
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn center(&self) -> Point {
        nalgebra::center(&self.a, &self.b)
    }

    /// Point of the segment closest to `p`
    pub fn nearest_point(&self, p: &Point) -> Point {
        let d = self.direction();
        let l2 = d.norm_squared();
        if l2 == 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(&d) / l2).clamp(0.0, 1.0);
        self.a + d * t
    }

    pub fn squared_distance(&self, p: &Point) -> f64 {
        (self.nearest_point(p) - p).norm_squared()
    }

    /// Intersection of the infinite lines through both segments
    pub fn intersect_lines(&self, other: &Segment) -> Option<Point> {
        let r = self.direction();
        let s = other.direction();
        let denom = cross(&r, &s);
        if denom == 0.0 {
            return None;
        }
        let t = cross(&(other.a - self.a), &s) / denom;
        let p = self.a + r * t;
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    }

    /// Intersection of the two bounded segments
    pub fn intersect(&self, other: &Segment) -> Option<Point> {
        let r = self.direction();
        let s = other.direction();
        let denom = cross(&r, &s);
        if denom == 0.0 {
            return None;
        }
        let qp = other.a - self.a;
        let t = cross(&qp, &s) / denom;
        let u = cross(&qp, &r) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.a + r * t)
        } else {
            None
        }
    }

    /// True when both segments lie on the same infinite line
    pub fn collinear(&self, other: &Segment) -> bool {
        let r = self.direction();
        let reach = (other.a - self.a)
            .norm()
            .max((other.b - self.a).norm())
            .max(1.0);
        let tolerance = 1e-12 * r.norm() * reach;
        cross(&r, &(other.a - self.a)).abs() <= tolerance
            && cross(&r, &(other.b - self.a)).abs() <= tolerance
    }
}
