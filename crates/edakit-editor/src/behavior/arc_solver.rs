//! Arc re-solving
//!
//! An arc has four handles (start, mid, end, center) over three degrees of
//! freedom, so moving one handle has to be resolved by holding something
//! else fixed. Each function below implements one such policy. They all
//! leave the arc untouched when the requested geometry is degenerate
//! (zero-length vectors, coincident or collinear points, non-finite
//! results) and report whether the edit was applied.

use edakit_core::{perpendicular, resize, Point, Segment, Vector};
use smallvec::SmallVec;

use crate::model::ArcShape;

/// Squared distance a later center candidate must beat the current best
/// by before it is preferred
pub const SNAP_EPSILON_SQ: f64 = 4.0;

/// Half length of the perpendicular bisector used as the legal center
/// locus. Large, but far from overflowing once squared.
const FAR: f64 = (i32::MAX / 2) as f64;

/// Which arc endpoint a drag applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcEndpoint {
    Start,
    End,
}

impl ArcEndpoint {
    fn of(self, arc: &ArcShape) -> Point {
        match self {
            ArcEndpoint::Start => arc.start,
            ArcEndpoint::End => arc.end,
        }
    }

    fn other(self) -> Self {
        match self {
            ArcEndpoint::Start => ArcEndpoint::End,
            ArcEndpoint::End => ArcEndpoint::Start,
        }
    }

    fn set(self, arc: &mut ArcShape, p: Point) {
        match self {
            ArcEndpoint::Start => arc.set_start(p),
            ArcEndpoint::End => arc.set_end(p),
        }
    }
}

fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Move one endpoint to `to`, keeping the tangent at the other endpoint.
///
/// The new circle still touches the line tangent to the old one at the
/// fixed endpoint. Working in a frame centered on the old center with `u1`
/// pointing at the fixed endpoint and `u2` towards the arc mid, the new
/// center lies on the `u1` axis at `-delta`, where
/// `(x + delta)² + y² = (R + delta)²`. A moved point beyond the tangent
/// line (`x > R`) is solved mirrored across it, which puts the new center
/// past the fixed endpoint and flips the winding.
///
/// `max_ratio` bounds `|y / (R - x)|`; beyond it the radius explodes and
/// the edit is rejected.
pub fn edit_arc_endpoint_keep_tangent(
    arc: &mut ArcShape,
    endpoint: ArcEndpoint,
    to: Point,
    max_ratio: f64,
) -> bool {
    let center = arc.center;
    let fixed = endpoint.other().of(arc);

    let v1 = fixed - center;
    let v2 = to - center;
    if v1 == Vector::zeros() || v2 == Vector::zeros() {
        return false;
    }

    let radius = v1.norm();
    let u1 = v1 / radius;
    let v3 = arc.mid() - center;
    let u2 = v3 - u1 * v3.dot(&u1);
    if u2 == Vector::zeros() {
        return false;
    }
    let u2 = u2.normalize();

    let mut x = v2.dot(&u1);
    let y = v2.dot(&u2);

    if x == radius {
        return false;
    }

    let mirrored = x > radius;
    if mirrored {
        x = 2.0 * radius - x;
    }

    if (y / (radius - x)).abs() > max_ratio {
        return false;
    }

    let delta = (radius * radius - x * x - y * y) / (2.0 * x - 2.0 * radius);
    if !delta.is_finite() {
        return false;
    }

    let offset = if mirrored {
        2.0 * radius + delta
    } else {
        -delta
    };
    let new_center = center + u1 * offset;
    if !is_finite(&new_center) {
        return false;
    }

    arc.set_center(new_center);
    endpoint.set(arc, to);
    if mirrored {
        arc.clockwise = !arc.clockwise;
    }
    true
}

/// Move the center towards `cursor`, keeping both endpoints.
///
/// The center is confined to the perpendicular bisector of the chord. It
/// goes to the point of the bisector nearest the cursor, unless the
/// bisector crosses the horizontal or vertical through the cursor within
/// `snap_tolerance`, in which case it snaps to that crossing.
pub fn edit_arc_center_keep_endpoints(arc: &mut ArcShape, cursor: Point, snap_tolerance: f64) -> bool {
    if arc.start == arc.end {
        return false;
    }

    let mid = nalgebra::center(&arc.start, &arc.end);
    let perp = resize(&perpendicular(&(arc.end - arc.start)), FAR);
    let legal = Segment::new(mid - perp, mid + perp);

    let snap_sq = snap_tolerance * snap_tolerance;

    // (candidate, bias); biased candidates are preferred.
    let mut candidates: SmallVec<[(Point, f64); 5]> = SmallVec::new();

    let axes = [Vector::new(1.0, 0.0), Vector::new(0.0, 1.0)];
    for axis in axes {
        let through_cursor = Segment::new(cursor, cursor + axis);
        if let Some(p) = legal.intersect_lines(&through_cursor) {
            if (p - cursor).norm_squared() <= snap_sq && legal.squared_distance(&p) <= SNAP_EPSILON_SQ {
                candidates.push((p, snap_sq));
            }
        }
    }
    candidates.push((legal.nearest_point(&cursor), 0.0));
    candidates.push((legal.a, 0.0));
    candidates.push((legal.b, 0.0));

    let mut nearest = None;
    let mut best = f64::MAX;
    for (p, bias) in candidates {
        let score = (p - cursor).norm_squared() - bias;
        if score < best - SNAP_EPSILON_SQ {
            nearest = Some(p);
            best = score;
        }
    }

    match nearest {
        Some(center) if is_finite(&center) => {
            arc.set_center(center);
            true
        }
        _ => false,
    }
}

/// Move one endpoint to `to` around the fixed center.
///
/// The distance to the center becomes the new radius (at least
/// `min_radius`) and the other endpoint is pushed out or pulled in to it
/// along its previous direction.
pub fn edit_arc_endpoint_keep_center(
    arc: &mut ArcShape,
    endpoint: ArcEndpoint,
    to: Point,
    min_radius: f64,
) -> bool {
    let center = arc.center;

    let mut moved = to - center;
    if moved == Vector::zeros() {
        moved = endpoint.of(arc) - center;
    }
    let mut other = endpoint.other().of(arc) - center;
    if other == Vector::zeros() {
        other = Vector::new(1.0, 0.0);
    }
    if moved == Vector::zeros() {
        return false;
    }

    let radius = moved.norm().max(min_radius);
    endpoint.set(arc, center + resize(&moved, radius));
    endpoint.other().set(arc, center + resize(&other, radius));
    true
}

/// Move one endpoint along the existing circle.
///
/// `to` is projected radially onto the circle; only the included angle
/// changes.
pub fn edit_arc_endpoint_keep_center_and_radius(
    arc: &mut ArcShape,
    endpoint: ArcEndpoint,
    to: Point,
) -> bool {
    let center = arc.center;
    let direction = to - center;
    let radius = arc.radius();
    if direction == Vector::zeros() || radius == 0.0 {
        return false;
    }

    endpoint.set(arc, center + resize(&direction, radius));
    true
}

/// Resize the arc about its fixed center so it passes under `cursor`.
///
/// Both endpoints keep their angles.
pub fn edit_arc_mid_keep_center(arc: &mut ArcShape, cursor: Point, min_radius: f64) -> bool {
    let center = arc.center;
    let start = arc.start - center;
    let end = arc.end - center;
    if start == Vector::zeros() || end == Vector::zeros() {
        return false;
    }

    let radius = (cursor - center).norm().max(min_radius);
    arc.set_start(center + resize(&start, radius));
    arc.set_end(center + resize(&end, radius));
    true
}

/// Change the bulge of the arc, keeping both endpoints.
///
/// The new mid is the point nearest `cursor` on a ray that starts just off
/// the chord midpoint and runs out through the current mid. The ray never
/// reaches the chord, so the curvature cannot flip sign.
pub fn edit_arc_mid_keep_endpoints(arc: &mut ArcShape, cursor: Point) -> bool {
    let start = arc.start;
    let end = arc.end;
    let chord_mid = nalgebra::center(&start, &end);
    let just_off = (end - start).norm() / 100.0;

    let bulge = arc.mid() - chord_mid;
    if bulge == Vector::zeros() || just_off == 0.0 {
        return false;
    }

    let legal = Segment::new(
        chord_mid + resize(&bulge, just_off),
        chord_mid + resize(&bulge, FAR),
    );
    let mid = legal.nearest_point(&cursor);

    arc.set_arc_geometry(start, mid, end)
}

/// Rigidly move the arc so its center lands on `center`.
///
/// A translation is never degenerate, so this always succeeds.
pub fn translate_arc_to_center(arc: &mut ArcShape, center: Point) -> bool {
    let offset = center - arc.center;
    arc.translate(&offset);
    true
}
