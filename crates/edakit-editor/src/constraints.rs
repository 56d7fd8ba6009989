//! Constraints carried by edit lines
//!
//! Dragging an edit line first translates both of its endpoints by the
//! cursor displacement, then the line's constraint corrects the result.
//! Constraints capture the geometry at the moment they are created, so a
//! fresh one is attached whenever the surrounding outline changes.

use edakit_core::{Point, Segment, Vector};

/// Constraint attached to an edit line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditConstraint {
    Converging(ConvergingConstraint),
    Perpendicular(PerpendicularConstraint),
}

/// Neighbourhood of an edit line at the time a constraint is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineNeighbours {
    /// Vertex before the line's origin in the same contour
    pub previous: Point,
    /// Vertex after the line's end in the same contour
    pub next: Point,
    /// Number of edges in the contour
    pub edge_count: usize,
}

impl EditConstraint {
    /// Correct the translated endpoints of a dragged line
    pub fn apply(&self, origin: &mut Point, end: &mut Point, neighbours: &LineNeighbours) {
        match self {
            EditConstraint::Converging(c) => c.apply(origin, end, neighbours),
            EditConstraint::Perpendicular(c) => c.apply(origin, end),
        }
    }
}

/// Keeps the edges adjacent to a dragged polygon edge on their original
/// lines, so the neighbours stretch or shrink instead of rotating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergingConstraint {
    origin: Point,
    end: Point,
    dragged: Vector,
    origin_side: Vector,
    end_side: Vector,
    collinear: bool,
}

impl ConvergingConstraint {
    /// Capture the edge `origin -> end` between `previous` and `next`
    pub fn new(origin: Point, end: Point, previous: Point, next: Point) -> Self {
        let edge = Segment::new(origin, end);
        let collinear = edge.collinear(&Segment::new(previous, origin))
            || edge.collinear(&Segment::new(end, next));
        Self {
            origin,
            end,
            dragged: end - origin,
            origin_side: origin - previous,
            end_side: end - next,
            collinear,
        }
    }

    pub fn is_collinear(&self) -> bool {
        self.collinear
    }

    fn apply(&self, origin: &mut Point, end: &mut Point, neighbours: &LineNeighbours) {
        if self.collinear {
            // Edge continues a neighbour: slide along its own direction only.
            let moved = *origin - self.origin;
            let len2 = self.dragged.norm_squared();
            let along = if len2 > 0.0 {
                self.dragged * (moved.dot(&self.dragged) / len2)
            } else {
                Vector::zeros()
            };
            *origin = self.origin + along;
            *end = self.end + along;
            return;
        }

        let dragged = Segment::new(*origin, *origin + self.dragged);
        let origin_side = Segment::new(neighbours.previous, neighbours.previous + self.origin_side);
        let end_side = Segment::new(neighbours.next, neighbours.next + self.end_side);

        if let Some(p) = dragged.intersect_lines(&origin_side) {
            *origin = p;
        }
        if let Some(p) = dragged.intersect_lines(&end_side) {
            *end = p;
        }

        // Neighbours crossing each other would make the outline self-intersect.
        let origin_side = Segment::new(*origin, neighbours.previous);
        let end_side = Segment::new(*end, neighbours.next);
        if let Some(crossing) = end_side.intersect(&origin_side) {
            if neighbours.edge_count > 3 {
                *origin = crossing;
                *end = crossing;
            }
        }
    }
}

/// Lets an edge move only perpendicular to itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularConstraint {
    origin: Point,
    end: Point,
}

impl PerpendicularConstraint {
    pub fn new(origin: Point, end: Point) -> Self {
        Self { origin, end }
    }

    fn apply(&self, origin: &mut Point, end: &mut Point) {
        let dir = self.end - self.origin;
        let len2 = dir.norm_squared();
        if len2 == 0.0 {
            return;
        }
        let moved = *origin - self.origin;
        let across = moved - dir * (moved.dot(&dir) / len2);
        *origin = self.origin + across;
        *end = self.end + across;
    }
}
