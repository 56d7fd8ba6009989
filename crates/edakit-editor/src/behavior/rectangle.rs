use edakit_core::{pt, Point};

use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::constraints::{EditConstraint, PerpendicularConstraint};
use crate::edit_points::{EditPointId, EditPoints, HandleRef};
use crate::model::{RectangleShape, Shape};

// Points. "Top" is the smaller Y.
pub const RECT_TOP_LEFT: usize = 0;
pub const RECT_TOP_RIGHT: usize = 1;
pub const RECT_BOT_RIGHT: usize = 2;
pub const RECT_BOT_LEFT: usize = 3;
pub const RECT_CENTER: usize = 4;

// Lines
pub const RECT_TOP: usize = 0;
pub const RECT_RIGHT: usize = 1;
pub const RECT_BOT: usize = 2;
pub const RECT_LEFT: usize = 3;

const RECT_POINTS: usize = 5;

/// Edits an axis-aligned rectangle through its corners, edges and center.
///
/// A rectangle rotated off the axes cannot be edited this way;
/// `update_points` then reports `false` and the caller switches to a
/// polygon behavior.
pub struct RectanglePointEditBehavior {
    rectangle: RectangleShape,
    min_size: f64,
}

impl RectanglePointEditBehavior {
    pub fn new(rectangle: RectangleShape, min_size: f64) -> Self {
        Self {
            rectangle,
            min_size,
        }
    }

    pub fn rectangle(&self) -> &RectangleShape {
        &self.rectangle
    }

    pub fn rectangle_mut(&mut self) -> &mut RectangleShape {
        &mut self.rectangle
    }

    fn corner_positions(&self) -> [Point; 4] {
        let (min, max) = self.rectangle.bounds();
        [min, pt(max.x, min.y), max, pt(min.x, max.y)]
    }

    fn refresh_edge_constraints(points: &mut EditPoints) {
        for index in 0..points.lines_len() {
            let Some((a, b)) = points.line_endpoints(index) else {
                continue;
            };
            let constraint = PerpendicularConstraint::new(points.position(a), points.position(b));
            points.set_line_constraint(index, Some(EditConstraint::Perpendicular(constraint)));
        }
    }

    /// Move the dragged corner, keeping the opposite one and the minimum size
    fn pin_edited_corner(&self, corner: usize, p: Point, min: &mut Point, max: &mut Point) {
        let s = self.min_size;
        match corner {
            RECT_TOP_LEFT => {
                min.x = p.x.min(max.x - s);
                min.y = p.y.min(max.y - s);
            }
            RECT_TOP_RIGHT => {
                max.x = p.x.max(min.x + s);
                min.y = p.y.min(max.y - s);
            }
            RECT_BOT_RIGHT => {
                max.x = p.x.max(min.x + s);
                max.y = p.y.max(min.y + s);
            }
            RECT_BOT_LEFT => {
                min.x = p.x.min(max.x - s);
                max.y = p.y.max(min.y + s);
            }
            _ => {}
        }
    }

    fn move_edge(&self, edge: usize, points: &EditPoints, min: &mut Point, max: &mut Point) {
        let s = self.min_size;
        match edge {
            RECT_TOP => min.y = points.position(RECT_TOP_LEFT).y.min(max.y - s),
            RECT_RIGHT => max.x = points.position(RECT_TOP_RIGHT).x.max(min.x + s),
            RECT_BOT => max.y = points.position(RECT_BOT_RIGHT).y.max(min.y + s),
            RECT_LEFT => min.x = points.position(RECT_BOT_LEFT).x.min(max.x - s),
            _ => {}
        }
    }
}

impl PointEditBehavior for RectanglePointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        let corners = self.corner_positions();
        let ids = corners.map(|corner| points.add_point(corner));
        points.add_point(self.rectangle.center());

        for i in 0..4 {
            points.add_line(ids[i], ids[(i + 1) % 4]);
        }
        Self::refresh_edge_constraints(points);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        if !self.rectangle.is_axis_aligned() {
            tracing::debug!(rotation = self.rectangle.rotation, "Rectangle no longer axis aligned");
            return false;
        }
        check_point_count!(points, RECT_POINTS, "rectangle", true);

        for (index, corner) in self.corner_positions().into_iter().enumerate() {
            points.set_position(index, corner);
        }
        points.set_position(RECT_CENTER, self.rectangle.center());
        Self::refresh_edge_constraints(points);
        true
    }

    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, RECT_POINTS, "rectangle");

        let (mut min, mut max) = self.rectangle.bounds();
        match points.find(edited) {
            Some(HandleRef::Point(RECT_CENTER)) => {
                let offset = points.position(RECT_CENTER) - self.rectangle.center();
                min += offset;
                max += offset;
            }
            Some(HandleRef::Point(corner)) => {
                self.pin_edited_corner(corner, points.position(corner), &mut min, &mut max);
            }
            Some(HandleRef::Line(edge)) => self.move_edge(edge, points, &mut min, &mut max),
            None => return,
        }
        self.rectangle.set_bounds(min, max);
    }

    fn get_45_degree_constrainer(&self, edited: EditPointId, points: &EditPoints) -> Option<Point> {
        match points.find(edited) {
            Some(HandleRef::Point(corner)) if corner < 4 && points.points_len() == RECT_POINTS => {
                Some(points.position((corner + 2) % 4))
            }
            _ => None,
        }
    }

    fn shape(&self) -> Shape {
        Shape::Rectangle(self.rectangle.clone())
    }
}
