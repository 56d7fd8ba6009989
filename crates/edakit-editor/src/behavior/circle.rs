use edakit_core::Point;

use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{CircleShape, Shape};

pub const CIRC_CENTER: usize = 0;
pub const CIRC_END: usize = 1;

const CIRCLE_POINTS: usize = 2;

pub struct CirclePointEditBehavior {
    circle: CircleShape,
}

impl CirclePointEditBehavior {
    pub fn new(circle: CircleShape) -> Self {
        Self { circle }
    }

    pub fn circle(&self) -> &CircleShape {
        &self.circle
    }

    pub fn circle_mut(&mut self) -> &mut CircleShape {
        &mut self.circle
    }
}

impl PointEditBehavior for CirclePointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        points.add_point(self.circle.center);
        points.add_point(self.circle.end);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        check_point_count!(points, CIRCLE_POINTS, "circle", true);

        points.set_position(CIRC_CENTER, self.circle.center);
        points.set_position(CIRC_END, self.circle.end);
        true
    }

    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, CIRCLE_POINTS, "circle");

        if points.is_point(edited, CIRC_CENTER) {
            // Center drags move the whole circle.
            let offset = points.position(CIRC_CENTER) - self.circle.center;
            self.circle.translate(&offset);
        } else {
            self.circle.end = points.position(CIRC_END);
        }
    }

    fn get_45_degree_constrainer(&self, edited: EditPointId, points: &EditPoints) -> Option<Point> {
        if points.points_len() == CIRCLE_POINTS && points.is_point(edited, CIRC_END) {
            Some(points.position(CIRC_CENTER))
        } else {
            None
        }
    }

    fn shape(&self) -> Shape {
        Shape::Circle(self.circle.clone())
    }
}
