use edakit_core::Point;

use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{BezierShape, Shape};

pub const BEZIER_START: usize = 0;
pub const BEZIER_CTRL_PT1: usize = 1;
pub const BEZIER_CTRL_PT2: usize = 2;
pub const BEZIER_END: usize = 3;

const BEZIER_POINTS: usize = 4;

pub struct BezierPointEditBehavior {
    bezier: BezierShape,
    max_error: f64,
}

impl BezierPointEditBehavior {
    /// `max_error` is the polyline approximation tolerance in internal units
    pub fn new(mut bezier: BezierShape, max_error: f64) -> Self {
        bezier.rebuild_polyline(max_error);
        Self { bezier, max_error }
    }

    pub fn bezier(&self) -> &BezierShape {
        &self.bezier
    }

    pub fn bezier_mut(&mut self) -> &mut BezierShape {
        &mut self.bezier
    }
}

impl PointEditBehavior for BezierPointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        let start = points.add_point(self.bezier.start);
        let c1 = points.add_point(self.bezier.control1);
        let c2 = points.add_point(self.bezier.control2);
        let end = points.add_point(self.bezier.end);

        points.add_indicator_line(start, c1);
        points.add_indicator_line(end, c2);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        check_point_count!(points, BEZIER_POINTS, "bezier", true);

        let stale = points.position(BEZIER_START) != self.bezier.start
            || points.position(BEZIER_CTRL_PT1) != self.bezier.control1
            || points.position(BEZIER_CTRL_PT2) != self.bezier.control2
            || points.position(BEZIER_END) != self.bezier.end;
        if stale {
            // The curve was changed behind our back.
            self.bezier.rebuild_polyline(self.max_error);
        }

        points.set_position(BEZIER_START, self.bezier.start);
        points.set_position(BEZIER_CTRL_PT1, self.bezier.control1);
        points.set_position(BEZIER_CTRL_PT2, self.bezier.control2);
        points.set_position(BEZIER_END, self.bezier.end);
        true
    }

    fn update_item(
        &mut self,
        _edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, BEZIER_POINTS, "bezier");

        self.bezier.start = points.position(BEZIER_START);
        self.bezier.control1 = points.position(BEZIER_CTRL_PT1);
        self.bezier.control2 = points.position(BEZIER_CTRL_PT2);
        self.bezier.end = points.position(BEZIER_END);
        self.bezier.rebuild_polyline(self.max_error);
    }

    fn get_45_degree_constrainer(&self, edited: EditPointId, points: &EditPoints) -> Option<Point> {
        if points.points_len() != BEZIER_POINTS {
            return None;
        }
        if points.is_point(edited, BEZIER_CTRL_PT1) {
            Some(points.position(BEZIER_START))
        } else if points.is_point(edited, BEZIER_CTRL_PT2) {
            Some(points.position(BEZIER_END))
        } else {
            None
        }
    }

    fn shape(&self) -> Shape {
        Shape::Bezier(self.bezier.clone())
    }
}
