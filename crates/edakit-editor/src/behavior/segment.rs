use edakit_core::Point;

use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{SegmentShape, Shape};

pub const SEG_START: usize = 0;
pub const SEG_END: usize = 1;

const SEGMENT_POINTS: usize = 2;

pub struct SegmentPointEditBehavior {
    segment: SegmentShape,
}

impl SegmentPointEditBehavior {
    pub fn new(segment: SegmentShape) -> Self {
        Self { segment }
    }

    pub fn segment(&self) -> &SegmentShape {
        &self.segment
    }

    pub fn segment_mut(&mut self) -> &mut SegmentShape {
        &mut self.segment
    }
}

impl PointEditBehavior for SegmentPointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        points.add_point(self.segment.start);
        points.add_point(self.segment.end);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        check_point_count!(points, SEGMENT_POINTS, "segment", true);

        points.set_position(SEG_START, self.segment.start);
        points.set_position(SEG_END, self.segment.end);
        true
    }

    fn update_item(
        &mut self,
        _edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, SEGMENT_POINTS, "segment");

        self.segment.start = points.position(SEG_START);
        self.segment.end = points.position(SEG_END);
    }

    fn get_45_degree_constrainer(&self, edited: EditPointId, points: &EditPoints) -> Option<Point> {
        if points.points_len() != SEGMENT_POINTS {
            return None;
        }
        if points.is_point(edited, SEG_START) {
            Some(points.position(SEG_END))
        } else if points.is_point(edited, SEG_END) {
            Some(points.position(SEG_START))
        } else {
            None
        }
    }

    fn shape(&self) -> Shape {
        Shape::Segment(self.segment.clone())
    }
}
