use std::rc::Rc;

use edakit_core::{EditError, Point};
use edakit_settings::{ArcEditMode, EditorSettings};

use super::arc_solver::{
    edit_arc_center_keep_endpoints, edit_arc_endpoint_keep_center,
    edit_arc_endpoint_keep_center_and_radius, edit_arc_endpoint_keep_tangent,
    edit_arc_mid_keep_center, edit_arc_mid_keep_endpoints, translate_arc_to_center, ArcEndpoint,
};
use super::{check_point_count, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{ArcShape, Shape};
use crate::view::ViewControls;

pub const ARC_START: usize = 0;
pub const ARC_MID: usize = 1;
pub const ARC_END: usize = 2;
pub const ARC_CENTER: usize = 3;

const ARC_POINTS: usize = 4;

pub struct ArcPointEditBehavior {
    arc: ArcShape,
    settings: EditorSettings,
    view: Rc<dyn ViewControls>,
}

impl ArcPointEditBehavior {
    pub fn new(arc: ArcShape, settings: EditorSettings, view: Rc<dyn ViewControls>) -> Self {
        Self {
            arc,
            settings,
            view,
        }
    }

    pub fn arc(&self) -> &ArcShape {
        &self.arc
    }

    pub fn arc_mut(&mut self) -> &mut ArcShape {
        &mut self.arc
    }

    pub fn arc_edit_mode(&self) -> ArcEditMode {
        self.settings.arc_edit_mode
    }

    pub fn set_arc_edit_mode(&mut self, mode: ArcEditMode) {
        self.settings.arc_edit_mode = mode;
    }

    fn snap_tolerance(&self) -> f64 {
        self.settings.center_snap_tolerance_px * self.view.world_units_per_pixel()
    }

    fn edit_center(&mut self, center: Point) -> bool {
        if self.settings.arc_edit_mode.keeps_center() {
            translate_arc_to_center(&mut self.arc, center)
        } else {
            let tolerance = self.snap_tolerance();
            edit_arc_center_keep_endpoints(&mut self.arc, center, tolerance)
        }
    }

    fn edit_mid(&mut self) -> bool {
        let cursor = self.view.cursor_position();
        if self.settings.arc_edit_mode.keeps_center() {
            edit_arc_mid_keep_center(&mut self.arc, cursor, self.settings.min_arc_radius_iu())
        } else {
            edit_arc_mid_keep_endpoints(&mut self.arc, cursor)
        }
    }

    fn edit_endpoint(&mut self, endpoint: ArcEndpoint, to: Point) -> bool {
        match self.settings.arc_edit_mode {
            ArcEditMode::KeepCenterAdjustAngleRadius => edit_arc_endpoint_keep_center(
                &mut self.arc,
                endpoint,
                to,
                self.settings.min_arc_radius_iu(),
            ),
            ArcEditMode::KeepCenterEndsAdjustAngle => {
                edit_arc_endpoint_keep_center_and_radius(&mut self.arc, endpoint, to)
            }
            ArcEditMode::KeepEndpointsOrStartDirection => edit_arc_endpoint_keep_tangent(
                &mut self.arc,
                endpoint,
                to,
                self.settings.draw_arc_center_max_angle,
            ),
        }
    }
}

impl PointEditBehavior for ArcPointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        let start = points.add_point(self.arc.start);
        points.add_point(self.arc.mid());
        let end = points.add_point(self.arc.end);
        let center = points.add_point(self.arc.center);

        points.add_indicator_line(center, start);
        points.add_indicator_line(center, end);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        check_point_count!(points, ARC_POINTS, "arc", true);

        points.set_position(ARC_START, self.arc.start);
        points.set_position(ARC_MID, self.arc.mid());
        points.set_position(ARC_END, self.arc.end);
        points.set_position(ARC_CENTER, self.arc.center);
        true
    }

    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        check_point_count!(points, ARC_POINTS, "arc");

        let (handle, changed) = if points.is_point(edited, ARC_CENTER) {
            ("center", self.edit_center(points.position(ARC_CENTER)))
        } else if points.is_point(edited, ARC_MID) {
            ("mid", self.edit_mid())
        } else if points.is_point(edited, ARC_START) {
            ("start", self.edit_endpoint(ArcEndpoint::Start, points.position(ARC_START)))
        } else if points.is_point(edited, ARC_END) {
            ("end", self.edit_endpoint(ArcEndpoint::End, points.position(ARC_END)))
        } else {
            return;
        };

        if !changed {
            let err = EditError::DegenerateGeometry(format!(
                "arc {} drag in mode \"{}\"",
                handle, self.settings.arc_edit_mode
            ));
            tracing::warn!(error = %err, "Arc edit rejected; geometry left unchanged");
        }
    }

    fn get_45_degree_constrainer(&self, _edited: EditPointId, points: &EditPoints) -> Option<Point> {
        (points.points_len() == ARC_POINTS).then(|| points.position(ARC_CENTER))
    }

    fn shape(&self) -> Shape {
        Shape::Arc(self.arc.clone())
    }
}
