use std::rc::Rc;

use edakit_core::{pt, Point};

use edakit_editor::behavior::{ArcPointEditBehavior, PointEditBehavior, ARC_CENTER, ARC_END, ARC_MID, ARC_START};
use edakit_editor::{ArcShape, CursorState, EditPoints, RecordingCommit};
use edakit_settings::ArcEditMode;

use crate::common::{dyn_view, mm, near, settings, view};

fn quarter() -> ArcShape {
    ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), false)
}

struct Fixture {
    behavior: ArcPointEditBehavior,
    points: EditPoints,
    view: Rc<CursorState>,
}

impl Fixture {
    fn new(arc: ArcShape, mode: ArcEditMode) -> Self {
        Self::with_view(arc, mode, view())
    }

    fn with_view(arc: ArcShape, mode: ArcEditMode, view: Rc<CursorState>) -> Self {
        let behavior = ArcPointEditBehavior::new(arc, settings(mode), dyn_view(&view));
        let mut points = EditPoints::new();
        behavior.make_points(&mut points);
        Self {
            behavior,
            points,
            view,
        }
    }

    /// Drag the handle at `index` to `to`, with the cursor following
    fn drag(&mut self, index: usize, to: Point) {
        let id = self.points.point(index).id;
        self.view.set_cursor(to);
        self.points.move_handle(id, to).unwrap();
        self.behavior
            .update_item(id, &mut self.points, &mut RecordingCommit::new(), &mut Vec::new());
        assert!(self.behavior.update_points(&mut self.points));
    }

    fn arc(&self) -> &ArcShape {
        self.behavior.arc()
    }
}

#[test]
fn test_end_drag_keeps_start_tangent() {
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_END, mm(0.0, 20.0));

    assert!(near(f.arc().center, mm(-15.0, 0.0), 1.0));
    assert_eq!(f.arc().start, mm(10.0, 0.0));
    assert_eq!(f.arc().end, mm(0.0, 20.0));
    assert!(!f.arc().clockwise);
    assert!(near(f.points.position(ARC_CENTER), mm(-15.0, 0.0), 1.0));
}

#[test]
fn test_center_drag_keeps_endpoints_on_bisector() {
    let arc = ArcShape::new(mm(5.0, -5.0), mm(0.0, 0.0), mm(10.0, 0.0), false);
    let mut f = Fixture::new(arc, ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_CENTER, mm(7.0, 12.0));

    assert_eq!(f.arc().center.x, 5.0e6);
    assert!((f.arc().center.y - 12.0e6).abs() < 1.0);
    assert_eq!(f.arc().start, mm(0.0, 0.0));
    assert_eq!(f.arc().end, mm(10.0, 0.0));
}

#[test]
fn test_center_snap_tolerance_follows_zoom() {
    let diagonal = || ArcShape::new(mm(0.0, 10.0), mm(0.0, 0.0), mm(10.0, 10.0), true);

    // Zoomed out: 5 px covers 5 mm and the cursor row wins.
    let mut f = Fixture::with_view(
        diagonal(),
        ArcEditMode::KeepEndpointsOrStartDirection,
        Rc::new(CursorState::new(1.0e6)),
    );
    f.drag(ARC_CENTER, mm(6.0, 5.0));
    assert!(near(f.arc().center, mm(5.0, 5.0), 10.0));

    // Zoomed in: plain projection onto the bisector.
    let mut f = Fixture::new(diagonal(), ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_CENTER, mm(6.0, 5.0));
    assert!(near(f.arc().center, mm(5.5, 4.5), 10.0));
}

#[test]
fn test_degenerate_arc_is_left_unchanged() {
    let arc = ArcShape::new(mm(0.0, 0.0), mm(0.0, 0.0), mm(0.0, 10.0), false);
    let mut f = Fixture::new(arc.clone(), ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_END, mm(0.0, 20.0));

    assert_eq!(f.arc(), &arc);
    // Handles snap back to the unchanged arc.
    assert_eq!(f.points.position(ARC_END), mm(0.0, 10.0));
}

#[test]
fn test_mid_drag_keep_center_scales_radius() {
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepCenterAdjustAngleRadius);
    f.drag(ARC_MID, mm(15.0, 15.0));

    let radius = 15.0e6 * std::f64::consts::SQRT_2;
    assert_eq!(f.arc().center, mm(0.0, 0.0));
    assert!(near(f.arc().start, pt(radius, 0.0), 1e-3));
    assert!(near(f.arc().end, pt(0.0, radius), 1e-3));
    assert!(near(f.points.position(ARC_MID), mm(15.0, 15.0), 1e-3));
}

#[test]
fn test_mid_drag_keep_endpoints_changes_bulge() {
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_MID, mm(10.0, 10.0));

    assert_eq!(f.arc().start, mm(10.0, 0.0));
    assert_eq!(f.arc().end, mm(0.0, 10.0));
    assert!(near(f.arc().center, mm(5.0, 5.0), 10.0));
    assert!(!f.arc().clockwise);
}

#[test]
fn test_center_drag_keep_center_modes_translate() {
    for mode in [
        ArcEditMode::KeepCenterAdjustAngleRadius,
        ArcEditMode::KeepCenterEndsAdjustAngle,
    ] {
        let mut f = Fixture::new(quarter(), mode);
        f.drag(ARC_CENTER, mm(3.0, -2.0));

        assert_eq!(f.arc().center, mm(3.0, -2.0), "{mode}");
        assert_eq!(f.arc().start, mm(13.0, -2.0), "{mode}");
        assert_eq!(f.arc().end, mm(3.0, 8.0), "{mode}");
    }
}

#[test]
fn test_start_drag_dispatches_on_mode() {
    // Radius follows the dragged endpoint, the other end follows along.
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepCenterAdjustAngleRadius);
    f.drag(ARC_START, mm(20.0, 0.0));
    assert_eq!(f.arc().center, mm(0.0, 0.0));
    assert!(near(f.arc().start, mm(20.0, 0.0), 1e-3));
    assert!(near(f.arc().end, mm(0.0, 20.0), 1e-3));

    // Radius is fixed; only the angle changes.
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepCenterEndsAdjustAngle);
    f.drag(ARC_START, mm(0.0, -20.0));
    assert_eq!(f.arc().center, mm(0.0, 0.0));
    assert!(near(f.arc().start, mm(0.0, -10.0), 1e-3));
    assert_eq!(f.arc().end, mm(0.0, 10.0));

    // Endpoints are where they were dropped; the center moves.
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepEndpointsOrStartDirection);
    f.drag(ARC_START, mm(20.0, 0.0));
    assert_eq!(f.arc().start, mm(20.0, 0.0));
    assert_eq!(f.arc().end, mm(0.0, 10.0));
    assert!(near(f.arc().center, mm(0.0, -15.0), 1.0));
    let to_start = (f.arc().start - f.arc().center).norm();
    let to_end = (f.arc().end - f.arc().center).norm();
    assert!((to_start - to_end).abs() < 1e-3);
}

#[test]
fn test_endpoint_drag_respects_min_radius() {
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepCenterAdjustAngleRadius);
    f.drag(ARC_START, pt(10.0, 0.0));

    let min = settings(ArcEditMode::KeepCenterAdjustAngleRadius).min_arc_radius_iu();
    assert!((f.arc().radius() - min).abs() < 1e-6);
    assert!(near(f.arc().end, pt(0.0, min), 1e-6));
}

#[test]
fn test_constrainer_is_the_center() {
    let f = Fixture::new(quarter(), ArcEditMode::KeepCenterAdjustAngleRadius);
    for index in [ARC_START, ARC_MID, ARC_END, ARC_CENTER] {
        let id = f.points.point(index).id;
        assert_eq!(
            f.behavior.get_45_degree_constrainer(id, &f.points),
            Some(mm(0.0, 0.0))
        );
    }
}

#[test]
fn test_switching_mode_on_the_behavior() {
    let mut f = Fixture::new(quarter(), ArcEditMode::KeepCenterAdjustAngleRadius);
    f.behavior.set_arc_edit_mode(ArcEditMode::KeepCenterEndsAdjustAngle);
    assert_eq!(f.behavior.arc_edit_mode(), ArcEditMode::KeepCenterEndsAdjustAngle);

    f.drag(ARC_END, mm(-30.0, 0.0));
    assert!(near(f.arc().end, mm(-10.0, 0.0), 1e-3));
    assert_eq!(f.arc().start, mm(10.0, 0.0));
}
