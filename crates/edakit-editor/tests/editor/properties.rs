use edakit_core::{cross, pt, Point, Vector};
use edakit_editor::behavior::arc_solver::{
    edit_arc_center_keep_endpoints, edit_arc_endpoint_keep_center, edit_arc_endpoint_keep_tangent,
    ArcEndpoint,
};
use edakit_editor::behavior::{ArcPointEditBehavior, PointEditBehavior};
use edakit_editor::{ArcShape, EditPoints};
use edakit_settings::ArcEditMode;
use proptest::prelude::*;

use crate::common::{dyn_view, positions, settings, view};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn arc_strategy() -> impl Strategy<Value = ArcShape> {
    (coord(), coord(), 1.0e3..1.0e6f64, 0.0..std::f64::consts::TAU, 0.1..6.0f64, any::<bool>()).prop_map(
        |(cx, cy, radius, start_angle, sweep, clockwise)| {
            let center = pt(cx, cy);
            let end_angle = if clockwise {
                start_angle - sweep
            } else {
                start_angle + sweep
            };
            let on_circle = |a: f64| center + Vector::new(a.cos(), a.sin()) * radius;
            ArcShape::new(center, on_circle(start_angle), on_circle(end_angle), clockwise)
        },
    )
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-6 * scale.max(1.0)
}

fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

proptest! {
    #[test]
    fn prop_update_points_after_make_points_is_stable(arc in arc_strategy()) {
        let state = view();
        let mut behavior = ArcPointEditBehavior::new(
            arc.clone(),
            settings(ArcEditMode::KeepCenterAdjustAngleRadius),
            dyn_view(&state),
        );
        let mut points = EditPoints::new();
        behavior.make_points(&mut points);
        let before = positions(&points);

        prop_assert!(behavior.update_points(&mut points));
        prop_assert_eq!(positions(&points), before);
        prop_assert_eq!(behavior.arc(), &arc);
    }

    #[test]
    fn prop_mid_lies_on_the_circle(arc in arc_strategy()) {
        let radius = arc.radius();
        prop_assert!(close(dist(arc.mid(), arc.center), radius, radius));
    }

    #[test]
    fn prop_center_drag_stays_on_bisector(arc in arc_strategy(), cx in coord(), cy in coord()) {
        let mut arc = arc;
        let (start, end) = (arc.start, arc.end);
        prop_assume!(dist(start, end) > 1.0);

        prop_assert!(edit_arc_center_keep_endpoints(&mut arc, pt(cx, cy), 0.0));
        prop_assert_eq!(arc.start, start);
        prop_assert_eq!(arc.end, end);

        let to_start = dist(arc.center, start);
        prop_assert!(close(to_start, dist(arc.center, end), to_start));
    }

    #[test]
    fn prop_keep_center_equalizes_radii(
        arc in arc_strategy(),
        tx in coord(),
        ty in coord(),
        moving_start in any::<bool>(),
    ) {
        let mut arc = arc;
        let center = arc.center;
        let endpoint = if moving_start { ArcEndpoint::Start } else { ArcEndpoint::End };

        prop_assert!(edit_arc_endpoint_keep_center(&mut arc, endpoint, pt(tx, ty), 1.0e3));
        prop_assert_eq!(arc.center, center);

        let to_start = dist(arc.start, center);
        prop_assert!(to_start >= 1.0e3 - 1e-6);
        prop_assert!(close(to_start, dist(arc.end, center), to_start));
    }

    #[test]
    fn prop_keep_tangent_holds_fixed_endpoint_tangent(arc in arc_strategy(), tx in coord(), ty in coord()) {
        let mut arc = arc;
        let old_center = arc.center;
        let fixed = arc.start;
        let to = pt(tx, ty);

        if edit_arc_endpoint_keep_tangent(&mut arc, ArcEndpoint::End, to, 50.0) {
            prop_assert_eq!(arc.start, fixed);
            prop_assert_eq!(arc.end, to);

            // The new center is on the old radial line through the fixed end,
            // so the tangent there has the same direction.
            let old_radial = fixed - old_center;
            let new_radial = fixed - arc.center;
            let scale = old_radial.norm() * new_radial.norm();
            prop_assert!(cross(&old_radial, &new_radial).abs() <= 1e-6 * scale.max(1.0));

            let radius = new_radial.norm();
            prop_assert!(close(dist(to, arc.center), radius, radius));
        }
    }
}
