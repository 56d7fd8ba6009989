use edakit_core::pt;
use edakit_editor::behavior::{
    make_behavior, BezierPointEditBehavior, CirclePointEditBehavior, PointEditBehavior,
    RectanglePointEditBehavior, SegmentPointEditBehavior, TableCellPointEditBehavior,
    BEZIER_CTRL_PT1, BEZIER_CTRL_PT2, BEZIER_END, BEZIER_START, CIRC_CENTER, CIRC_END,
    COL_WIDTH, RECT_BOT_RIGHT, RECT_CENTER, RECT_RIGHT, RECT_TOP_LEFT, ROW_HEIGHT, SEG_END,
    SEG_START,
};
use edakit_editor::{
    ArcShape, BezierShape, CircleShape, EditPoints, PolySet, Polygon, RecordingCommit,
    RectangleShape, SegmentShape, Shape, TableCellShape, UpdatedItem,
};
use edakit_settings::{ArcEditMode, EditorSettings};

use crate::common::{dyn_view, ids, mm, near, positions, settings, view};

fn every_shape() -> Vec<Shape> {
    vec![
        SegmentShape::new(mm(0.0, 0.0), mm(10.0, 5.0)).into(),
        CircleShape::from_radius(mm(1.0, 1.0), 4.0e6).into(),
        BezierShape::new(mm(0.0, 0.0), mm(0.0, 10.0), mm(10.0, 10.0), mm(10.0, 0.0)).into(),
        ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), false).into(),
        ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), true).into(),
        PolySet::new(vec![Polygon::new(vec![
            mm(0.0, 0.0),
            mm(10.0, 0.0),
            mm(10.0, 10.0),
            mm(0.0, 10.0),
        ])
        .with_hole(vec![mm(2.0, 2.0), mm(4.0, 2.0), mm(3.0, 4.0)])])
        .into(),
        RectangleShape::new(mm(0.0, 0.0), mm(20.0, 10.0)).into(),
        TableCellShape::new(mm(0.0, 0.0), 10.0e6, 5.0e6, 1, 2).into(),
    ]
}

#[test]
fn test_make_then_update_points_is_idempotent() {
    let state = view();
    for shape in every_shape() {
        let kind = shape.kind();
        let mut behavior = make_behavior(shape, &EditorSettings::default(), dyn_view(&state));
        let mut points = EditPoints::new();
        behavior.make_points(&mut points);

        let before = positions(&points);
        let before_ids = ids(&points);
        assert!(behavior.update_points(&mut points), "{kind}");
        assert_eq!(positions(&points), before, "{kind}");
        assert_eq!(ids(&points), before_ids, "{kind}");
    }
}

#[test]
fn test_point_orders() {
    let state = view();
    let arc = ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), false);
    let behavior = make_behavior(arc.clone().into(), &EditorSettings::default(), dyn_view(&state));
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);

    assert_eq!(points.points_len(), 4);
    assert_eq!(points.position(0), arc.start);
    assert_eq!(points.position(1), arc.mid());
    assert_eq!(points.position(2), arc.end);
    assert_eq!(points.position(3), arc.center);
    assert_eq!(points.indicator_lines().len(), 2);
    assert_eq!(points.indicator_lines()[0].from, points.point(3).id);
}

#[test]
fn test_update_points_resyncs_after_external_change() {
    let segment = SegmentShape::new(pt(0.0, 0.0), pt(10.0, 0.0));
    let mut behavior = SegmentPointEditBehavior::new(segment);
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    let before_ids = ids(&points);

    behavior.segment_mut().start = pt(-3.0, 4.0);
    assert!(behavior.update_points(&mut points));

    assert_eq!(points.position(SEG_START), pt(-3.0, 4.0));
    assert_eq!(points.position(SEG_END), pt(10.0, 0.0));
    assert_eq!(ids(&points), before_ids);
}

#[test]
fn test_segment_constrainer_is_the_other_endpoint() {
    let behavior = SegmentPointEditBehavior::new(SegmentShape::new(pt(1.0, 2.0), pt(30.0, 40.0)));
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    let start = points.point(SEG_START).id;
    let end = points.point(SEG_END).id;

    assert_eq!(behavior.get_45_degree_constrainer(start, &points), Some(pt(30.0, 40.0)));
    assert_eq!(behavior.get_45_degree_constrainer(end, &points), Some(pt(1.0, 2.0)));

    // Still the other endpoint after the dragged one moved.
    points.move_handle(end, pt(-5.0, -5.0)).unwrap();
    assert_eq!(behavior.get_45_degree_constrainer(end, &points), Some(pt(1.0, 2.0)));
}

#[test]
fn test_circle_end_to_end() {
    let mut behavior = CirclePointEditBehavior::new(CircleShape::new(pt(0.0, 0.0), pt(5.0, 0.0)));
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);

    assert_eq!(points.points_len(), 2);
    assert_eq!(points.position(CIRC_CENTER), pt(0.0, 0.0));
    assert_eq!(points.position(CIRC_END), pt(5.0, 0.0));

    let end = points.point(CIRC_END).id;
    points.move_handle(end, pt(0.0, 5.0)).unwrap();
    let mut commit = RecordingCommit::new();
    let mut updated = Vec::new();
    behavior.update_item(end, &mut points, &mut commit, &mut updated);
    assert!(behavior.update_points(&mut points));

    assert_eq!(behavior.circle().center, pt(0.0, 0.0));
    assert_eq!(behavior.circle().end, pt(0.0, 5.0));
    assert_eq!(behavior.circle().radius(), 5.0);
    assert!(updated.is_empty());
    assert!(commit.is_empty());
}

#[test]
fn test_circle_center_drag_translates() {
    let mut behavior = CirclePointEditBehavior::new(CircleShape::new(pt(0.0, 0.0), pt(5.0, 0.0)));
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);

    let center = points.point(CIRC_CENTER).id;
    points.move_handle(center, pt(2.0, 3.0)).unwrap();
    behavior.update_item(center, &mut points, &mut RecordingCommit::new(), &mut Vec::new());
    behavior.update_points(&mut points);

    assert_eq!(points.position(CIRC_END), pt(7.0, 3.0));
    assert_eq!(behavior.get_45_degree_constrainer(center, &points), None);
}

#[test]
fn test_bezier_updates_polyline_and_constrainers() {
    let curve = BezierShape::new(mm(0.0, 0.0), mm(0.0, 10.0), mm(10.0, 10.0), mm(10.0, 0.0));
    let mut behavior = BezierPointEditBehavior::new(curve, 5_000.0);
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    let initial = behavior.bezier().polyline().to_vec();
    assert!(!initial.is_empty());

    let c1 = points.point(BEZIER_CTRL_PT1).id;
    let c2 = points.point(BEZIER_CTRL_PT2).id;
    let end = points.point(BEZIER_END).id;
    assert_eq!(behavior.get_45_degree_constrainer(c1, &points), Some(mm(0.0, 0.0)));
    assert_eq!(behavior.get_45_degree_constrainer(c2, &points), Some(mm(10.0, 0.0)));
    assert_eq!(behavior.get_45_degree_constrainer(end, &points), None);

    points.move_handle(end, mm(20.0, 0.0)).unwrap();
    behavior.update_item(end, &mut points, &mut RecordingCommit::new(), &mut Vec::new());

    let line = behavior.bezier().polyline();
    assert_ne!(line, initial.as_slice());
    assert!(near(line[line.len() - 1], mm(20.0, 0.0), 1e-3));
    assert_eq!(points.position(BEZIER_START), behavior.bezier().start);
}

#[test]
fn test_rectangle_corner_is_pinned_by_opposite_corner() {
    let settings = EditorSettings::default();
    let min = settings.min_rect_size_iu();
    let mut behavior =
        RectanglePointEditBehavior::new(RectangleShape::new(mm(0.0, 0.0), mm(20.0, 10.0)), min);
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    assert_eq!(points.points_len(), 5);
    assert_eq!(points.lines_len(), 4);

    // Dragged past the opposite corner: stops at the minimum size.
    let corner = points.point(RECT_TOP_LEFT).id;
    points.move_handle(corner, mm(25.0, -5.0)).unwrap();
    behavior.update_item(corner, &mut points, &mut RecordingCommit::new(), &mut Vec::new());
    assert!(behavior.update_points(&mut points));

    let rect = behavior.rectangle();
    assert_eq!(rect.start, pt(20.0e6 - min, -5.0e6));
    assert_eq!(rect.end, mm(20.0, 10.0));
    assert_eq!(points.position(RECT_BOT_RIGHT), mm(20.0, 10.0));
    assert_eq!(behavior.get_45_degree_constrainer(corner, &points), Some(mm(20.0, 10.0)));
}

#[test]
fn test_rectangle_edge_moves_one_side_only() {
    let mut behavior =
        RectanglePointEditBehavior::new(RectangleShape::new(mm(0.0, 0.0), mm(20.0, 10.0)), 1_000.0);
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);

    // Sideways motion along the edge is dropped by the edge constraint.
    let right = points.line(RECT_RIGHT).id;
    points.move_handle(right, mm(26.0, 9.0)).unwrap();
    behavior.update_item(right, &mut points, &mut RecordingCommit::new(), &mut Vec::new());
    behavior.update_points(&mut points);

    assert_eq!(behavior.rectangle().start, mm(0.0, 0.0));
    assert_eq!(behavior.rectangle().end, mm(26.0, 10.0));
    assert_eq!(points.position(RECT_CENTER), mm(13.0, 5.0));
}

#[test]
fn test_rotated_rectangle_asks_for_another_behavior() {
    let mut behavior = RectanglePointEditBehavior::new(
        RectangleShape::new(mm(0.0, 0.0), mm(20.0, 10.0)),
        1_000.0,
    );
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    let before = positions(&points);

    behavior.rectangle_mut().rotation = 90.0;
    assert!(behavior.update_points(&mut points));

    behavior.rectangle_mut().rotation = 30.0;
    assert!(!behavior.update_points(&mut points));
    assert_ne!(positions(&points), before);
}

#[test]
fn test_table_cell_resizes_column_and_row() {
    let cell = TableCellShape::new(mm(0.0, 0.0), 10.0e6, 5.0e6, 2, 1);
    let mut behavior = TableCellPointEditBehavior::new(cell, 1_000.0);
    let mut points = EditPoints::new();
    behavior.make_points(&mut points);
    assert_eq!(points.position(COL_WIDTH), mm(10.0, 2.5));
    assert_eq!(points.position(ROW_HEIGHT), mm(5.0, 5.0));

    let mut commit = RecordingCommit::new();
    let mut updated = Vec::new();

    let col = points.point(COL_WIDTH).id;
    points.move_handle(col, mm(14.0, 3.0)).unwrap();
    behavior.update_item(col, &mut points, &mut commit, &mut updated);

    let row = points.point(ROW_HEIGHT).id;
    points.move_handle(row, mm(1.0, 8.0)).unwrap();
    behavior.update_item(row, &mut points, &mut commit, &mut updated);
    behavior.update_points(&mut points);

    let expected = vec![
        UpdatedItem::TableColumnWidth {
            column: 2,
            width: 14.0e6,
        },
        UpdatedItem::TableRowHeight {
            row: 1,
            height: 8.0e6,
        },
    ];
    assert_eq!(updated, expected);
    assert_eq!(commit.items(), expected.as_slice());
    assert_eq!(points.position(COL_WIDTH), mm(14.0, 4.0));
}

#[cfg(all(not(debug_assertions), not(feature = "strict-contracts")))]
#[test]
fn test_wrong_point_count_is_a_noop() {
    let state = view();
    let arc = ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), false);
    let mut behavior = make_behavior(
        arc.clone().into(),
        &settings(ArcEditMode::KeepCenterAdjustAngleRadius),
        dyn_view(&state),
    );

    // A container built for a segment.
    let mut points = EditPoints::new();
    SegmentPointEditBehavior::new(SegmentShape::new(pt(0.0, 0.0), pt(1.0, 1.0))).make_points(&mut points);
    let before = positions(&points);
    let first = points.point(0).id;

    assert!(behavior.update_points(&mut points));
    behavior.update_item(first, &mut points, &mut RecordingCommit::new(), &mut Vec::new());

    assert_eq!(behavior.shape(), Shape::Arc(arc));
    assert_eq!(positions(&points), before);
}

// A miscounted container must not look like a rectangle that needs
// converting to a polygon.
#[cfg(all(not(debug_assertions), not(feature = "strict-contracts")))]
#[test]
fn test_wrong_point_count_does_not_request_generalization() {
    let state = view();
    let rect = RectangleShape::new(mm(0.0, 0.0), mm(10.0, 5.0));
    let mut behavior = make_behavior(rect.clone().into(), &settings(ArcEditMode::default()), dyn_view(&state));

    let mut points = EditPoints::new();
    SegmentPointEditBehavior::new(SegmentShape::new(pt(0.0, 0.0), pt(1.0, 1.0))).make_points(&mut points);
    let before = positions(&points);

    assert!(behavior.update_points(&mut points));
    assert_eq!(behavior.shape(), Shape::Rectangle(rect));
    assert_eq!(positions(&points), before);
}

#[cfg(any(debug_assertions, feature = "strict-contracts"))]
#[test]
#[should_panic(expected = "contract violation")]
fn test_wrong_point_count_panics_when_strict() {
    let mut behavior = CirclePointEditBehavior::new(CircleShape::new(pt(0.0, 0.0), pt(5.0, 0.0)));
    let mut points = EditPoints::new();
    points.add_point(pt(0.0, 0.0));
    behavior.update_points(&mut points);
}

#[cfg(any(debug_assertions, feature = "strict-contracts"))]
#[test]
#[should_panic(expected = "contract violation")]
fn test_wrong_point_count_panics_on_update_item() {
    let state = view();
    let arc = ArcShape::new(mm(0.0, 0.0), mm(10.0, 0.0), mm(0.0, 10.0), false);
    let mut behavior = make_behavior(
        arc.into(),
        &settings(ArcEditMode::KeepCenterAdjustAngleRadius),
        dyn_view(&state),
    );

    let mut points = EditPoints::new();
    SegmentPointEditBehavior::new(SegmentShape::new(pt(0.0, 0.0), pt(1.0, 1.0))).make_points(&mut points);
    let first = points.point(0).id;
    behavior.update_item(first, &mut points, &mut RecordingCommit::new(), &mut Vec::new());
}
