//! Point edit behaviors
//!
//! One behavior per shape kind. A behavior owns the shape being edited and
//! translates between it and the handles in an [`EditPoints`] container:
//!
//! 1. `make_points` fills an empty container once per edit session
//! 2. each drag moves a handle, then `update_item` writes the handles back
//!    into the shape and `update_points` re-synchronizes the handles
//! 3. `finalize_item` runs once when the drag is released
//!
//! The dragged handle is identified by its [`EditPointId`], never by
//! position.

use std::rc::Rc;

use edakit_core::{EditError, Point};
use edakit_settings::EditorSettings;

use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::Shape;
use crate::view::ViewControls;

/// Report a broken call contract.
///
/// Always logged. Debug builds panic, as do release builds with the
/// `strict-contracts` feature; otherwise the caller skips the operation.
pub fn report_contract_violation(err: &EditError) {
    tracing::error!(error = %err, "Point editor contract violation");

    #[cfg(any(debug_assertions, feature = "strict-contracts"))]
    panic!("point editor contract violation: {err}");
}

/// Bail out of a behavior method when the container holds the wrong
/// number of points.
macro_rules! check_point_count {
    ($points:expr, $expected:expr, $behavior:expr) => {
        check_point_count!($points, $expected, $behavior, ())
    };
    ($points:expr, $expected:expr, $behavior:expr, $ret:expr) => {
        if $points.points_len() != $expected {
            $crate::behavior::report_contract_violation(&edakit_core::EditError::point_count(
                $behavior,
                $expected,
                $points.points_len(),
            ));
            return $ret;
        }
    };
}

pub(crate) use check_point_count;

/// Lower bound variant of [`check_point_count!`]
macro_rules! check_point_count_ge {
    ($points:expr, $expected:expr, $behavior:expr) => {
        if $points.points_len() < $expected {
            $crate::behavior::report_contract_violation(&edakit_core::EditError::point_count(
                $behavior,
                $expected,
                $points.points_len(),
            ));
            return;
        }
    };
}

pub(crate) use check_point_count_ge;

mod arc;
pub mod arc_solver;
mod bezier;
mod circle;
mod polygon;
mod rectangle;
mod segment;
mod table_cell;

pub use arc::{ArcPointEditBehavior, ARC_CENTER, ARC_END, ARC_MID, ARC_START};
pub use bezier::{
    BezierPointEditBehavior, BEZIER_CTRL_PT1, BEZIER_CTRL_PT2, BEZIER_END, BEZIER_START,
};
pub use circle::{CirclePointEditBehavior, CIRC_CENTER, CIRC_END};
pub use polygon::PolygonPointEditBehavior;
pub use rectangle::{
    RectanglePointEditBehavior, RECT_BOT, RECT_BOT_LEFT, RECT_BOT_RIGHT, RECT_CENTER, RECT_LEFT,
    RECT_RIGHT, RECT_TOP, RECT_TOP_LEFT, RECT_TOP_RIGHT,
};
pub use segment::{SegmentPointEditBehavior, SEG_END, SEG_START};
pub use table_cell::{TableCellPointEditBehavior, COL_WIDTH, ROW_HEIGHT};

pub trait PointEditBehavior {
    /// Append the handles for the shape to an empty container
    fn make_points(&self, points: &mut EditPoints);

    /// Re-synchronize handle positions from the shape.
    ///
    /// Returns `false` when this behavior can no longer represent the
    /// shape and the caller must switch to another one. A container with
    /// the wrong number of points is a contract violation, not a reason to
    /// switch, and returns `true` with the container untouched.
    fn update_points(&mut self, points: &mut EditPoints) -> bool;

    /// Write the handles back into the shape after `edited` was dragged.
    ///
    /// Items other than the shape itself that change are staged in
    /// `commit` and appended to `updated`.
    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        commit: &mut dyn Commit,
        updated: &mut Vec<UpdatedItem>,
    );

    /// Called once when the drag is released
    fn finalize_item(&mut self, _points: &mut EditPoints, _commit: &mut dyn Commit) {}

    /// Anchor for 45 degree constrained dragging of `edited`; `None`
    /// leaves the choice to the caller
    fn get_45_degree_constrainer(&self, _edited: EditPointId, _points: &EditPoints) -> Option<Point> {
        None
    }

    /// Current state of the edited shape
    fn shape(&self) -> Shape;
}

/// Create the behavior for `shape`
pub fn make_behavior(
    shape: Shape,
    settings: &EditorSettings,
    view: Rc<dyn ViewControls>,
) -> Box<dyn PointEditBehavior> {
    tracing::debug!(kind = %shape.kind(), "Creating point edit behavior");
    match shape {
        Shape::Segment(s) => Box::new(SegmentPointEditBehavior::new(s)),
        Shape::Circle(s) => Box::new(CirclePointEditBehavior::new(s)),
        Shape::Bezier(s) => Box::new(BezierPointEditBehavior::new(s, settings.bezier_max_error_iu())),
        Shape::Arc(s) => Box::new(ArcPointEditBehavior::new(s, settings.clone(), view)),
        Shape::Polygon(s) => Box::new(PolygonPointEditBehavior::new(s)),
        Shape::Rectangle(s) => Box::new(RectanglePointEditBehavior::new(s, settings.min_rect_size_iu())),
        Shape::TableCell(s) => Box::new(TableCellPointEditBehavior::new(s, settings.min_rect_size_iu())),
    }
}
