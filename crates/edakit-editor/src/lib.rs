//! # EdaKit Editor
//!
//! Interactive point editing for EDA shapes.
//!
//! A shape being edited is shown as a set of handles ([`EditPoints`]).
//! Dragging a handle goes through the shape's [`PointEditBehavior`], which
//! writes the new handle positions back into the shape while holding the
//! right geometric invariants. Arcs are the interesting case: see
//! [`behavior::arc_solver`] for the policies selected by
//! [`edakit_settings::ArcEditMode`].
//!
//! [`EditSession`] drives a whole edit from first drag to release.

pub mod behavior;
pub mod commit;
pub mod constraints;
pub mod edit_points;
pub mod model;
pub mod session;
pub mod view;

pub use behavior::{make_behavior, report_contract_violation, PointEditBehavior};
pub use commit::{Commit, RecordingCommit, UpdatedItem};
pub use constraints::{ConvergingConstraint, EditConstraint, PerpendicularConstraint};
pub use edit_points::{EditLine, EditPoint, EditPointId, EditPoints, HandleRef, IndicatorLine};
pub use model::{
    ArcShape, BezierShape, CircleShape, PolySet, Polygon, RectangleShape, SegmentShape, Shape,
    ShapeKind, TableCellShape,
};
pub use session::EditSession;
pub use view::{CursorState, ViewControls};
