//! Edit session driver
//!
//! Runs one interactive edit of one shape: builds the handles, applies
//! drags through the shape's behavior, swaps behaviors when a shape turns
//! into something its editor cannot represent, and finalizes exactly once.

use std::rc::Rc;

use edakit_core::{snap_vector_45, EditError, Point, Result};
use edakit_settings::{ArcEditMode, EditorSettings};

use crate::behavior::{make_behavior, PointEditBehavior};
use crate::commit::{Commit, RecordingCommit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::Shape;
use crate::view::{CursorState, ViewControls};

#[derive(Debug, Clone, Copy)]
struct Drag {
    handle: EditPointId,
    /// Handle position when the drag started
    origin: Point,
}

pub struct EditSession<C: Commit = RecordingCommit> {
    behavior: Box<dyn PointEditBehavior>,
    points: EditPoints,
    settings: EditorSettings,
    view: Rc<CursorState>,
    commit: C,
    original: Shape,
    updated: Vec<UpdatedItem>,
    drag: Option<Drag>,
    closed: bool,
}

impl<C: Commit> EditSession<C> {
    /// Start editing `shape`; its current state is staged in `commit`
    pub fn begin(shape: Shape, settings: EditorSettings, view: Rc<CursorState>, mut commit: C) -> Self {
        commit.modify(&UpdatedItem::Shape {
            shape: shape.clone(),
        });

        let behavior = make_behavior(shape.clone(), &settings, view.clone() as Rc<dyn ViewControls>);
        let mut points = EditPoints::new();
        behavior.make_points(&mut points);

        tracing::debug!(
            kind = %shape.kind(),
            points = points.points_len(),
            lines = points.lines_len(),
            "Edit session started"
        );

        Self {
            behavior,
            points,
            settings,
            view,
            commit,
            original: shape,
            updated: Vec::new(),
            drag: None,
            closed: false,
        }
    }

    pub fn points(&self) -> &EditPoints {
        &self.points
    }

    /// Current state of the edited shape
    pub fn shape(&self) -> Shape {
        self.behavior.shape()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Items other than the edited shape touched so far
    pub fn updated_items(&self) -> &[UpdatedItem] {
        &self.updated
    }

    pub fn commit(&self) -> &C {
        &self.commit
    }

    pub fn into_commit(self) -> C {
        self.commit
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(EditError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn rebuild_behavior(&mut self, shape: Shape) {
        self.behavior = make_behavior(shape, &self.settings, self.view.clone() as Rc<dyn ViewControls>);
    }

    /// Re-synchronize the handles, switching to a more general behavior
    /// when the current one gives up on the shape
    fn sync_points(&mut self) {
        if self.behavior.update_points(&mut self.points) {
            return;
        }

        let shape = self.behavior.shape();
        let Some(general) = shape.generalized() else {
            return;
        };

        tracing::debug!(from = %shape.kind(), to = %general.kind(), "Switching point edit behavior");
        self.rebuild_behavior(general);
        self.points.clear();
        self.behavior.make_points(&mut self.points);
        self.drag = None;
    }

    /// Move `handle` under the cursor.
    ///
    /// With `constrain_45` the handle only moves at multiples of 45 degrees
    /// from the behavior's anchor, or from where the drag started when the
    /// behavior has none.
    pub fn drag(&mut self, handle: EditPointId, cursor: Point, constrain_45: bool) -> Result<()> {
        self.ensure_open()?;
        let position = self
            .points
            .handle_position(handle)
            .ok_or(EditError::UnknownHandle(handle.raw()))?;

        let drag = match self.drag {
            Some(drag) if drag.handle == handle => drag,
            _ => {
                let drag = Drag {
                    handle,
                    origin: position,
                };
                self.drag = Some(drag);
                drag
            }
        };

        self.view.set_cursor(cursor);

        let target = if constrain_45 {
            let anchor = self
                .behavior
                .get_45_degree_constrainer(handle, &self.points)
                .unwrap_or(drag.origin);
            anchor + snap_vector_45(&(cursor - anchor))
        } else {
            cursor
        };

        self.points.move_handle(handle, target)?;
        self.behavior
            .update_item(handle, &mut self.points, &mut self.commit, &mut self.updated);
        self.sync_points();

        tracing::trace!(%handle, x = target.x, y = target.y, "Dragged handle");
        Ok(())
    }

    /// Release the current drag; the next drag starts a new 45 degree anchor
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Pick up a shape changed outside the session
    pub fn refresh(&mut self, shape: Shape) -> Result<()> {
        self.ensure_open()?;
        let same_kind = shape.kind() == self.behavior.shape().kind();
        self.rebuild_behavior(shape);

        if same_kind {
            self.sync_points();
        } else {
            self.points.clear();
            self.behavior.make_points(&mut self.points);
            self.drag = None;
        }
        Ok(())
    }

    pub fn arc_edit_mode(&self) -> ArcEditMode {
        self.settings.arc_edit_mode
    }

    pub fn set_arc_edit_mode(&mut self, mode: ArcEditMode) -> Result<()> {
        self.ensure_open()?;
        if mode != self.settings.arc_edit_mode {
            tracing::debug!(%mode, "Arc edit mode changed");
            self.settings.arc_edit_mode = mode;
            let shape = self.behavior.shape();
            self.rebuild_behavior(shape);
        }
        Ok(())
    }

    /// Switch to the next arc edit mode, returning it
    pub fn cycle_arc_edit_mode(&mut self) -> Result<ArcEditMode> {
        let mode = self.settings.arc_edit_mode.next();
        self.set_arc_edit_mode(mode)?;
        Ok(mode)
    }

    /// Finalize the edit and close the session, returning the edited shape
    pub fn finish(&mut self) -> Result<Shape> {
        self.ensure_open()?;
        self.behavior.finalize_item(&mut self.points, &mut self.commit);
        self.closed = true;
        self.drag = None;

        let shape = self.behavior.shape();
        tracing::debug!(kind = %shape.kind(), updated = self.updated.len(), "Edit session finished");
        Ok(shape)
    }

    /// Abandon the edit and close the session, returning the shape as it
    /// was when the session began
    pub fn cancel(&mut self) -> Result<Shape> {
        self.ensure_open()?;
        self.closed = true;
        self.drag = None;
        tracing::debug!(kind = %self.original.kind(), "Edit session cancelled");
        Ok(self.original.clone())
    }
}

impl EditSession<RecordingCommit> {
    /// Session with a fresh recording commit
    pub fn new(shape: Shape, settings: EditorSettings, view: Rc<CursorState>) -> Self {
        Self::begin(shape, settings, view, RecordingCommit::new())
    }
}
