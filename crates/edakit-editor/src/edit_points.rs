//! Edit point container
//!
//! Holds the handles shown while a shape is being edited: draggable points,
//! draggable edit lines connecting two points, and non-interactive
//! indicator lines. Every point and line gets an [`EditPointId`] from a
//! counter that is never reset, so a rebuilt container never reuses the
//! identity of a handle from before the rebuild.

use std::collections::HashMap;

use edakit_core::{EditError, Point, Result};
use serde::{Deserialize, Serialize};

use crate::constraints::{ConvergingConstraint, EditConstraint, LineNeighbours};

/// Stable identity of an edit point or edit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditPointId(u32);

impl EditPointId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EditPointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditPoint {
    pub id: EditPointId,
    pub position: Point,
}

/// A draggable connector between two edit points
#[derive(Debug, Clone, PartialEq)]
pub struct EditLine {
    pub id: EditPointId,
    pub origin: EditPointId,
    pub end: EditPointId,
    pub constraint: Option<EditConstraint>,
}

/// A non-interactive visual aid between two edit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorLine {
    pub from: EditPointId,
    pub to: EditPointId,
}

/// Where a handle id lives in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRef {
    Point(usize),
    Line(usize),
}

#[derive(Debug, Clone, Default)]
pub struct EditPoints {
    points: Vec<EditPoint>,
    lines: Vec<EditLine>,
    indicators: Vec<IndicatorLine>,
    /// Indices of the last point of each contour
    contour_ends: Vec<usize>,
    handles: HashMap<EditPointId, HandleRef>,
    next_id: u32,
}

impl EditPoints {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> EditPointId {
        let id = EditPointId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a point, returning its identity
    pub fn add_point(&mut self, position: Point) -> EditPointId {
        let id = self.allocate_id();
        self.handles.insert(id, HandleRef::Point(self.points.len()));
        self.points.push(EditPoint { id, position });
        id
    }

    /// Mark the most recently added point as the end of a contour
    pub fn add_break(&mut self) {
        if let Some(last) = self.points.len().checked_sub(1) {
            if self.contour_ends.last() != Some(&last) {
                self.contour_ends.push(last);
            }
        }
    }

    /// Connect two existing points with a draggable edit line
    pub fn add_line(&mut self, origin: EditPointId, end: EditPointId) -> EditPointId {
        let id = self.allocate_id();
        self.handles.insert(id, HandleRef::Line(self.lines.len()));
        self.lines.push(EditLine {
            id,
            origin,
            end,
            constraint: None,
        });
        id
    }

    pub fn add_indicator_line(&mut self, from: EditPointId, to: EditPointId) {
        self.indicators.push(IndicatorLine { from, to });
    }

    /// Drop every handle; identities handed out later are still fresh
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.indicators.clear();
        self.contour_ends.clear();
        self.handles.clear();
    }

    pub fn points_len(&self) -> usize {
        self.points.len()
    }

    pub fn lines_len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }

    pub fn points(&self) -> &[EditPoint] {
        &self.points
    }

    pub fn lines(&self) -> &[EditLine] {
        &self.lines
    }

    pub fn indicator_lines(&self) -> &[IndicatorLine] {
        &self.indicators
    }

    pub fn point(&self, index: usize) -> &EditPoint {
        &self.points[index]
    }

    pub fn line(&self, index: usize) -> &EditLine {
        &self.lines[index]
    }

    pub fn position(&self, index: usize) -> Point {
        self.points[index].position
    }

    pub fn set_position(&mut self, index: usize, position: Point) {
        self.points[index].position = position;
    }

    pub fn set_line_constraint(&mut self, index: usize, constraint: Option<EditConstraint>) {
        self.lines[index].constraint = constraint;
    }

    pub fn find(&self, id: EditPointId) -> Option<HandleRef> {
        self.handles.get(&id).copied()
    }

    pub fn index_of(&self, id: EditPointId) -> Option<usize> {
        match self.find(id) {
            Some(HandleRef::Point(index)) => Some(index),
            _ => None,
        }
    }

    /// True when `id` is the point at `index`
    pub fn is_point(&self, id: EditPointId, index: usize) -> bool {
        self.points.get(index).is_some_and(|p| p.id == id)
    }

    /// Endpoint indices of the line at `index`
    pub fn line_endpoints(&self, index: usize) -> Option<(usize, usize)> {
        let line = self.lines.get(index)?;
        Some((self.index_of(line.origin)?, self.index_of(line.end)?))
    }

    /// Current position of any handle; lines report their midpoint
    pub fn handle_position(&self, id: EditPointId) -> Option<Point> {
        match self.find(id)? {
            HandleRef::Point(index) => Some(self.points[index].position),
            HandleRef::Line(index) => {
                let (a, b) = self.line_endpoints(index)?;
                Some(nalgebra::center(&self.points[a].position, &self.points[b].position))
            }
        }
    }

    /// Index of the first point of the contour containing `index`
    pub fn contour_start_index(&self, index: usize) -> usize {
        self.contour_ends
            .iter()
            .rev()
            .find(|&&end| end < index)
            .map_or(0, |end| end + 1)
    }

    /// Index of the last point of the contour containing `index`
    pub fn contour_end_index(&self, index: usize) -> usize {
        self.contour_ends
            .iter()
            .find(|&&end| end >= index)
            .copied()
            .unwrap_or_else(|| self.points.len().saturating_sub(1))
    }

    pub fn is_contour_end(&self, index: usize) -> bool {
        self.contour_ends.contains(&index)
    }

    /// Previous point in the same contour, wrapping at the contour start
    pub fn previous(&self, index: usize) -> usize {
        if index == self.contour_start_index(index) {
            self.contour_end_index(index)
        } else {
            index - 1
        }
    }

    /// Next point in the same contour, wrapping at the contour end
    pub fn next(&self, index: usize) -> usize {
        if index == self.contour_end_index(index) {
            self.contour_start_index(index)
        } else {
            index + 1
        }
    }

    fn neighbours(&self, origin: usize, end: usize) -> LineNeighbours {
        LineNeighbours {
            previous: self.points[self.previous(origin)].position,
            next: self.points[self.next(end)].position,
            edge_count: self.contour_end_index(origin) - self.contour_start_index(origin) + 1,
        }
    }

    /// Converging constraint for the line at `index` from the current positions
    pub fn converging_constraint(&self, index: usize) -> Option<EditConstraint> {
        let (origin, end) = self.line_endpoints(index)?;
        let n = self.neighbours(origin, end);
        Some(EditConstraint::Converging(ConvergingConstraint::new(
            self.points[origin].position,
            self.points[end].position,
            n.previous,
            n.next,
        )))
    }

    /// Move a handle to `position`.
    ///
    /// Points are placed directly. Lines are translated so their midpoint
    /// lands on `position`, then their constraint is applied.
    pub fn move_handle(&mut self, id: EditPointId, position: Point) -> Result<()> {
        match self.find(id).ok_or(EditError::UnknownHandle(id.raw()))? {
            HandleRef::Point(index) => {
                self.points[index].position = position;
            }
            HandleRef::Line(index) => {
                let (a, b) = self
                    .line_endpoints(index)
                    .ok_or(EditError::UnknownHandle(id.raw()))?;
                let mid = nalgebra::center(&self.points[a].position, &self.points[b].position);
                let delta = position - mid;
                let mut origin = self.points[a].position + delta;
                let mut end = self.points[b].position + delta;
                if let Some(constraint) = self.lines[index].constraint {
                    let neighbours = self.neighbours(a, b);
                    constraint.apply(&mut origin, &mut end, &neighbours);
                }
                self.points[a].position = origin;
                self.points[b].position = end;
            }
        }
        Ok(())
    }
}
