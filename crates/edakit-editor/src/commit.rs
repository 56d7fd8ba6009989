//! Commit collaborator
//!
//! Behaviors never record undo state themselves. They hand every item
//! they touch to a [`Commit`], which owns the snapshot/undo policy.

use serde::{Deserialize, Serialize};

use crate::model::Shape;

/// Something modified by an edit, besides the shape being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpdatedItem {
    /// Snapshot of a shape taken before it is modified
    Shape { shape: Shape },
    /// A table column was resized through one of its cells
    TableColumnWidth { column: usize, width: f64 },
    /// A table row was resized through one of its cells
    TableRowHeight { row: usize, height: f64 },
}

pub trait Commit {
    /// Stage `item` as modified by the current edit
    fn modify(&mut self, item: &UpdatedItem);
}

/// A commit that records staged items in order
#[derive(Debug, Clone, Default)]
pub struct RecordingCommit {
    items: Vec<UpdatedItem>,
}

impl RecordingCommit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UpdatedItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<UpdatedItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Commit for RecordingCommit {
    fn modify(&mut self, item: &UpdatedItem) {
        tracing::trace!(?item, "Staged modification");
        self.items.push(item.clone());
    }
}
