//! Edit script replay
//!
//! Runs a recorded sequence of handle drags against one shape and returns
//! the result. Scripts are JSON:
//!
//! ```json
//! {
//!   "settings": { "arc_edit_mode": "keep_endpoints_or_start_direction" },
//!   "shape": { "type": "segment", "start": [0, 0], "end": [10, 0] },
//!   "steps": [ { "handle": { "point": 1 }, "to": [7, 6.5], "constrain_45": true } ]
//! }
//! ```

use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use edakit_core::Point;
use edakit_editor::{CursorState, EditPointId, EditSession, Shape};
use edakit_settings::EditorSettings;

/// Handle addressed by its position in the session's points or lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleIndex {
    Point(usize),
    Line(usize),
}

/// One drag, from grab to release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub handle: HandleIndex,
    pub to: Point,
    #[serde(default)]
    pub constrain_45: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub settings: EditorSettings,
    pub shape: Shape,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid edit script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read edit script {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Run every step in one session and return the finished shape
    pub fn run(&self) -> anyhow::Result<Shape> {
        self.settings.validate()?;

        let view = Rc::new(CursorState::default());
        let mut session = EditSession::new(self.shape.clone(), self.settings.clone(), view);

        for (number, step) in self.steps.iter().enumerate() {
            let id = resolve(&session, step.handle)
                .with_context(|| format!("Step {}: no handle {:?}", number, step.handle))?;
            session
                .drag(id, step.to, step.constrain_45)
                .with_context(|| format!("Step {} failed", number))?;
            session.end_drag();
            tracing::debug!(step = number, handle = ?step.handle, "Replayed drag");
        }

        let shape = session.finish()?;
        tracing::info!(kind = %shape.kind(), steps = self.steps.len(), "Replay finished");
        Ok(shape)
    }
}

fn resolve(session: &EditSession, handle: HandleIndex) -> Option<EditPointId> {
    let points = session.points();
    match handle {
        HandleIndex::Point(index) => points.points().get(index).map(|p| p.id),
        HandleIndex::Line(index) => points.lines().get(index).map(|l| l.id),
    }
}
