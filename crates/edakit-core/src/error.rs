//! Error handling for EdaKit
//!
//! Point editing is called many times per second while a handle is dragged,
//! so behaviors never return these errors from their hot paths. They are
//! used in two places:
//! - Contract violations inside behaviors, which are logged and turned into
//!   no-ops (see `edakit_editor::behavior::report_contract_violation`)
//! - The fallible session API, which reports caller misuse
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Point editing error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// A behavior was handed a points container it did not build
    #[error("{behavior}: expected {expected} edit points, found {actual}")]
    PointCountMismatch {
        /// The behavior that detected the mismatch.
        behavior: &'static str,
        /// The number of points the behavior works with.
        expected: usize,
        /// The number of points actually present.
        actual: usize,
    },

    /// A handle id does not belong to the points container
    #[error("Unknown edit handle #{0}")]
    UnknownHandle(u32),

    /// The session was already finished or cancelled
    #[error("Edit session is closed")]
    SessionClosed,

    /// The requested edit cannot be solved for the current geometry
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl EditError {
    /// Create a point count mismatch error
    pub fn point_count(behavior: &'static str, expected: usize, actual: usize) -> Self {
        Self::PointCountMismatch {
            behavior,
            expected,
            actual,
        }
    }
}

/// Result type for point editing operations
pub type Result<T> = std::result::Result<T, EditError>;
