//! # EdaKit
//!
//! Interactive point editing for EDA drawing shapes:
//! - Segments, circles, cubic beziers and arcs
//! - Polygons with holes, kept consistent while edges are dragged
//! - Axis-aligned rectangles and table cell resizing
//! - Three arc editing modes, including tangent-preserving endpoint drags
//!
//! ## Architecture
//!
//! EdaKit is organized as a workspace with multiple crates:
//!
//! 1. **edakit-core** - Errors, internal units, 2D geometry
//! 2. **edakit-settings** - Editor settings, persistence and validation
//! 3. **edakit-editor** - Shapes, edit points, behaviors, arc solvers, sessions
//! 4. **edakit** - This facade and the `edakit` script replay binary

pub mod replay;

pub use edakit_core::{pt, units, EditError, Point, Result, Segment, Vector};
pub use edakit_editor::behavior;
pub use edakit_editor::{
    make_behavior, ArcShape, BezierShape, CircleShape, Commit, CursorState, EditPointId,
    EditPoints, EditSession, PointEditBehavior, PolySet, Polygon, RecordingCommit,
    RectangleShape, SegmentShape, Shape, ShapeKind, TableCellShape, UpdatedItem, ViewControls,
};
pub use edakit_settings::{ArcEditMode, ConfigError, EditorSettings, SettingsError};
pub use replay::{HandleIndex, ReplayScript, ReplayStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so replay output on stdout stays machine readable.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
