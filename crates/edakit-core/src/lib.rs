//! # EdaKit Core
//!
//! Core types shared by the EdaKit crates: 2D geometry primitives in
//! internal units, unit conversions and the error types.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{EditError, Result};
pub use geometry::{
    circumcenter, cross, perpendicular, positive_sweep, pt, resize, rotate, rotate_about,
    snap_vector_45, Point, Segment, Vector,
};
pub use units::{mm_to_iu, IU_PER_MM};
