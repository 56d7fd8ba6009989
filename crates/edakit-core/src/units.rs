//! Unit conversion utilities
//!
//! Geometry is stored in internal units (IU) where one IU is one nanometre.
//! Settings files use millimetres.

/// Internal units per millimetre
pub const IU_PER_MM: f64 = 1_000_000.0;

/// Millimetres to internal units
pub fn mm_to_iu(mm: f64) -> f64 {
    mm * IU_PER_MM
}
