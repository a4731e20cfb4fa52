//! Constants for thermsense
//!
//! Numeric values used across the engine live here, named with their units.
//!
//! - **Physics**: temperature scale offsets
//! - **Profile**: identifiers and sizes of the stored profile record

/// Temperature scale constants.
pub mod physics;

/// Stored profile record identifiers, sizes and the failure diagnostic.
pub mod profile;

pub use physics::{ABSOLUTE_ZERO_CELSIUS, KELVIN_OFFSET};
pub use profile::{PROFILE_FAILED_DIAGNOSTIC, PROFILE_RECORD_LEN, PROFILE_SIGNATURE, PROFILE_TAG};
