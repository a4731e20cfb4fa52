//! Kelvin/Celsius conversion
//!
//! The public API speaks Celsius. Kelvin only appears inside the
//! Steinhart-Hart and Beta models, which cross the boundary through these
//! two functions.

use crate::constants::physics::KELVIN_OFFSET;

/// Convert a Celsius temperature to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f32) -> f32 {
    celsius + KELVIN_OFFSET
}

/// Convert a Kelvin temperature to Celsius
#[inline]
pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    kelvin - KELVIN_OFFSET
}
