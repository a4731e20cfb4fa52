//! Voltage-divider wiring
//!
//! ```text
//!  DividerFixedOnTop             DividerThermistorOnTop
//!
//!      -+- V                          -+- V
//!       |                             \|
//!      | | R_F                        |\| R_T
//!      |_|                            |_\_
//!       |                              |
//!       +- Vout -> ADC                 +- Vout -> ADC
//!      \|                              |
//!      |\| R_T                        | | R_F
//!      |_\_                           |_|
//!       |                              |
//!      -+-                            -+-
//!
//!  R_T = Vout·R_F / (V - Vout)        R_T = V·R_F / Vout - R_F
//! ```
//!
//! These are raw formulas. At the rails (Vout = V or Vout = 0) they divide by
//! zero and return IEEE infinities; the engine rejects rail codes before
//! getting here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wiring topology of the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiringSchema {
    /// Fixed resistor above the thermistor, thermistor returns to ground
    DividerFixedOnTop,
    /// Thermistor above the fixed resistor
    DividerThermistorOnTop,
}

impl WiringSchema {
    /// Thermistor resistance implied by the divider output voltage
    pub fn resistance_from_vout(self, vout: f32, v: f32, r_f: f32) -> f32 {
        match self {
            Self::DividerFixedOnTop => (vout * r_f) / (v - vout),
            Self::DividerThermistorOnTop => ((v * r_f) / vout) - r_f,
        }
    }

    /// Divider output voltage for a given thermistor resistance
    pub fn vout_from_resistance(self, r_t: f32, v: f32, r_f: f32) -> f32 {
        match self {
            Self::DividerFixedOnTop => (v * r_t) / (r_f + r_t),
            Self::DividerThermistorOnTop => (v * r_f) / (r_f + r_t),
        }
    }

    /// Record discriminant
    pub(crate) fn to_raw(self) -> u8 {
        match self {
            Self::DividerFixedOnTop => 0,
            Self::DividerThermistorOnTop => 1,
        }
    }

    /// Parse a record discriminant
    pub(crate) fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::DividerFixedOnTop),
            1 => Some(Self::DividerThermistorOnTop),
            _ => None,
        }
    }
}
