//! Steinhart-Hart Beta/r form
//!
//! Single-exponential simplification of Steinhart-Hart. The datasheet pair
//! (R0 at T0, Beta) collapses into a reference resistance:
//!
//! ```text
//! r = R0·exp(-Beta / T0)
//!
//!         Beta
//! T = ------------        R = r·exp(Beta / T)
//!     ln(R / r)
//! ```
//!
//! Temperatures inside this module are Kelvin.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{SteinhartHart, ThermistorModel};
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

/// Beta model with derived reference resistance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BetaR {
    /// Characteristic constant (K)
    pub beta: f32,
    /// Reference resistance `R0·exp(-Beta/T0)` (ohms)
    pub r: f32,
    /// Nominal resistance at `t0` (ohms)
    pub r0: f32,
    /// Nominal temperature (K)
    pub t0: f32,
}

impl BetaR {
    /// Build from datasheet values, deriving `r`
    pub fn new(beta: f32, r0: f32, t0: f32) -> Self {
        Self { beta, r: reference_resistance(beta, r0, t0), r0, t0 }
    }

    /// Recover Beta and `r` from a Steinhart-Hart triple
    ///
    /// Only `b` contributes: `Beta = 1/b`. The cubic term of a fitted triple
    /// is discarded, so this is exact only for triples with `c == 0`.
    pub fn from_steinhart_hart(coefficients: &SteinhartHart, r0: f32, t0: f32) -> Self {
        let beta = 1.0 / coefficients.b;
        log_debug!("Beta/r from A/B/C: beta={} r0={} t0={}", beta, r0, t0);
        Self::new(beta, r0, t0)
    }
}

fn reference_resistance(beta: f32, r0: f32, t0: f32) -> f32 {
    r0 * libm::expf(-beta / t0)
}

impl ThermistorModel for BetaR {
    fn temperature(&self, ohms: f32) -> f32 {
        let kelvin = self.beta / libm::logf(ohms / self.r);
        kelvin_to_celsius(kelvin)
    }

    fn resistance(&self, celsius: f32) -> f32 {
        let kelvin = celsius_to_kelvin(celsius);
        self.r * libm::expf(self.beta / kelvin)
    }
}
