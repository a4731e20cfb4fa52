//! Log-linear approximation
//!
//! ```text
//! x(T) = T - Tlo
//! ln(R) = A·x(T) + B
//!
//!     ln(R) - B
//! T = --------- + Tlo
//!         A
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ThermistorModel;

/// Affine fit of ln(resistance) against temperature offset from `t_lo`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogLinear {
    /// Slope of ln(R) per °C (negative for NTC parts)
    pub a: f32,
    /// ln(R) at `t_lo`
    pub b: f32,
    /// Lower anchor of the fit in Celsius
    pub t_lo: f32,
}

impl LogLinear {
    /// Create a log-linear fit
    pub const fn new(a: f32, b: f32, t_lo: f32) -> Self {
        Self { a, b, t_lo }
    }

    /// Fit through two (ohms, °C) points
    pub fn from_two_points(r1: f32, t1: f32, r2: f32, t2: f32) -> Self {
        let ln_r1 = libm::logf(r1);
        let ln_r2 = libm::logf(r2);
        let a = (ln_r2 - ln_r1) / (t2 - t1);
        Self { a, b: ln_r1, t_lo: t1 }
    }
}

impl ThermistorModel for LogLinear {
    fn temperature(&self, ohms: f32) -> f32 {
        let ln_r = libm::logf(ohms);
        ((ln_r - self.b) / self.a) + self.t_lo
    }

    fn resistance(&self, celsius: f32) -> f32 {
        libm::expf(((celsius - self.t_lo) * self.a) + self.b)
    }
}
