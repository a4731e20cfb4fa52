//! Steinhart-Hart A/B/C model
//!
//! ```text
//! 1/T = A + B·ln(R) + C·ln(R)³        (T in Kelvin)
//! ```
//!
//! ## Inverse
//!
//! With `L = ln(R)` the model is the depressed cubic
//!
//! ```text
//! C·L³ + B·L + (A - 1/T) = 0
//! ```
//!
//! Dividing by C and applying Cardano with
//!
//! ```text
//! x = (A - 1/T) / C
//! p = B / (3C)
//! y = sqrt(p³ + x²/4)
//! L = cbrt(y - x/2) - cbrt(y + x/2)
//! ```
//!
//! `p` is `B / (3C)`, not a constant `1/3`: the constant form does not invert
//! the forward model and breaks the ADC round trip.
//!
//! For NTC coefficients with B/C > 0, `p³ + x²/4 > 0` and the cubic has a
//! single real root. Fits with a small negative C make the discriminant
//! negative; the cubic then has three real roots, taken in trigonometric form
//!
//! ```text
//! L_k = 2·sqrt(-p)·cos(acos(x / (2p·sqrt(-p))) / 3 - 2πk/3)
//! ```
//!
//! and the root nearest the linear estimate `(1/T - A) / B` is the physical
//! one. When C is exactly zero (a triple derived from Beta/r) the cubic
//! degenerates to `L = (1/T - A) / B`. The solve runs in f64.
//!
//! ## Three-point fit
//!
//! ```text
//! L_i = ln(R_i),  Y_i = 1/T_i
//! g1 = (Y1 - Y0) / (L1 - L0)
//! g2 = (Y2 - Y0) / (L2 - L0)
//! C  = (g2 - g1) / (L2 - L1) / (L0 + L1 + L2)
//! B  = g1 - C·(L0² + L0·L1 + L1²)
//! A  = Y0 - L0·(B + C·L0²)
//! ```
//!
//! The fit subtracts nearly equal reciprocals, so it runs in f64 and only the
//! result is narrowed to f32.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BetaR, CalibrationPoint, ThermistorModel};
use crate::{
    errors::{ConversionError, ConversionResult},
    units::{celsius_to_kelvin, kelvin_to_celsius},
};

/// Steinhart-Hart coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteinhartHart {
    /// Constant term (1/K)
    pub a: f32,
    /// Linear ln(R) term (1/K)
    pub b: f32,
    /// Cubic ln(R) term (1/K)
    pub c: f32,
}

impl SteinhartHart {
    /// Create from known coefficients
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Solve the exact three-point system
    pub fn from_points(points: &[CalibrationPoint; 3]) -> ConversionResult<Self> {
        let mut l = [0.0f64; 3];
        let mut y = [0.0f64; 3];

        for (i, point) in points.iter().enumerate() {
            let ohms = point.resistance_ohms as f64;
            let kelvin = point.temperature_kelvin as f64;

            if !(ohms.is_finite() && ohms > 0.0) {
                return Err(ConversionError::DegenerateCalibration {
                    reason: "resistance must be finite and positive",
                });
            }
            if !(kelvin.is_finite() && kelvin > 0.0) {
                return Err(ConversionError::DegenerateCalibration {
                    reason: "temperature must be above absolute zero",
                });
            }

            l[i] = libm::log(ohms);
            y[i] = 1.0 / kelvin;
        }

        if l[0] == l[1] || l[0] == l[2] || l[1] == l[2] {
            return Err(ConversionError::DegenerateCalibration {
                reason: "resistances must be distinct",
            });
        }

        let l_sum = l[0] + l[1] + l[2];
        if l_sum == 0.0 {
            return Err(ConversionError::DegenerateCalibration {
                reason: "ln(R) terms cancel",
            });
        }

        let g1 = (y[1] - y[0]) / (l[1] - l[0]);
        let g2 = (y[2] - y[0]) / (l[2] - l[0]);
        let l0_2 = l[0] * l[0];

        let c = ((g2 - g1) / (l[2] - l[1])) * (1.0 / l_sum);
        let b = g1 - (c * (l0_2 + (l[0] * l[1]) + (l[1] * l[1])));
        let a = y[0] - (l[0] * (b + (c * l0_2)));

        log_debug!("Steinhart-Hart fit: A={} B={} C={}", a, b, c);

        Ok(Self { a: a as f32, b: b as f32, c: c as f32 })
    }

    /// Equivalent triple for a Beta/r model (`c` is exactly zero)
    ///
    /// `A = 1/t0 - B·ln(r0)`. Both terms of A are reciprocal Kelvin; using
    /// `t0` itself instead of `1/t0` yields a triple that reads about 0.003 K.
    pub fn from_beta(model: &BetaR) -> Self {
        let b = 1.0 / model.beta;
        let a = (1.0 / model.t0) - (b * libm::logf(model.r0));
        log_debug!("A/B/C from Beta/r: A={} B={}", a, b);
        Self { a, b, c: 0.0 }
    }

    /// ln(R) at the given temperature in Kelvin
    fn ln_resistance(&self, kelvin: f32) -> f32 {
        let (a, b, c) = (self.a as f64, self.b as f64, self.c as f64);
        let inv_k = 1.0 / kelvin as f64;
        let linear = (inv_k - a) / b;

        if c == 0.0 {
            return linear as f32;
        }

        let x = (a - inv_k) / c;
        let p = b / (3.0 * c);
        let x_half = x / 2.0;
        let discriminant = (p * p * p) + (x_half * x_half);

        if discriminant >= 0.0 {
            let y = libm::sqrt(discriminant);
            return (libm::cbrt(y - x_half) - libm::cbrt(y + x_half)) as f32;
        }

        // Three real roots, p < 0
        let scale = 2.0 * libm::sqrt(-p);
        let cos_arg = (x_half / (p * libm::sqrt(-p))).clamp(-1.0, 1.0);
        let theta = libm::acos(cos_arg) / 3.0;

        let mut nearest = scale * libm::cos(theta);
        for k in 1..3 {
            let root = scale * libm::cos(theta - (2.0 * core::f64::consts::PI * k as f64 / 3.0));
            if libm::fabs(root - linear) < libm::fabs(nearest - linear) {
                nearest = root;
            }
        }
        nearest as f32
    }
}

impl ThermistorModel for SteinhartHart {
    fn temperature(&self, ohms: f32) -> f32 {
        let ln_r = libm::logf(ohms);
        let ln_r_3 = ln_r * ln_r * ln_r;

        let den = self.a + (self.b * ln_r) + (self.c * ln_r_3);
        kelvin_to_celsius(1.0 / den)
    }

    fn resistance(&self, celsius: f32) -> f32 {
        libm::expf(self.ln_resistance(celsius_to_kelvin(celsius)))
    }
}
