//! Thermistor Characterization Models
//!
//! ## Overview
//!
//! A model maps thermistor resistance to temperature and back. Three
//! characterizations are supported, each with a closed-form inverse:
//!
//! ```text
//! Model                 Forward (R -> T)                    Inverse (T -> R)
//! --------------------  ----------------------------------  ---------------------------
//! Log-linear            T = (ln R - B)/A + Tlo              R = exp((T - Tlo)·A + B)
//! Steinhart-Hart A/B/C  1/T = A + B·ln R + C·ln³R           Cardano on the depressed cubic
//! Beta/r                T = Beta / ln(R / r)                R = r·exp(Beta / T)
//! ```
//!
//! The log-linear fit works in Celsius. Steinhart-Hart and Beta/r work in
//! Kelvin internally; the trait boundary is always Celsius.
//!
//! ## Domain
//!
//! Models are raw arithmetic. A resistance of zero, a Beta model evaluated at
//! `R == r` or a Steinhart-Hart denominator of zero produce IEEE infinities or
//! NaN. [`ConversionEngine`](crate::ConversionEngine) checks every model output
//! and turns those into [`ConversionError`](crate::ConversionError)s.
//!
//! ## Calibration
//!
//! Coefficient derivations move between parameterizations:
//!
//! ```rust
//! use thermsense_core::models::{BetaR, SteinhartHart};
//!
//! let beta = BetaR::new(3950.0, 10_000.0, 298.15);
//! let abc = SteinhartHart::from_beta(&beta);
//! let back = BetaR::from_steinhart_hart(&abc, beta.r0, beta.t0);
//!
//! assert!((back.beta - beta.beta).abs() < 0.01);
//! ```

mod beta;
mod log_linear;
mod steinhart_hart;

pub use beta::BetaR;
pub use log_linear::LogLinear;
pub use steinhart_hart::SteinhartHart;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resistance/temperature characterization of a thermistor
pub trait ThermistorModel {
    /// Temperature in Celsius at the given resistance in ohms
    fn temperature(&self, ohms: f32) -> f32;

    /// Resistance in ohms at the given temperature in Celsius
    fn resistance(&self, celsius: f32) -> f32;
}

/// One measured (resistance, temperature) pair used for curve fitting
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationPoint {
    /// Measured thermistor resistance in ohms
    pub resistance_ohms: f32,
    /// Reference temperature in Kelvin
    pub temperature_kelvin: f32,
}

impl CalibrationPoint {
    /// Create a calibration point
    pub const fn new(resistance_ohms: f32, temperature_kelvin: f32) -> Self {
        Self { resistance_ohms, temperature_kelvin }
    }
}
