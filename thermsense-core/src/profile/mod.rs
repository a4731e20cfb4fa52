//! Sensor profiles
//!
//! A [`SensorProfile`] is everything the engine needs to know about one
//! thermistor channel: how the divider is wired, how it is excited, how the
//! ADC scales, and which characterization describes the part.
//!
//! Profiles are plain `Copy` values. They are validated once when built and
//! never change afterwards; a different profile means a new value.
//!
//! ```rust
//! use thermsense_core::{SensorProfile, WiringSchema, MethodParameters, BetaR};
//!
//! let profile = SensorProfile::new(
//!     WiringSchema::DividerThermistorOnTop,
//!     MethodParameters::SteinhartHartBetaR(BetaR::new(3435.0, 10_000.0, 298.15)),
//!     3.3,
//!     10_000.0,
//!     4096,
//! )?;
//! assert_eq!(profile.adc_range, 4096);
//! # Ok::<(), thermsense_core::ConversionError>(())
//! ```

pub mod record;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::physics::NTC_REFERENCE_KELVIN,
    constants::profile::ADC_12BIT_RANGE,
    divider::WiringSchema,
    errors::{ConversionError, ConversionResult},
    models::{BetaR, LogLinear, SteinhartHart, ThermistorModel},
};

/// Characterization method of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharacterizationMethod {
    /// ln(R) affine in temperature
    LogLinearApprox,
    /// Steinhart-Hart with A, B and C coefficients
    SteinhartHartAbc,
    /// Steinhart-Hart Beta/reference-resistance form
    SteinhartHartBetaR,
}

impl CharacterizationMethod {
    pub(crate) fn to_raw(self) -> u8 {
        match self {
            Self::LogLinearApprox => 0,
            Self::SteinhartHartAbc => 1,
            Self::SteinhartHartBetaR => 2,
        }
    }
}

/// Method-specific coefficients; the variant is the method
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MethodParameters {
    /// Log-linear approximation
    LogLinearApprox(LogLinear),
    /// Steinhart-Hart A/B/C
    SteinhartHartAbc(SteinhartHart),
    /// Steinhart-Hart Beta/r
    SteinhartHartBetaR(BetaR),
}

impl MethodParameters {
    /// Which characterization these coefficients belong to
    pub fn method(&self) -> CharacterizationMethod {
        match self {
            Self::LogLinearApprox(_) => CharacterizationMethod::LogLinearApprox,
            Self::SteinhartHartAbc(_) => CharacterizationMethod::SteinhartHartAbc,
            Self::SteinhartHartBetaR(_) => CharacterizationMethod::SteinhartHartBetaR,
        }
    }

    fn validate(&self) -> ConversionResult<()> {
        match self {
            Self::LogLinearApprox(fit) => {
                require(all_finite(&[fit.a, fit.b, fit.t_lo]), "log-linear coefficients must be finite")?;
                require(fit.a != 0.0, "log-linear slope must be non-zero")
            }
            Self::SteinhartHartAbc(abc) => {
                require(all_finite(&[abc.a, abc.b, abc.c]), "Steinhart-Hart coefficients must be finite")?;
                require(abc.b != 0.0 || abc.c != 0.0, "Steinhart-Hart B and C cannot both be zero")
            }
            Self::SteinhartHartBetaR(beta) => {
                require(all_finite(&[beta.beta, beta.r, beta.r0, beta.t0]), "Beta/r coefficients must be finite")?;
                require(beta.beta != 0.0, "Beta must be non-zero")?;
                require(beta.r > 0.0, "reference resistance must be positive")?;
                require(beta.r0 > 0.0, "nominal resistance must be positive")?;
                require(beta.t0 > 0.0, "nominal temperature must be above absolute zero")
            }
        }
    }
}

impl ThermistorModel for MethodParameters {
    fn temperature(&self, ohms: f32) -> f32 {
        match self {
            Self::LogLinearApprox(fit) => fit.temperature(ohms),
            Self::SteinhartHartAbc(abc) => abc.temperature(ohms),
            Self::SteinhartHartBetaR(beta) => beta.temperature(ohms),
        }
    }

    fn resistance(&self, celsius: f32) -> f32 {
        match self {
            Self::LogLinearApprox(fit) => fit.resistance(celsius),
            Self::SteinhartHartAbc(abc) => abc.resistance(celsius),
            Self::SteinhartHartBetaR(beta) => beta.resistance(celsius),
        }
    }
}

/// Active characterization of one thermistor channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorProfile {
    /// Divider topology
    pub schema: WiringSchema,
    /// Characterization and its coefficients
    pub parameters: MethodParameters,
    /// Excitation voltage (V)
    pub v: f32,
    /// Fixed divider resistor (ohms)
    pub r_f: f32,
    /// Full-scale ADC code count
    pub adc_range: u32,
}

impl Default for SensorProfile {
    fn default() -> Self {
        Self::ntc_10k_beta_3950()
    }
}

impl SensorProfile {
    /// Create a validated profile
    pub fn new(
        schema: WiringSchema,
        parameters: MethodParameters,
        v: f32,
        r_f: f32,
        adc_range: u32,
    ) -> ConversionResult<Self> {
        let profile = Self { schema, parameters, v, r_f, adc_range };
        profile.validate()?;
        Ok(profile)
    }

    /// Generic 10k/Beta-3950 NTC below a 10k resistor on a 3.3 V, 12-bit ADC
    pub fn ntc_10k_beta_3950() -> Self {
        Self {
            schema: WiringSchema::DividerFixedOnTop,
            parameters: MethodParameters::SteinhartHartBetaR(
                BetaR::new(3950.0, 10_000.0, NTC_REFERENCE_KELVIN),
            ),
            v: 3.3,
            r_f: 10_000.0,
            adc_range: ADC_12BIT_RANGE,
        }
    }

    /// 10k NTC with published Steinhart-Hart coefficients, thermistor on top
    pub fn ntc_10k_steinhart_hart() -> Self {
        Self {
            schema: WiringSchema::DividerThermistorOnTop,
            parameters: MethodParameters::SteinhartHartAbc(
                SteinhartHart::new(1.009_249_5e-3, 2.378_405_4e-4, 2.019_202_7e-7),
            ),
            v: 3.3,
            r_f: 10_000.0,
            adc_range: ADC_12BIT_RANGE,
        }
    }

    /// Characterization method in use
    pub fn method(&self) -> CharacterizationMethod {
        self.parameters.method()
    }

    /// Check every profile invariant
    pub fn validate(&self) -> ConversionResult<()> {
        require(self.v.is_finite() && self.v > 0.0, "excitation voltage must be positive")?;
        require(self.r_f.is_finite() && self.r_f > 0.0, "fixed resistor must be positive")?;
        require(self.adc_range > 0, "ADC range must be non-zero")?;
        self.parameters.validate()
    }
}

fn require(condition: bool, reason: &'static str) -> ConversionResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ConversionError::InvalidProfile { reason })
    }
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|value| value.is_finite())
}
