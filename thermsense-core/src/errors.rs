//! Error Types for Thermistor Conversion
//!
//! ## Design
//!
//! The error type is built for the same environment as the engine itself:
//!
//! 1. **Small Size**: every variant carries at most a couple of scalars, so
//!    the error is cheap to return from the sampling loop.
//!
//! 2. **No Heap Allocation**: reasons are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: errors implement `Copy` and can be stored or
//!    forwarded without ownership juggling.
//!
//! ## Error Categories
//!
//! ### Store State
//! - `Uninitialized`: a conversion was requested before any profile was adopted
//! - `ProfileUnavailable`: the profile-retrieval collaborator reported failure
//! - `InvalidProfile`: a profile (or its binary record) breaks an invariant
//!
//! ### Arithmetic Domain
//! - `AdcOutOfRange`: code above the profile's full-scale count
//! - `DividerSaturated`: code on a rail, where the divider has no finite resistance
//! - `ResistanceOutOfDomain`: resistance not finite and positive
//! - `TemperatureOutOfDomain`: temperature not finite or below absolute zero
//!
//! ### Calibration
//! - `DegenerateCalibration`: three calibration points do not determine a model
//!
//! ## Handling Strategy
//!
//! ```rust
//! use thermsense_core::{ConversionEngine, ConversionError, SensorProfile};
//!
//! fn read_celsius(engine: &ConversionEngine<'_>, code: u32) -> Option<f32> {
//!     match engine.temperature_from_adc(code) {
//!         Ok(celsius) => Some(celsius),
//!         Err(ConversionError::DividerSaturated { .. }) => {
//!             // Thermistor open or shorted
//!             None
//!         }
//!         Err(_) => None,
//!     }
//! }
//!
//! let profile = SensorProfile::default();
//! let engine = ConversionEngine::new(&profile).unwrap();
//! assert!(read_celsius(&engine, 0).is_none());
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Status reported by a profile-retrieval collaborator
///
/// The store only distinguishes success from failure; the variants exist so
/// diagnostics can say which way the lookup went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileStatus {
    /// No entry stored under the requested tag
    NotFound,
    /// Entry exists but its signature differs from the requested one
    SignatureMismatch,
    /// Entry does not have the expected byte length
    LengthMismatch,
    /// Backing storage failed
    StorageFault,
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotFound => "entry not found",
            Self::SignatureMismatch => "signature mismatch",
            Self::LengthMismatch => "length mismatch",
            Self::StorageFault => "storage fault",
        };
        f.write_str(text)
    }
}

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// No active sensor profile
    #[error("No active sensor profile")]
    Uninitialized,

    /// ADC code above the profile's full-scale count
    #[error("ADC code {code} outside [0, {max}]")]
    AdcOutOfRange {
        /// Code supplied by the caller
        code: u32,
        /// Full-scale code count of the active profile
        max: u32,
    },

    /// ADC code sits on a supply rail, the thermistor reads as open or shorted
    #[error("ADC code {code} sits on a divider rail")]
    DividerSaturated {
        /// Code supplied by the caller
        code: u32,
    },

    /// Resistance is not finite and positive
    #[error("Resistance {ohms} ohm outside model domain")]
    ResistanceOutOfDomain {
        /// Offending resistance in ohms
        ohms: f32,
    },

    /// Temperature is not finite or lies at or below absolute zero
    #[error("Temperature {celsius} C outside model domain")]
    TemperatureOutOfDomain {
        /// Offending temperature in Celsius
        celsius: f32,
    },

    /// Profile breaks an invariant
    #[error("Invalid profile: {reason}")]
    InvalidProfile {
        /// Which invariant failed
        reason: &'static str,
    },

    /// Profile-retrieval collaborator reported failure
    #[error("Profile unavailable: {status}")]
    ProfileUnavailable {
        /// Status returned by the collaborator
        status: ProfileStatus,
    },

    /// Calibration points cannot determine a Steinhart-Hart triple
    #[error("Degenerate calibration: {reason}")]
    DegenerateCalibration {
        /// Why the fit is unsolvable
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Uninitialized =>
                defmt::write!(fmt, "No active profile"),
            Self::AdcOutOfRange { code, max } =>
                defmt::write!(fmt, "ADC {} outside [0, {}]", code, max),
            Self::DividerSaturated { code } =>
                defmt::write!(fmt, "ADC {} on rail", code),
            Self::ResistanceOutOfDomain { ohms } =>
                defmt::write!(fmt, "Resistance {} out of domain", ohms),
            Self::TemperatureOutOfDomain { celsius } =>
                defmt::write!(fmt, "Temperature {} out of domain", celsius),
            Self::InvalidProfile { reason } =>
                defmt::write!(fmt, "Invalid profile: {}", reason),
            Self::ProfileUnavailable { status } =>
                defmt::write!(fmt, "Profile unavailable: {}", status),
            Self::DegenerateCalibration { reason } =>
                defmt::write!(fmt, "Degenerate calibration: {}", reason),
        }
    }
}
