//! Thermistor conversion engine for thermsense
//!
//! Converts raw ADC codes sampled from a voltage-divider thermistor network
//! into temperatures, and maps target temperatures back to the ADC code the
//! divider would produce.
//!
//! Key constraints:
//! - Runs on microcontrollers without an allocator (`no_std`)
//! - No heap allocation, no global state
//! - Every enum dispatch is exhaustive
//!
//! ```
//! use thermsense_core::{ConversionEngine, SensorProfile};
//!
//! let profile = SensorProfile::ntc_10k_beta_3950();
//! let engine = ConversionEngine::new(&profile)?;
//!
//! let code = engine.adc_from_temperature(25.0)?;
//! let celsius = engine.temperature_from_adc(code)?;
//! assert!((celsius - 25.0).abs() < 0.05);
//! # Ok::<(), thermsense_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod divider;
pub mod engine;
pub mod errors;
pub mod models;
pub mod profile;
pub mod source;
pub mod store;
pub mod traits;
pub mod units;

// Public API
pub use divider::WiringSchema;
pub use engine::ConversionEngine;
pub use errors::{ConversionError, ConversionResult, ProfileStatus};
pub use models::{BetaR, CalibrationPoint, LogLinear, SteinhartHart, ThermistorModel};
pub use profile::{CharacterizationMethod, MethodParameters, SensorProfile};
pub use source::{DiagnosticLog, MemoryProfileSource};
pub use store::{ProfileSelection, ProfileStore};
#[cfg(feature = "std")]
pub use store::SharedProfileStore;
pub use traits::{DiagnosticSink, ProfileSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
