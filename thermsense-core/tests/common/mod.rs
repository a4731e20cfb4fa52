//! Shared fixtures for integration tests
//!
//! Profiles cover every characterization on both divider topologies, all on a
//! 3.3 V supply with a 10k fixed resistor and a 12-bit ADC.

#![allow(dead_code)]

use thermsense_core::{
    BetaR, LogLinear, MethodParameters, SensorProfile, SteinhartHart, WiringSchema,
};

pub const SUPPLY_V: f32 = 3.3;
pub const FIXED_OHMS: f32 = 10_000.0;
pub const ADC_RANGE: u32 = 4096;

/// Published coefficients for a generic 10k NTC
pub const NTC_10K_ABC: SteinhartHart = SteinhartHart::new(1.009_249_5e-3, 2.378_405_4e-4, 2.019_202_7e-7);

pub const SCHEMAS: [WiringSchema; 2] = [
    WiringSchema::DividerFixedOnTop,
    WiringSchema::DividerThermistorOnTop,
];

pub fn log_linear() -> MethodParameters {
    MethodParameters::LogLinearApprox(LogLinear::new(-0.04, 10_000.0f32.ln(), 25.0))
}

pub fn steinhart_hart() -> MethodParameters {
    MethodParameters::SteinhartHartAbc(NTC_10K_ABC)
}

pub fn beta_3950() -> MethodParameters {
    MethodParameters::SteinhartHartBetaR(BetaR::new(3950.0, 10_000.0, 298.15))
}

pub fn all_methods() -> [MethodParameters; 3] {
    [log_linear(), steinhart_hart(), beta_3950()]
}

pub fn profile(schema: WiringSchema, parameters: MethodParameters) -> SensorProfile {
    SensorProfile::new(schema, parameters, SUPPLY_V, FIXED_OHMS, ADC_RANGE)
        .expect("fixture profile must be valid")
}

/// Every method on every schema
pub fn all_profiles() -> Vec<SensorProfile> {
    let mut profiles = Vec::new();
    for schema in SCHEMAS {
        for parameters in all_methods() {
            profiles.push(profile(schema, parameters));
        }
    }
    profiles
}

macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}
