//! Temperature scale constants

/// Offset between the Kelvin and Celsius scales (K).
///
/// Exact by definition of the Celsius scale: 0 °C = 273.15 K.
///
/// Source: SI Brochure, 9th edition (2019)
pub const KELVIN_OFFSET: f32 = 273.15;

/// Absolute zero in Celsius (°C).
///
/// Any model output at or below this value is outside the physical domain.
pub const ABSOLUTE_ZERO_CELSIUS: f32 = -KELVIN_OFFSET;

/// Nominal reference temperature for NTC datasheets (K).
///
/// Manufacturers quote R25 and Beta against 25 °C.
pub const NTC_REFERENCE_KELVIN: f32 = 298.15;
