//! Conversion engine
//!
//! ## Forward path (ADC code -> °C)
//!
//! ```text
//! code ──► Vout = V·code / adc_range
//!      ──► R_T  (divider, per wiring schema)
//!      ──► T    (model, per characterization)
//! ```
//!
//! ## Inverse path (°C -> ADC code)
//!
//! ```text
//! T ──► R_T  (closed-form model inverse)
//!   ──► Vout (divider, per wiring schema)
//!   ──► code = floor(Vout·adc_range / V)
//! ```
//!
//! ## Domain checks
//!
//! The raw formulas divide by zero at the rails and take logarithms of the
//! computed resistance. Instead of letting infinities and NaN flow out, every
//! stage is checked:
//!
//! - codes above `adc_range` -> [`ConversionError::AdcOutOfRange`]
//! - codes `0` and `adc_range` -> [`ConversionError::DividerSaturated`]
//! - resistances that are not finite and positive -> [`ConversionError::ResistanceOutOfDomain`]
//! - temperatures that are not finite or not above absolute zero -> [`ConversionError::TemperatureOutOfDomain`]

use crate::{
    constants::physics::ABSOLUTE_ZERO_CELSIUS,
    errors::{ConversionError, ConversionResult},
    models::ThermistorModel,
    profile::SensorProfile,
};

/// Converts between ADC codes and temperatures for one profile
///
/// Borrows the profile; conversions never modify it.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    profile: &'a SensorProfile,
}

impl<'a> ConversionEngine<'a> {
    /// Engine over a validated profile
    pub fn new(profile: &'a SensorProfile) -> ConversionResult<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// Profile in use
    pub fn profile(&self) -> &'a SensorProfile {
        self.profile
    }

    /// Temperature in Celsius for a raw ADC code
    pub fn temperature_from_adc(&self, code: u32) -> ConversionResult<f32> {
        let ohms = self.resistance_from_adc(code)?;
        self.temperature_from_resistance(ohms)
    }

    /// Expected ADC code at a temperature in Celsius
    pub fn adc_from_temperature(&self, celsius: f32) -> ConversionResult<u32> {
        let ohms = self.resistance_from_temperature(celsius)?;
        self.adc_from_resistance(ohms)
    }

    /// Divider output voltage for a raw ADC code
    pub fn vout_from_adc(&self, code: u32) -> ConversionResult<f32> {
        let max = self.profile.adc_range;
        if code > max {
            return Err(ConversionError::AdcOutOfRange { code, max });
        }
        Ok((self.profile.v * code as f32) / max as f32)
    }

    /// Thermistor resistance for a raw ADC code
    pub fn resistance_from_adc(&self, code: u32) -> ConversionResult<f32> {
        let vout = self.vout_from_adc(code)?;
        if code == 0 || code == self.profile.adc_range {
            return Err(ConversionError::DividerSaturated { code });
        }

        let p = self.profile;
        check_resistance(p.schema.resistance_from_vout(vout, p.v, p.r_f))
    }

    /// Temperature in Celsius at a thermistor resistance
    pub fn temperature_from_resistance(&self, ohms: f32) -> ConversionResult<f32> {
        let ohms = check_resistance(ohms)?;
        check_temperature(self.profile.parameters.temperature(ohms))
    }

    /// Thermistor resistance at a temperature in Celsius
    pub fn resistance_from_temperature(&self, celsius: f32) -> ConversionResult<f32> {
        let celsius = check_temperature(celsius)?;
        check_resistance(self.profile.parameters.resistance(celsius))
    }

    /// ADC code the divider produces at a thermistor resistance
    ///
    /// Truncates toward zero.
    pub fn adc_from_resistance(&self, ohms: f32) -> ConversionResult<u32> {
        let ohms = check_resistance(ohms)?;
        let p = self.profile;

        let vout = p.schema.vout_from_resistance(ohms, p.v, p.r_f);
        let code = (vout * p.adc_range as f32) / p.v;

        // Rounding can land a hair past full scale for very large R_T
        Ok((code as u32).min(p.adc_range))
    }
}

fn check_resistance(ohms: f32) -> ConversionResult<f32> {
    if ohms.is_finite() && ohms > 0.0 {
        Ok(ohms)
    } else {
        Err(ConversionError::ResistanceOutOfDomain { ohms })
    }
}

fn check_temperature(celsius: f32) -> ConversionResult<f32> {
    if celsius.is_finite() && celsius > ABSOLUTE_ZERO_CELSIUS {
        Ok(celsius)
    } else {
        Err(ConversionError::TemperatureOutOfDomain { celsius })
    }
}
