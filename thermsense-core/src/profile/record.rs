//! Binary profile record
//!
//! The profile-retrieval collaborator stores profiles as fixed-length,
//! little-endian records:
//!
//! ```text
//! ┌────────┬──────┬──────────────────────────────────────────────┐
//! │ Offset │ Size │ Field                                        │
//! ├────────┼──────┼──────────────────────────────────────────────┤
//! │ 0      │ 1    │ schema (0 = fixed on top, 1 = NTC on top)    │
//! │ 1      │ 1    │ method (0 = log-linear, 1 = A/B/C, 2 = Beta) │
//! │ 2      │ 2    │ reserved, zero                               │
//! │ 4      │ 4    │ V (f32)                                      │
//! │ 8      │ 4    │ R_F (f32)                                    │
//! │ 12     │ 4    │ adc_range (u32)                              │
//! │ 16     │ 16   │ coefficients (4 × f32)                       │
//! └────────┴──────┴──────────────────────────────────────────────┘
//!
//! log-linear: a, b, t_lo, 0
//! A/B/C:      a, b, c, 0
//! Beta/r:     beta, r, r0, t0
//! ```
//!
//! Decoding rejects unknown discriminants, so a corrupted record can never
//! select a method or schema that does not exist.

use super::{MethodParameters, SensorProfile};
use crate::{
    constants::profile::PROFILE_RECORD_LEN,
    divider::WiringSchema,
    errors::{ConversionError, ConversionResult},
    models::{BetaR, LogLinear, SteinhartHart},
};

const COEFFICIENTS_OFFSET: usize = 16;

impl SensorProfile {
    /// Encode into the fixed-length record layout
    pub fn to_record(&self) -> [u8; PROFILE_RECORD_LEN] {
        let mut record = [0u8; PROFILE_RECORD_LEN];

        record[0] = self.schema.to_raw();
        record[1] = self.method().to_raw();
        record[4..8].copy_from_slice(&self.v.to_le_bytes());
        record[8..12].copy_from_slice(&self.r_f.to_le_bytes());
        record[12..16].copy_from_slice(&self.adc_range.to_le_bytes());

        let coefficients = match self.parameters {
            MethodParameters::LogLinearApprox(fit) => [fit.a, fit.b, fit.t_lo, 0.0],
            MethodParameters::SteinhartHartAbc(abc) => [abc.a, abc.b, abc.c, 0.0],
            MethodParameters::SteinhartHartBetaR(beta) => [beta.beta, beta.r, beta.r0, beta.t0],
        };
        for (i, value) in coefficients.iter().enumerate() {
            let start = COEFFICIENTS_OFFSET + i * 4;
            record[start..start + 4].copy_from_slice(&value.to_le_bytes());
        }

        record
    }

    /// Decode and validate a record
    pub fn from_record(bytes: &[u8]) -> ConversionResult<Self> {
        if bytes.len() != PROFILE_RECORD_LEN {
            return Err(ConversionError::InvalidProfile { reason: "record length mismatch" });
        }

        let schema = WiringSchema::from_raw(bytes[0])
            .ok_or(ConversionError::InvalidProfile { reason: "unknown wiring schema" })?;

        let k = [
            read_f32(bytes, COEFFICIENTS_OFFSET),
            read_f32(bytes, COEFFICIENTS_OFFSET + 4),
            read_f32(bytes, COEFFICIENTS_OFFSET + 8),
            read_f32(bytes, COEFFICIENTS_OFFSET + 12),
        ];
        let parameters = match bytes[1] {
            0 => MethodParameters::LogLinearApprox(LogLinear::new(k[0], k[1], k[2])),
            1 => MethodParameters::SteinhartHartAbc(SteinhartHart::new(k[0], k[1], k[2])),
            2 => MethodParameters::SteinhartHartBetaR(BetaR { beta: k[0], r: k[1], r0: k[2], t0: k[3] }),
            _ => return Err(ConversionError::InvalidProfile { reason: "unknown characterization method" }),
        };

        Self::new(
            schema,
            parameters,
            read_f32(bytes, 4),
            read_f32(bytes, 8),
            read_u32(bytes, 12),
        )
    }
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_bits(read_u32(bytes, offset))
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_record_layout() {
        let profile = SensorProfile::ntc_10k_beta_3950();
        let record = profile.to_record();

        assert_eq!(record[0], 0);
        assert_eq!(record[1], 2);
        assert_eq!(&record[2..4], &[0, 0]);
        assert_eq!(read_u32(&record, 12), 4096);
        assert_eq!(read_f32(&record, 16), 3950.0);
        assert_eq!(read_f32(&record, 28), 298.15);

        assert_eq!(SensorProfile::from_record(&record), Ok(profile));
    }

    #[test]
    fn abc_record_decodes() {
        let profile = SensorProfile::ntc_10k_steinhart_hart();
        assert_eq!(SensorProfile::from_record(&profile.to_record()), Ok(profile));
    }

    #[test]
    fn unknown_discriminants_are_rejected() {
        let mut record = SensorProfile::default().to_record();
        record[1] = 7;
        assert_eq!(
            SensorProfile::from_record(&record),
            Err(ConversionError::InvalidProfile { reason: "unknown characterization method" })
        );

        let mut record = SensorProfile::default().to_record();
        record[0] = 2;
        assert_eq!(
            SensorProfile::from_record(&record),
            Err(ConversionError::InvalidProfile { reason: "unknown wiring schema" })
        );
    }

    #[test]
    fn truncated_record_is_rejected() {
        let record = SensorProfile::default().to_record();
        assert!(SensorProfile::from_record(&record[..PROFILE_RECORD_LEN - 1]).is_err());
    }

    #[test]
    fn record_with_zero_supply_is_rejected() {
        let mut record = SensorProfile::default().to_record();
        record[4..8].copy_from_slice(&0.0f32.to_le_bytes());
        assert!(matches!(
            SensorProfile::from_record(&record),
            Err(ConversionError::InvalidProfile { .. })
        ));
    }
}
