//! Stored profile record constants
//!
//! A default profile is fetched from the profile-retrieval collaborator by
//! tag and signature. The signature doubles as the record version: a layout
//! change bumps the low byte, so stale records are refused by the source.

/// Tag under which the temperature profile is stored.
pub const PROFILE_TAG: &str = "TEMP";

/// Record format version.
pub const PROFILE_VERSION: u8 = 1;

/// Record signature: ASCII `"TMP"` followed by the format version.
pub const PROFILE_SIGNATURE: u32 = u32::from_be_bytes([b'T', b'M', b'P', PROFILE_VERSION]);

/// Exact byte length of an encoded profile record.
///
/// Header (schema, method, 2 reserved) + V + R_F + adc_range + 4 coefficients.
pub const PROFILE_RECORD_LEN: usize = 4 + 4 + 4 + 4 + 4 * 4;

/// Diagnostic reply emitted when the default profile cannot be loaded.
pub const PROFILE_FAILED_DIAGNOSTIC: &str = "TEMP FAILED\r\n";

/// Full-scale code count of a 12-bit converter.
pub const ADC_12BIT_RANGE: u32 = 4096;
