//! Parameter store
//!
//! Holds the active [`SensorProfile`]. The store starts empty; conversions
//! against an empty store fail with [`ConversionError::Uninitialized`].
//!
//! ## Initialization
//!
//! ```text
//! Custom(profile) ──► validate ──► adopt
//!
//! Default ──► get_entry("TEMP", signature) ──► decode + validate ──► adopt
//!                     │                              │
//!                     └──────── failure ─────────────┴──► reply "TEMP FAILED\r\n"
//!                                                         previous profile kept
//! ```
//!
//! Re-initializing replaces the active profile. A failed re-initialization
//! leaves whatever was active before untouched.
//!
//! ## Example
//!
//! ```rust
//! use thermsense_core::{
//!     DiagnosticLog, MemoryProfileSource, ProfileSelection, ProfileStore, SensorProfile,
//! };
//!
//! let mut source = MemoryProfileSource::with_profile(&SensorProfile::ntc_10k_steinhart_hart());
//! let mut replies = DiagnosticLog::new();
//! let mut store = ProfileStore::new();
//!
//! store.initialize(ProfileSelection::Default, &mut source, &mut replies)?;
//! let celsius = store.temperature_from_adc(2048)?;
//! assert!(celsius > 20.0 && celsius < 30.0);
//! # Ok::<(), thermsense_core::ConversionError>(())
//! ```

use crate::{
    constants::profile::{PROFILE_FAILED_DIAGNOSTIC, PROFILE_RECORD_LEN, PROFILE_SIGNATURE, PROFILE_TAG},
    engine::ConversionEngine,
    errors::{ConversionError, ConversionResult, ProfileStatus},
    profile::SensorProfile,
    traits::{DiagnosticSink, ProfileSource},
};

/// Which profile to adopt on initialization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileSelection {
    /// Load the stored default record
    Default,
    /// Use this profile
    Custom(SensorProfile),
}

/// Holder of the single active profile
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    active: Option<SensorProfile>,
}

impl ProfileStore {
    /// Empty store
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Store with `profile` already active
    pub fn with_profile(profile: SensorProfile) -> ConversionResult<Self> {
        let mut store = Self::new();
        store.adopt(profile)?;
        Ok(store)
    }

    /// Adopt a custom profile or load the stored default
    ///
    /// Loading failures emit the fixed diagnostic once through `sink` and
    /// keep the previous profile. An invalid custom profile is refused
    /// without a diagnostic.
    pub fn initialize<S, D>(
        &mut self,
        selection: ProfileSelection,
        source: &mut S,
        sink: &mut D,
    ) -> ConversionResult<&SensorProfile>
    where
        S: ProfileSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        let profile = match selection {
            ProfileSelection::Custom(profile) => profile,
            ProfileSelection::Default => match load_default(source) {
                Ok(profile) => profile,
                Err(err) => {
                    log_warn!("Default temperature profile unavailable: {}", err);
                    sink.reply(PROFILE_FAILED_DIAGNOSTIC);
                    return Err(err);
                }
            },
        };

        self.adopt(profile)?;
        self.active()
    }

    /// Validate and make `profile` active
    pub fn adopt(&mut self, profile: SensorProfile) -> ConversionResult<()> {
        profile.validate()?;
        log_info!(
            "Temperature profile active: {:?} / {:?}",
            profile.schema,
            profile.method()
        );
        self.active = Some(profile);
        Ok(())
    }

    /// Active profile
    pub fn active(&self) -> ConversionResult<&SensorProfile> {
        self.active.as_ref().ok_or(ConversionError::Uninitialized)
    }

    /// True once a profile has been adopted
    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Engine over the active profile
    pub fn engine(&self) -> ConversionResult<ConversionEngine<'_>> {
        ConversionEngine::new(self.active()?)
    }

    /// Temperature in Celsius for a raw ADC code
    pub fn temperature_from_adc(&self, code: u32) -> ConversionResult<f32> {
        self.engine()?.temperature_from_adc(code)
    }

    /// Expected ADC code at a temperature in Celsius
    pub fn adc_from_temperature(&self, celsius: f32) -> ConversionResult<u32> {
        self.engine()?.adc_from_temperature(celsius)
    }
}

fn load_default<S: ProfileSource + ?Sized>(source: &mut S) -> ConversionResult<SensorProfile> {
    let mut record = [0u8; PROFILE_RECORD_LEN];

    let len = source
        .get_entry(PROFILE_TAG, PROFILE_SIGNATURE, &mut record)
        .map_err(|status| ConversionError::ProfileUnavailable { status })?;

    if len != PROFILE_RECORD_LEN {
        return Err(ConversionError::ProfileUnavailable { status: ProfileStatus::LengthMismatch });
    }

    SensorProfile::from_record(&record)
}

/// Profile store shared between threads
///
/// Conversions take the read lock and may run concurrently. Initialization
/// takes the write lock, so no conversion observes a half-swapped profile.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct SharedProfileStore {
    inner: std::sync::RwLock<ProfileStore>,
}

#[cfg(feature = "std")]
impl SharedProfileStore {
    /// Empty shared store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a custom profile or load the stored default
    pub fn initialize<S, D>(
        &self,
        selection: ProfileSelection,
        source: &mut S,
        sink: &mut D,
    ) -> ConversionResult<SensorProfile>
    where
        S: ProfileSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        let mut store = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        store.initialize(selection, source, sink).copied()
    }

    /// Copy of the active profile
    pub fn active(&self) -> ConversionResult<SensorProfile> {
        self.read(|store| store.active().copied())
    }

    /// Temperature in Celsius for a raw ADC code
    pub fn temperature_from_adc(&self, code: u32) -> ConversionResult<f32> {
        self.read(|store| store.temperature_from_adc(code))
    }

    /// Expected ADC code at a temperature in Celsius
    pub fn adc_from_temperature(&self, celsius: f32) -> ConversionResult<u32> {
        self.read(|store| store.adc_from_temperature(celsius))
    }

    fn read<T>(&self, f: impl FnOnce(&ProfileStore) -> T) -> T {
        let store = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&store)
    }
}
