//! Integration tests for the parameter store
//!
//! Exercises initialization against in-memory and failing collaborators,
//! re-initialization, and profiles loaded from JSON configuration.

#[macro_use]
mod common;

use thermsense_core::{
    constants::profile::{PROFILE_FAILED_DIAGNOSTIC, PROFILE_SIGNATURE, PROFILE_TAG},
    ConversionError, DiagnosticLog, MemoryProfileSource, ProfileSelection, ProfileSource,
    ProfileStatus, ProfileStore, SensorProfile, WiringSchema,
};

use common::{log_linear, profile};

/// Source that fails every lookup and counts how often it was asked
struct CountingFailure {
    calls: usize,
}

impl ProfileSource for CountingFailure {
    fn get_entry(&mut self, _tag: &str, _signature: u32, _buffer: &mut [u8]) -> Result<usize, ProfileStatus> {
        self.calls += 1;
        Err(ProfileStatus::NotFound)
    }
}

#[test]
fn default_load_then_convert() {
    let stored = profile(WiringSchema::DividerThermistorOnTop, log_linear());
    let mut source = MemoryProfileSource::with_profile(&stored);
    let mut replies = DiagnosticLog::new();
    let mut store = ProfileStore::new();

    store.initialize(ProfileSelection::Default, &mut source, &mut replies).unwrap();

    let code = store.adc_from_temperature(25.0).unwrap();
    assert_within_tolerance!(store.temperature_from_adc(code).unwrap(), 25.0, 0.05);
    assert_eq!(replies.replies(), 0);
}

#[test]
fn failure_reported_exactly_once() {
    let previous = SensorProfile::ntc_10k_steinhart_hart();
    let mut store = ProfileStore::with_profile(previous).unwrap();
    let mut source = CountingFailure { calls: 0 };
    let mut replies = DiagnosticLog::new();

    let err = store
        .initialize(ProfileSelection::Default, &mut source, &mut replies)
        .unwrap_err();

    assert_eq!(err, ConversionError::ProfileUnavailable { status: ProfileStatus::NotFound });
    assert_eq!(source.calls, 1);
    assert_eq!(replies.replies(), 1);
    assert_eq!(replies.as_str(), PROFILE_FAILED_DIAGNOSTIC);
    assert_eq!(store.active(), Ok(&previous));

    // Previous profile keeps converting
    assert!(store.temperature_from_adc(2048).is_ok());
}

#[test]
fn stale_signature_is_refused() {
    let mut source = MemoryProfileSource::new();
    source
        .insert(PROFILE_TAG, PROFILE_SIGNATURE ^ 0xFF, &SensorProfile::default().to_record())
        .unwrap();
    let mut replies = DiagnosticLog::new();
    let mut store = ProfileStore::new();

    assert_eq!(
        store.initialize(ProfileSelection::Default, &mut source, &mut replies),
        Err(ConversionError::ProfileUnavailable { status: ProfileStatus::SignatureMismatch })
    );
    assert_eq!(store.temperature_from_adc(100), Err(ConversionError::Uninitialized));
    assert_eq!(replies.as_str(), "TEMP FAILED\r\n");
}

#[test]
fn reinitialization_replaces_profile() {
    let first = SensorProfile::ntc_10k_beta_3950();
    let second = SensorProfile::ntc_10k_steinhart_hart();
    let mut source = MemoryProfileSource::with_profile(&second);
    let mut replies = DiagnosticLog::new();
    let mut store = ProfileStore::new();

    store.initialize(ProfileSelection::Custom(first), &mut source, &mut replies).unwrap();
    assert_eq!(store.active(), Ok(&first));

    store.initialize(ProfileSelection::Default, &mut source, &mut replies).unwrap();
    assert_eq!(store.active(), Ok(&second));

    // Same selection again is a no-op
    store.initialize(ProfileSelection::Default, &mut source, &mut replies).unwrap();
    assert_eq!(store.active(), Ok(&second));
    assert_eq!(replies.replies(), 0);
}

#[cfg(feature = "std")]
#[test]
fn shared_store_serves_concurrent_readers() {
    use std::sync::Arc;
    use thermsense_core::SharedProfileStore;

    let shared = Arc::new(SharedProfileStore::new());
    let mut source = MemoryProfileSource::with_profile(&SensorProfile::default());
    let mut replies = DiagnosticLog::new();
    shared.initialize(ProfileSelection::Default, &mut source, &mut replies).unwrap();

    let readers: Vec<_> = (0..4u32)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.temperature_from_adc(1000 + i * 500))
        })
        .collect();

    for reader in readers {
        assert!(reader.join().unwrap().is_ok());
    }
}

#[cfg(feature = "serde")]
#[test]
fn profile_from_json() {
    let json = r#"{
        "schema": "DividerFixedOnTop",
        "parameters": {
            "SteinhartHartAbc": { "a": 0.0010092495, "b": 0.00023784054, "c": 2.0192027e-7 }
        },
        "v": 3.3,
        "r_f": 10000.0,
        "adc_range": 4096
    }"#;

    let loaded: SensorProfile = serde_json::from_str(json).unwrap();
    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.schema, WiringSchema::DividerFixedOnTop);

    let mut replies = DiagnosticLog::new();
    let mut store = ProfileStore::new();
    store
        .initialize(ProfileSelection::Custom(loaded), &mut CountingFailure { calls: 0 }, &mut replies)
        .unwrap();
    assert!(store.temperature_from_adc(2048).is_ok());

    let written = serde_json::to_string(&loaded).unwrap();
    let reloaded: SensorProfile = serde_json::from_str(&written).unwrap();
    assert_eq!(reloaded, loaded);
}
