//! In-memory collaborators
//!
//! Fixed-capacity implementations of [`ProfileSource`] and [`DiagnosticSink`]
//! backed by `heapless` containers. They serve as the storage layer on
//! targets that keep profiles in RAM (or in a flash region already mapped
//! into RAM) and as fixtures in tests.

use heapless::{String, Vec};

use crate::{
    constants::profile::{PROFILE_SIGNATURE, PROFILE_TAG},
    errors::ProfileStatus,
    profile::SensorProfile,
    traits::{DiagnosticSink, ProfileSource},
};

/// Maximum number of entries held by a [`MemoryProfileSource`]
pub const MAX_ENTRIES: usize = 4;

/// Maximum tag length in bytes
pub const MAX_TAG_LEN: usize = 8;

/// Maximum stored record length in bytes
pub const MAX_ENTRY_LEN: usize = 64;

/// Capacity of the [`DiagnosticLog`] text buffer
pub const DIAGNOSTIC_LOG_CAPACITY: usize = 128;

#[derive(Debug, Clone)]
struct Entry {
    tag: String<MAX_TAG_LEN>,
    signature: u32,
    data: Vec<u8, MAX_ENTRY_LEN>,
}

/// Tagged record store held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileSource {
    entries: Vec<Entry, MAX_ENTRIES>,
}

impl MemoryProfileSource {
    /// Empty source
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Source holding `profile` under the default tag and signature
    pub fn with_profile(profile: &SensorProfile) -> Self {
        let mut source = Self::new();
        // Capacity checks cannot fail on an empty source
        let _ = source.store_profile(profile);
        source
    }

    /// Store `profile` under the default tag and signature
    pub fn store_profile(&mut self, profile: &SensorProfile) -> Result<(), ProfileStatus> {
        self.insert(PROFILE_TAG, PROFILE_SIGNATURE, &profile.to_record())
    }

    /// Store raw bytes, replacing any entry with the same tag
    pub fn insert(&mut self, tag: &str, signature: u32, data: &[u8]) -> Result<(), ProfileStatus> {
        let mut stored_tag = String::new();
        stored_tag.push_str(tag).map_err(|_| ProfileStatus::StorageFault)?;
        let data = Vec::from_slice(data).map_err(|_| ProfileStatus::StorageFault)?;

        let entry = Entry { tag: stored_tag, signature, data };
        match self.entries.iter_mut().find(|existing| existing.tag == tag) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry).map_err(|_| ProfileStatus::StorageFault)?,
        }
        Ok(())
    }

    /// Drop the entry stored under `tag`
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.entries.iter().position(|entry| entry.tag == tag) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProfileSource for MemoryProfileSource {
    fn get_entry(&mut self, tag: &str, signature: u32, buffer: &mut [u8]) -> Result<usize, ProfileStatus> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.tag == tag)
            .ok_or(ProfileStatus::NotFound)?;

        if entry.signature != signature {
            return Err(ProfileStatus::SignatureMismatch);
        }
        if entry.data.len() > buffer.len() {
            return Err(ProfileStatus::LengthMismatch);
        }

        buffer[..entry.data.len()].copy_from_slice(&entry.data);
        Ok(entry.data.len())
    }
}

/// Diagnostic sink that keeps what it was sent
///
/// Text beyond the buffer capacity is dropped; the reply count keeps
/// counting regardless.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    text: String<DIAGNOSTIC_LOG_CAPACITY>,
    replies: usize,
}

impl DiagnosticLog {
    /// Empty log
    pub fn new() -> Self {
        Self { text: String::new(), replies: 0 }
    }

    /// Everything received so far, concatenated
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Number of replies received
    pub fn replies(&self) -> usize {
        self.replies
    }

    /// Forget all replies
    pub fn clear(&mut self) {
        self.text.clear();
        self.replies = 0;
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn reply(&mut self, message: &str) {
        self.replies += 1;
        if self.text.push_str(message).is_err() {
            log_warn!("Diagnostic log full, dropped {} bytes", message.len());
        }
    }
}
