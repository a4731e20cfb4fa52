//! Collaborator traits
//!
//! The store talks to the rest of the firmware through two narrow seams:
//! a profile source that hands back stored records and a diagnostic sink
//! that carries human-readable replies. Both are synchronous.

use crate::errors::ProfileStatus;

/// Retrieves named, signed records from persistent storage
pub trait ProfileSource {
    /// Copy the record stored under `tag` into `buffer`
    ///
    /// Returns the number of bytes written. A stored signature different
    /// from `signature` is a failure, as is a record that does not fit.
    fn get_entry(&mut self, tag: &str, signature: u32, buffer: &mut [u8]) -> Result<usize, ProfileStatus>;
}

/// Fire-and-forget channel for diagnostic replies
pub trait DiagnosticSink {
    /// Emit one reply
    fn reply(&mut self, message: &str);
}

impl<F: FnMut(&str)> DiagnosticSink for F {
    fn reply(&mut self, message: &str) {
        self(message)
    }
}
