//! Key-value persistence backends.
//!
//! The credential store and the PIN gate each own one named slot. Both are
//! written against [`KeyValueStore`] so tests can run them over
//! [`MemoryStore`] while the CLI uses [`FileStore`].

pub mod file;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Result, VaultError};

pub use file::FileStore;

/// A durable string slot store.
pub trait KeyValueStore {
    /// Read a slot. Returns `Ok(None)` when the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole content of a slot.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// In-process backend. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
    fail_writes: Mutex<bool>,
    fail_reads: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `write` fail with a storage error, the way a full
    /// disk or an exhausted quota would.
    pub fn fail_writes(&self, fail: bool) {
        *lock(&self.fail_writes) = fail;
    }

    /// Make every following `read` fail with a storage error, the way an
    /// unreadable file would.
    pub fn fail_reads(&self, fail: bool) {
        *lock(&self.fail_reads) = fail;
    }

    /// Put raw content into a slot, bypassing the failure switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        lock(&self.slots).insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if *lock(&self.fail_reads) {
            return Err(VaultError::Storage(format!("read of slot '{}' failed: I/O error", key)));
        }
        Ok(lock(&self.slots).get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *lock(&self.fail_writes) {
            return Err(VaultError::Storage(format!(
                "write to slot '{}' rejected: quota exceeded",
                key
            )));
        }
        lock(&self.slots).insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// A poisoned lock only means another thread panicked mid-insert; the map
// itself is still usable.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}
