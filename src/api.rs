//! High-level programmatic API for the password vault.
//!
//! [`VaultClient`] bundles one storage backend with the credential store and
//! the PIN gate that share it, and adds PIN-gated password reveal on top.

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, VaultError};
use crate::generator::{self, GeneratorConfig, Strength};
use crate::pin::{AccessDecision, PinGate};
use crate::storage::{FileStore, KeyValueStore};
use crate::types::*;
use crate::vault::record::{CredentialId, CredentialRecord, CredentialUpdate, NewCredential};
use crate::vault::CredentialStore;

/// High-level client for programmatic vault access.
///
/// The PIN grace period lives inside the client, so it lasts as long as the
/// client does.
pub struct VaultClient<S: KeyValueStore> {
    store: CredentialStore<Arc<S>>,
    pin: PinGate<Arc<S>>,
}

impl<S: KeyValueStore> VaultClient<S> {
    pub fn new(backend: S) -> Self {
        let backend = Arc::new(backend);
        Self {
            store: CredentialStore::new(Arc::clone(&backend)),
            pin: PinGate::new(backend),
        }
    }

    /// Override the PIN grace period.
    pub fn with_grace_period(mut self, grace_period: chrono::Duration) -> Self {
        self.pin = self.pin.with_grace_period(grace_period);
        self
    }

    // ── generator ────────────────────────────────────────────────

    pub fn generate(&self, config: &GeneratorConfig) -> Result<String> {
        generator::generate(config)
    }

    pub fn classify_strength(&self, password: &str, config: &GeneratorConfig) -> Strength {
        generator::classify_strength(password, config)
    }

    // ── credentials ──────────────────────────────────────────────

    pub fn list(&self) -> Vec<CredentialRecord> {
        self.store.get_all()
    }

    pub fn get(&self, id: CredentialId) -> Option<CredentialRecord> {
        self.store.get(id)
    }

    pub fn add(&self, credential: NewCredential) -> Result<Vec<CredentialRecord>> {
        self.store.add(credential)
    }

    pub fn update(&self, id: CredentialId, update: CredentialUpdate) -> Result<Vec<CredentialRecord>> {
        self.store.update(id, update)
    }

    pub fn delete(&self, id: CredentialId) -> Result<Vec<CredentialRecord>> {
        self.store.delete(id)
    }

    // ── PIN ──────────────────────────────────────────────────────

    pub fn pin_configured(&self) -> bool {
        self.pin.is_configured()
    }

    pub fn setup_pin(&mut self, pin: &str, confirm: &str) -> Result<()> {
        self.pin.setup(pin, confirm)
    }

    pub fn request_access(&self, now: DateTime<Utc>) -> AccessDecision {
        self.pin.request_access(now)
    }

    pub fn verify_pin(&mut self, pin: &str, now: DateTime<Utc>) -> Result<()> {
        self.pin.verify(pin, now)
    }

    pub fn grace_period(&self) -> chrono::Duration {
        self.pin.grace_period()
    }

    pub fn grace_remaining(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.pin.grace_remaining(now)
    }

    /// Return the password of credential `id` if the PIN gate grants access
    /// at `now`. Does not prompt: a caller that gets
    /// [`VaultError::PinRequired`] should ask for the PIN, call
    /// [`verify_pin`](Self::verify_pin) and retry.
    pub fn reveal_password(&self, id: CredentialId, now: DateTime<Utc>) -> Result<String> {
        match self.pin.request_access(now) {
            AccessDecision::NeedsSetup => Err(VaultError::PinNotConfigured),
            AccessDecision::NeedsChallenge => Err(VaultError::PinRequired),
            AccessDecision::GrantedImmediately => {
                let record = self
                    .store
                    .get(id)
                    .ok_or_else(|| VaultError::NotFound(id.to_string()))?;
                debug!(id, "password revealed");
                Ok(record.password)
            }
        }
    }
}

impl VaultClient<FileStore> {
    /// Open the file-backed vault described by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let backend = FileStore::new(config.data_dir()?);
        Ok(Self::new(backend).with_grace_period(config.pin.grace_period()?))
    }

    /// Open the vault from the default config file (~/.pinvault/pinvault.toml).
    pub fn open_default() -> Result<Self> {
        let config = Config::load(&crate::config::config_path()?)?;
        Self::open(&config)
    }
}
