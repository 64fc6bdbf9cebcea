pub mod record;

use tracing::{debug, warn};

use crate::error::{Result, VaultError};
use crate::storage::KeyValueStore;
use crate::types::*;
use crate::vault::record::{CredentialId, CredentialRecord, CredentialUpdate, NewCredential};

/// Slot holding the JSON array of credential records.
pub const PASSWORDS_SLOT: &str = "passwords";

/// CRUD over the credential collection.
///
/// Every call reads the whole collection from the backend and every mutation
/// writes the whole collection back before returning. The returned vector is
/// the authoritative state; callers should drop any copy they held before.
///
/// Nothing coordinates two processes sharing one backend: concurrent
/// read-modify-write cycles race and the last writer wins.
pub struct CredentialStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// All stored credentials in insertion order.
    ///
    /// A missing, unreadable or unparseable slot yields an empty vector.
    pub fn get_all(&self) -> Vec<CredentialRecord> {
        let raw = match self.backend.read(PASSWORDS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(slot = PASSWORDS_SLOT, error = %e, "cannot read credentials, treating vault as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(slot = PASSWORDS_SLOT, error = %e, "stored credentials are corrupt, treating vault as empty");
                Vec::new()
            }
        }
    }

    /// Strict load used before a mutation. A read failure is surfaced so the
    /// following write can never replace the stored collection with a
    /// truncated one; a corrupt slot still reads as empty.
    fn load(&self) -> Result<Vec<CredentialRecord>> {
        let raw = match self.backend.read(PASSWORDS_SLOT)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(slot = PASSWORDS_SLOT, error = %e, "stored credentials are corrupt, starting from an empty vault");
                Ok(Vec::new())
            }
        }
    }

    /// Look up one credential.
    pub fn get(&self, id: CredentialId) -> Option<CredentialRecord> {
        self.get_all().into_iter().find(|r| r.id == id)
    }

    /// Append a new credential with a fresh id and creation time.
    pub fn add(&self, new: NewCredential) -> Result<Vec<CredentialRecord>> {
        let mut records = self.load()?;
        let now = Utc::now();
        let id = next_id(&records, now)?;

        records.push(new.into_record(id, now)?);
        self.save(&records)?;

        debug!(id, "credential added");
        Ok(records)
    }

    /// Merge `update` into the credential with `id`. `id` and `created_at`
    /// never change.
    pub fn update(&self, id: CredentialId, update: CredentialUpdate) -> Result<Vec<CredentialRecord>> {
        update.validate()?;

        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| VaultError::NotFound(id.to_string()))?;

        update.apply_to(record);
        self.save(&records)?;

        debug!(id, "credential updated");
        Ok(records)
    }

    /// Remove the credential with `id`.
    pub fn delete(&self, id: CredentialId) -> Result<Vec<CredentialRecord>> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Err(VaultError::NotFound(id.to_string()));
        }

        self.save(&records)?;

        debug!(id, "credential deleted");
        Ok(records)
    }

    fn save(&self, records: &[CredentialRecord]) -> Result<()> {
        let json = serde_json::to_string(records).map_err(|e| VaultError::Serialization(e.to_string()))?;
        self.backend.write(PASSWORDS_SLOT, &json)
    }
}

/// Time-derived id that is also strictly greater than every existing id, so
/// it never collides within the collection.
fn next_id(records: &[CredentialRecord], now: DateTime<Utc>) -> Result<CredentialId> {
    let floor = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match records.iter().map(|r| r.id).max() {
        None => Ok(floor),
        Some(max) => max
            .checked_add(1)
            .map(|next| next.max(floor))
            .ok_or_else(|| VaultError::Other("credential id space exhausted".into())),
    }
}
