//! PIN-gated access to stored secrets.
//!
//! The PIN is four digits kept in clear text in its own slot and compared
//! with plain string equality. There is no hashing, rate limiting or lockout:
//! it keeps a casual onlooker out of a local vault and is not a
//! cryptographic credential.
//!
//! After a successful [`PinGate::verify`] further access is granted without a
//! prompt until the grace period has elapsed. The verification time lives in
//! memory only, so every new process starts locked. Callers pass `now`
//! explicitly so expiry is deterministic under test.

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::error::{Result, VaultError};
use crate::storage::KeyValueStore;
use crate::types::*;

/// Slot holding the configured PIN.
pub const PIN_SLOT: &str = "vault_pin";

pub const PIN_LENGTH: usize = 4;

/// Default time after a successful verification during which access is
/// granted without a prompt.
pub const DEFAULT_GRACE_PERIOD_SECS: i64 = 5 * 60;

/// Outcome of an access attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// No PIN configured yet; run setup first.
    NeedsSetup,
    /// Verified within the grace period.
    GrantedImmediately,
    /// Ask for the PIN and call `verify`.
    NeedsChallenge,
}

pub struct PinGate<S> {
    backend: S,
    grace_period: Duration,
    last_verified_at: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore> PinGate<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            grace_period: Duration::seconds(DEFAULT_GRACE_PERIOD_SECS),
            last_verified_at: None,
        }
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    pub fn last_verified_at(&self) -> Option<DateTime<Utc>> {
        self.last_verified_at
    }

    /// True iff a valid PIN is stored.
    pub fn is_configured(&self) -> bool {
        self.stored_pin().is_some()
    }

    /// Store `pin` after checking it is four digits and matches `confirm`.
    ///
    /// An existing PIN is overwritten without asking for it. The current
    /// verification is dropped so the new PIN has to be entered.
    pub fn setup(&mut self, pin: &str, confirm: &str) -> Result<()> {
        if !is_valid_pin(pin) {
            return Err(VaultError::Validation(format!("PIN must be {} digits", PIN_LENGTH)));
        }
        if pin != confirm {
            return Err(VaultError::Validation("PINs do not match".into()));
        }

        let replaced = self.is_configured();
        self.backend.write(PIN_SLOT, pin)?;
        self.last_verified_at = None;

        info!(replaced, "vault PIN set");
        Ok(())
    }

    /// Decide whether revealing a secret at `now` needs a PIN prompt.
    pub fn request_access(&self, now: DateTime<Utc>) -> AccessDecision {
        if !self.is_configured() {
            return AccessDecision::NeedsSetup;
        }
        match self.last_verified_at {
            Some(at) if now.signed_duration_since(at) < self.grace_period => AccessDecision::GrantedImmediately,
            _ => AccessDecision::NeedsChallenge,
        }
    }

    /// Check `pin` against the stored PIN. Success starts a new grace
    /// period at `now`; a failure leaves the current one untouched.
    pub fn verify(&mut self, pin: &str, now: DateTime<Utc>) -> Result<()> {
        let stored = self.stored_pin().ok_or(VaultError::PinNotConfigured)?;
        if pin != stored {
            debug!("PIN verification failed");
            return Err(VaultError::WrongPin);
        }

        self.last_verified_at = Some(now);
        debug!("PIN verified");
        Ok(())
    }

    /// Time left in the grace period at `now`, if any.
    pub fn grace_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let at = self.last_verified_at?;
        let remaining = self.grace_period - now.signed_duration_since(at);
        (remaining > Duration::zero()).then_some(remaining)
    }

    fn stored_pin(&self) -> Option<String> {
        let raw = match self.backend.read(PIN_SLOT) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(slot = PIN_SLOT, error = %e, "cannot read PIN slot");
                return None;
            }
        };

        let trimmed = raw.trim();
        let pin = if trimmed.starts_with('"') {
            serde_json::from_str::<String>(trimmed).unwrap_or_default()
        } else {
            trimmed.to_string()
        };

        if is_valid_pin(&pin) {
            Some(pin)
        } else {
            warn!(slot = PIN_SLOT, "stored PIN is malformed, treating as unconfigured");
            None
        }
    }
}

/// Exactly four ASCII digits.
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}
