use crate::error::{Result, VaultError};
use crate::types::*;

/// Unique key of a stored credential.
pub type CredentialId = u64;

/// A single credential in the vault.
///
/// Serialized with camelCase keys; optional fields that are not set are
/// omitted rather than written as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub id: CredentialId,
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when adding a credential. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCredential {
    pub account: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub password: String,
}

impl NewCredential {
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn into_record(self, id: CredentialId, created_at: DateTime<Utc>) -> Result<CredentialRecord> {
        validate_account(&self.account)?;
        validate_password(&self.password)?;
        Ok(CredentialRecord {
            id,
            account: self.account,
            username: normalize(self.username),
            email: normalize(self.email),
            notes: normalize(self.notes),
            password: self.password,
            created_at,
        })
    }
}

/// A partial update. `None` leaves the field untouched; an empty string
/// clears an optional field.
///
/// There is no `id` or `created_at` here: both are immutable, and when a
/// partial JSON object carries them they are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CredentialUpdate {
    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.notes.is_none()
            && self.password.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref account) = self.account {
            validate_account(account)?;
        }
        if let Some(ref password) = self.password {
            validate_password(password)?;
        }
        Ok(())
    }

    /// Merge the supplied fields into `record`. Call [`validate`](Self::validate) first.
    pub fn apply_to(&self, record: &mut CredentialRecord) {
        if let Some(ref account) = self.account {
            record.account = account.clone();
        }
        if let Some(ref username) = self.username {
            record.username = normalize(Some(username.clone()));
        }
        if let Some(ref email) = self.email {
            record.email = normalize(Some(email.clone()));
        }
        if let Some(ref notes) = self.notes {
            record.notes = normalize(Some(notes.clone()));
        }
        if let Some(ref password) = self.password {
            record.password = password.clone();
        }
    }
}

fn validate_account(account: &str) -> Result<()> {
    if account.trim().is_empty() {
        return Err(VaultError::Validation("account must not be empty".into()));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(VaultError::Validation("password must not be empty".into()));
    }
    Ok(())
}

fn normalize(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}
