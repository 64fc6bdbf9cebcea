use serde::Serialize;

use pinvault::generator::Strength;
use pinvault::pin::AccessDecision;
use pinvault::vault::record::{CredentialId, CredentialRecord};

/// JSON response for `pinvault generate --json`.
#[derive(Serialize)]
pub struct GenerateResponse {
    pub password: String,
    pub length: usize,
    pub strength: Strength,
}

/// JSON response for `pinvault add --json`.
#[derive(Serialize)]
pub struct AddResponse {
    pub id: CredentialId,
    pub account: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
}

/// JSON response for `pinvault list --json`.
#[derive(Serialize)]
pub struct ListResponse {
    pub credentials: Vec<CredentialListItem>,
}

#[derive(Serialize)]
pub struct CredentialListItem {
    pub id: CredentialId,
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created: String,
}

impl From<&CredentialRecord> for CredentialListItem {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.id,
            account: record.account.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            created: record.created_at.to_rfc3339(),
        }
    }
}

/// JSON response for `pinvault show --json`.
#[derive(Serialize)]
pub struct ShowResponse {
    pub id: CredentialId,
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub password: String,
    pub created: String,
}

/// JSON response for `pinvault update --json` and `pinvault remove --json`.
#[derive(Serialize)]
pub struct MutationResponse {
    pub id: CredentialId,
    pub remaining: usize,
}

/// JSON response for `pinvault pin setup --json`.
#[derive(Serialize)]
pub struct PinSetupResponse {
    pub configured: bool,
    pub replaced: bool,
}

/// JSON response for `pinvault pin status --json`.
#[derive(Serialize)]
pub struct PinStatusResponse {
    pub configured: bool,
    pub access: AccessDecision,
    pub grace_period_secs: i64,
}
