use chrono::Utc;

use crate::cli::common::{self, print_json};
use crate::cli::json_output::ShowResponse;
use pinvault::error::{Result, VaultError};
use pinvault::pin::AccessDecision;
use pinvault::vault::record::CredentialId;

pub fn run(id: CredentialId, pin: Option<String>, json: bool) -> Result<()> {
    let (_, mut client) = common::open_client()?;

    // Fail on a bad id before asking for the PIN.
    let record = client
        .get(id)
        .ok_or_else(|| VaultError::NotFound(id.to_string()))?;

    let now = Utc::now();
    match client.request_access(now) {
        AccessDecision::NeedsSetup => return Err(VaultError::PinNotConfigured),
        AccessDecision::NeedsChallenge => {
            let entered = common::resolve_pin(pin, "Enter vault PIN")?;
            client.verify_pin(&entered, now)?;
        }
        AccessDecision::GrantedImmediately => {}
    }

    let password = client.reveal_password(id, now)?;

    if json {
        return print_json(&ShowResponse {
            id: record.id,
            account: record.account,
            username: record.username,
            email: record.email,
            notes: record.notes,
            password,
            created: record.created_at.to_rfc3339(),
        });
    }

    println!("account:  {}", record.account);
    if let Some(ref username) = record.username {
        println!("username: {}", username);
    }
    if let Some(ref email) = record.email {
        println!("email:    {}", email);
    }
    if let Some(ref notes) = record.notes {
        println!("notes:    {}", notes);
    }
    println!("password: {}", password);
    println!("added:    {}", record.created_at.format("%Y-%m-%d %H:%M UTC"));
    Ok(())
}
