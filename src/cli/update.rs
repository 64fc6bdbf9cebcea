use crate::cli::common::{self, print_json};
use crate::cli::json_output::MutationResponse;
use pinvault::error::{Result, VaultError};
use pinvault::vault::record::{CredentialId, CredentialUpdate};

pub fn run(
    id: CredentialId,
    account: Option<String>,
    username: Option<String>,
    email: Option<String>,
    notes: Option<String>,
    password_from_stdin: bool,
    json: bool,
) -> Result<()> {
    let (_, client) = common::open_client()?;

    let password = if password_from_stdin {
        Some(common::read_secret_from_stdin()?)
    } else {
        None
    };

    let update = CredentialUpdate {
        account,
        username,
        email,
        notes,
        password,
    };
    if update.is_empty() {
        return Err(VaultError::Validation("nothing to update".into()));
    }

    let records = client.update(id, update)?;

    if json {
        return print_json(&MutationResponse {
            id,
            remaining: records.len(),
        });
    }

    eprintln!("Credential {} updated.", id);
    Ok(())
}
