use crate::cli::common::{self, print_json};
use crate::cli::json_output::MutationResponse;
use pinvault::error::Result;
use pinvault::vault::record::CredentialId;

pub fn run(id: CredentialId, json: bool) -> Result<()> {
    let (_, client) = common::open_client()?;
    let records = client.delete(id)?;

    if json {
        return print_json(&MutationResponse {
            id,
            remaining: records.len(),
        });
    }

    eprintln!("Credential {} removed.", id);
    Ok(())
}
