use crate::cli::common::{self, print_json};
use crate::cli::generate::styled;
use crate::cli::json_output::AddResponse;
use pinvault::error::{Result, VaultError};
use pinvault::vault::record::NewCredential;

pub fn run(
    account: &str,
    username: Option<String>,
    email: Option<String>,
    notes: Option<String>,
    generate: bool,
    json: bool,
) -> Result<()> {
    let (config, client) = common::open_client()?;

    let password = if generate {
        client.generate(&config.generator)?
    } else {
        common::read_secret_from_stdin()?
    };

    let credential = NewCredential {
        account: account.to_string(),
        username,
        email,
        notes,
        password: password.clone(),
    };

    let records = client.add(credential)?;
    let added = records
        .last()
        .ok_or_else(|| VaultError::Other("credential missing after add".into()))?;

    if json {
        print_json(&AddResponse {
            id: added.id,
            account: added.account.clone(),
            created: added.created_at.to_rfc3339(),
            generated_password: generate.then(|| password.clone()),
        })?;
        return Ok(());
    }

    if generate {
        println!("{}", password);
        eprintln!(
            "Strength: {}",
            styled(client.classify_strength(&password, &config.generator))
        );
    }
    eprintln!("Credential '{}' added (id {}).", added.account, added.id);
    Ok(())
}
