use std::env;
use std::io::{self, IsTerminal, Read};

use serde::Serialize;

use pinvault::api::VaultClient;
use pinvault::config::{self, Config};
use pinvault::error::{Result, VaultError};
use pinvault::storage::FileStore;

const PINVAULT_NON_INTERACTIVE_ENV: &str = "PINVAULT_NON_INTERACTIVE";

/// Check if we are in non-interactive mode.
/// Returns true if stdin is not a TTY or PINVAULT_NON_INTERACTIVE=1 is set.
pub fn is_non_interactive() -> bool {
    if env::var(PINVAULT_NON_INTERACTIVE_ENV)
        .map(|v| v == "1")
        .unwrap_or(false)
    {
        return true;
    }
    !io::stdin().is_terminal()
}

/// Load the config file and open the vault it points at.
pub fn open_client() -> Result<(Config, VaultClient<FileStore>)> {
    let config = Config::load(&config::config_path()?)?;
    let client = VaultClient::open(&config)?;
    Ok((config, client))
}

/// Use `given` if present, otherwise prompt on the terminal.
pub fn resolve_pin(given: Option<String>, prompt: &str) -> Result<String> {
    if let Some(pin) = given {
        return Ok(pin);
    }

    if is_non_interactive() {
        return Err(VaultError::PinRequired);
    }

    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| VaultError::Other(format!("Failed to read PIN: {}", e)))
}

/// Read a secret value from stdin, trimming the trailing newline.
pub fn read_secret_from_stdin() -> Result<String> {
    let mut value = String::new();
    io::stdin()
        .read_to_string(&mut value)
        .map_err(|e| VaultError::Other(format!("Failed to read from stdin: {}", e)))?;

    // Trim trailing newline (common when piping echo)
    Ok(value.trim_end_matches(['\n', '\r']).to_string())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(value).map_err(|e| VaultError::Serialization(e.to_string()))?
    );
    Ok(())
}
