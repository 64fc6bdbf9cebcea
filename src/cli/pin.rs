use chrono::Utc;

use crate::cli::common::{self, print_json};
use crate::cli::json_output::{PinSetupResponse, PinStatusResponse};
use crate::cli::PinCommands;
use pinvault::error::{Result, VaultError};

pub fn run(cmd: &PinCommands, json: bool) -> Result<()> {
    match cmd {
        PinCommands::Setup { pin, confirm } => setup(pin.clone(), confirm.clone(), json),
        PinCommands::Status => status(json),
    }
}

fn setup(pin: Option<String>, confirm: Option<String>, json: bool) -> Result<()> {
    let (_, mut client) = common::open_client()?;

    let pin = match pin {
        Some(pin) => pin,
        None if common::is_non_interactive() => {
            return Err(VaultError::Validation("--pin is required in non-interactive mode".into()))
        }
        None => common::resolve_pin(None, "Enter new 4-digit PIN")?,
    };
    let confirm = match confirm {
        Some(confirm) => confirm,
        None if common::is_non_interactive() => {
            return Err(VaultError::Validation("--confirm is required in non-interactive mode".into()))
        }
        None => common::resolve_pin(None, "Confirm PIN")?,
    };

    let replaced = client.pin_configured();
    client.setup_pin(&pin, &confirm)?;

    if json {
        return print_json(&PinSetupResponse {
            configured: true,
            replaced,
        });
    }

    eprintln!("PIN {}.", if replaced { "replaced" } else { "set" });
    Ok(())
}

fn status(json: bool) -> Result<()> {
    let (_, client) = common::open_client()?;
    let configured = client.pin_configured();
    let grace = client.grace_period();

    if json {
        return print_json(&PinStatusResponse {
            configured,
            access: client.request_access(Utc::now()),
            grace_period_secs: grace.num_seconds(),
        });
    }

    if configured {
        let grace = grace
            .to_std()
            .map(|d| humantime::format_duration(d).to_string())
            .unwrap_or_else(|_| format!("{}s", grace.num_seconds()));
        println!("PIN configured (grace period {})", grace);
    } else {
        println!("PIN not configured");
    }
    Ok(())
}
