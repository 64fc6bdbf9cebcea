pub mod add;
pub mod common;
pub mod config;
pub mod generate;
pub mod json_output;
pub mod list;
pub mod pin;
pub mod remove;
pub mod show;
pub mod update;

use clap::{Parser, Subcommand};

use pinvault::vault::record::CredentialId;

#[derive(Parser)]
#[command(name = "pinvault", version, about = "Local password manager with PIN-gated reveal")]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random password
    Generate(GenerateArgs),

    /// Add a credential (reads the password from stdin unless --generate)
    Add {
        /// Account or service name
        account: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Generate the password with the configured generator settings
        #[arg(long)]
        generate: bool,
    },

    /// List stored credentials (passwords are not shown)
    List,

    /// Show a credential including its password (PIN required)
    Show {
        /// Credential id
        id: CredentialId,
        /// PIN to use instead of prompting
        #[arg(long, env = "PINVAULT_PIN", hide_env_values = true)]
        pin: Option<String>,
    },

    /// Update fields of a credential
    Update {
        /// Credential id
        id: CredentialId,
        #[arg(long)]
        account: Option<String>,
        /// New username (empty string clears it)
        #[arg(long)]
        username: Option<String>,
        /// New email (empty string clears it)
        #[arg(long)]
        email: Option<String>,
        /// New notes (empty string clears them)
        #[arg(long)]
        notes: Option<String>,
        /// Read a new password from stdin
        #[arg(long)]
        password: bool,
    },

    /// Remove a credential
    Remove {
        /// Credential id
        id: CredentialId,
    },

    /// Manage the vault PIN
    Pin {
        #[command(subcommand)]
        command: PinCommands,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Password length (4-32)
    #[arg(long, short)]
    pub length: Option<usize>,
    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,
    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,
    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,
    /// Include symbols
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,
    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,
    /// Include at least one character of every selected class
    #[arg(long)]
    pub each_class: bool,
}

#[derive(Subcommand)]
pub enum PinCommands {
    /// Set the vault PIN (overwrites an existing one)
    Setup {
        /// New 4-digit PIN
        #[arg(long)]
        pin: Option<String>,
        /// Repeat the new PIN
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Show whether a PIN is configured
    Status,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
}
