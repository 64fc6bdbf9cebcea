use crate::cli::common::print_json;
use crate::cli::ConfigCommands;
use pinvault::config::{self, Config};
use pinvault::error::{Result, VaultError};

pub fn run(cmd: &ConfigCommands, json: bool) -> Result<()> {
    let path = config::config_path()?;
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load(&path)?;
            if json {
                return print_json(&config);
            }
            let content = toml::to_string_pretty(&config)
                .map_err(|e| VaultError::Config(format!("serialize error: {}", e)))?;
            print!("{}", content);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
