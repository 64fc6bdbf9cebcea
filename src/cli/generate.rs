use console::style;

use crate::cli::common::{self, print_json};
use crate::cli::json_output::GenerateResponse;
use crate::cli::GenerateArgs;
use pinvault::error::Result;
use pinvault::generator::{GeneratorConfig, Strength};

pub fn run(args: &GenerateArgs, json: bool) -> Result<()> {
    let (config, client) = common::open_client()?;
    let settings = apply_args(config.generator, args);

    let password = client.generate(&settings)?;
    let strength = client.classify_strength(&password, &settings);

    if json {
        print_json(&GenerateResponse {
            length: password.chars().count(),
            password,
            strength,
        })?;
    } else {
        println!("{}", password);
        eprintln!("Strength: {}", styled(strength));
    }
    Ok(())
}

/// Layer command-line flags over the configured generator defaults.
pub fn apply_args(mut settings: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(length) = args.length {
        settings.length = length;
    }
    if args.no_uppercase {
        settings.uppercase = false;
    }
    if args.no_lowercase {
        settings.lowercase = false;
    }
    if args.no_digits {
        settings.digits = false;
    }
    if args.symbols {
        settings.symbols = true;
    }
    if args.no_symbols {
        settings.symbols = false;
    }
    if args.each_class {
        settings.require_each_class = true;
    }
    settings
}

pub fn styled(strength: Strength) -> console::StyledObject<Strength> {
    match strength {
        Strength::Weak => style(strength).red(),
        Strength::Medium => style(strength).yellow(),
        Strength::Strong => style(strength).green(),
    }
}
