mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use pinvault::error::JsonError;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PINVAULT_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Generate(args) => cli::generate::run(&args, json),

        Commands::Add {
            account,
            username,
            email,
            notes,
            generate,
        } => cli::add::run(&account, username, email, notes, generate, json),

        Commands::List => cli::list::run(json),

        Commands::Show { id, pin } => cli::show::run(id, pin, json),

        Commands::Update {
            id,
            account,
            username,
            email,
            notes,
            password,
        } => cli::update::run(id, account, username, email, notes, password, json),

        Commands::Remove { id } => cli::remove::run(id, json),

        Commands::Pin { command } => cli::pin::run(&command, json),

        Commands::Config { command } => cli::config::run(&command, json),
    };

    if let Err(e) = result {
        if json {
            if let Ok(body) = serde_json::to_string(&JsonError::from_error(&e)) {
                println!("{}", body);
            }
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("pinvault=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
