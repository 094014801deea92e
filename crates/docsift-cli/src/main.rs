//! Docsift CLI - Extract text from documents and mine it for structured findings.

use clap::Parser;
use docsift_cli::commands;
use docsift_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON and quiet output stay clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> docsift_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;

    // Flag or environment beats the stored key
    if let Some(api_key) = cli.api_key {
        config.gemini.api_key = Some(api_key);
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Command::Text(args) => {
            commands::execute_text(args, &config, &formatter).await?;
        }
        Command::Config(args) => {
            // Persist what was on disk, not the runtime overrides
            let mut stored = Config::load_from(&config_path)?;
            commands::execute_config(args, &mut stored, &config_path, &formatter).await?;
        }
    }

    Ok(())
}
