//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a configuration action against the file at `path`.
pub async fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let contents = toml::to_string_pretty(&config.redacted())
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", contents);
        }
        ConfigAction::SetKey { key } => {
            if key.trim().is_empty() {
                return Err(CliError::InvalidInput("API key must not be empty".to_string()));
            }
            config.gemini.api_key = Some(key);
            config.save_to(path)?;
            println!("{}", formatter.success("API key saved"));
        }
        ConfigAction::SetModel { model } => {
            if model.trim().is_empty() {
                return Err(CliError::InvalidInput("Model name must not be empty".to_string()));
            }
            println!("{}", formatter.success(&format!("Model set to {}", model)));
            config.gemini.model = model;
            config.save_to(path)?;
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
