//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docsift - Extract text from documents and mine it for structured findings.
#[derive(Debug, Parser)]
#[command(name = "docsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Google AI API key (overrides the config file)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values, one per line)
    Quiet,
}

/// Which part of the analysis to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Section {
    /// Every section
    #[default]
    All,
    /// The extracted text
    Text,
    /// Document type, summary, narrative, and fields
    Summary,
    /// Emails, phone numbers, addresses, IDs, URLs
    Entities,
    /// Signature findings
    Signatures,
    /// Stamp findings
    Stamps,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract text from a file and analyze it
    Analyze(AnalyzeArgs),

    /// Analyze text that is already extracted
    Text(TextArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// File to analyze (PNG, JPEG, WebP, PDF, or text)
    pub file: PathBuf,

    /// Read text files locally instead of calling the extraction service
    #[arg(long)]
    pub local: bool,

    /// Section to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub section: Section,

    /// Save the extracted text; without a path, writes extracted-text-<date>.txt
    #[arg(long, value_name = "PATH")]
    pub save_text: Option<Option<PathBuf>>,

    /// Model override for this run
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the text command.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Text file to analyze
    pub file: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,

    /// Section to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub section: Section,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (API key masked)
    Show,

    /// Store the Google AI API key
    SetKey {
        /// API key
        key: String,
    },

    /// Set the extraction model
    SetModel {
        /// Model name (e.g., gemini-1.5-flash)
        model: String,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["docsift", "analyze", "scan.png", "--section", "signatures"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file, PathBuf::from("scan.png"));
                assert_eq!(args.section, Section::Signatures);
                assert!(!args.local);
                assert!(args.save_text.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_save_text_without_path() {
        let cli = Cli::parse_from(["docsift", "analyze", "scan.png", "--save-text"]);
        match cli.command {
            Command::Analyze(args) => assert_eq!(args.save_text, Some(None)),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docsift", "text", "--stdin", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Text(args) => assert!(args.stdin),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_stdin_conflicts_with_file() {
        let result = Cli::try_parse_from(["docsift", "text", "notes.txt", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_set_key() {
        let cli = Cli::parse_from(["docsift", "config", "set-key", "AIza123"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::SetKey { key },
            }) => assert_eq!(key, "AIza123"),
            _ => panic!("Expected config set-key"),
        }
    }
}
