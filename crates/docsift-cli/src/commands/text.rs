//! Text command implementation.

use crate::cli::TextArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docsift_analyzer::Analyzer;
use std::fs;
use std::io::{self, Read};

/// Execute the text command.
pub async fn execute_text(args: TextArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either a file or --stdin".to_string(),
        ));
    };

    let analyzer = Analyzer::new(config.analyzer.clone());
    let report = analyzer.analyze_all(&text);

    println!("{}", formatter.format_report(&text, &report, args.section)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Section;
    use crate::config::OutputFormat;

    #[tokio::test]
    async fn test_requires_input() {
        let args = TextArgs {
            file: None,
            stdin: false,
            section: Section::All,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let err = execute_text(args, &Config::default(), &formatter)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("letter.txt");
        fs::write(&path, "Dear Sir, this letter confirms receipt.").unwrap();

        let args = TextArgs {
            file: Some(path),
            stdin: false,
            section: Section::Summary,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_text(args, &Config::default(), &formatter).await.is_ok());
    }
}
