//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{Local, NaiveDate};
use docsift_analyzer::{DocumentProcessor, DocumentReport, SourceDocument};
use docsift_llm::{GeminiProvider, PlainTextProvider};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let source = SourceDocument::from_path(&args.file)?;

    let document = if args.local {
        let processor = DocumentProcessor::new(PlainTextProvider::new(), config.analyzer.clone());
        processor.process(source).await?
    } else {
        let mut gemini = config.gemini.clone();
        if let Some(model) = args.model {
            gemini = gemini.with_model(model);
        }
        let processor = DocumentProcessor::new(GeminiProvider::new(gemini)?, config.analyzer.clone());
        processor.process(source).await?
    };

    if let Some(target) = args.save_text {
        let path = target.unwrap_or_else(|| default_text_path(Local::now().date_naive()));
        save_text(&document, &path)?;
        eprintln!("{}", formatter.success(&format!("Saved text to {}", path.display())));
    }

    println!("{}", formatter.format_document(&document, args.section)?);

    Ok(())
}

/// `extracted-text-YYYY-MM-DD.txt` in the working directory.
fn default_text_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("extracted-text-{}.txt", date.format("%Y-%m-%d")))
}

fn save_text(document: &DocumentReport, path: &Path) -> Result<()> {
    fs::write(path, &document.text)?;
    info!("Wrote {} characters to {}", document.text.chars().count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Section;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_default_text_path() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            default_text_path(date),
            PathBuf::from("extracted-text-2024-03-07.txt")
        );
    }

    #[tokio::test]
    async fn test_local_analyze_saves_text() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("invoice.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Invoice #123 Amount: $1,234.56 Signed: John Smith").unwrap();

        let args = AnalyzeArgs {
            file: input,
            local: true,
            section: Section::Summary,
            save_text: Some(Some(output.clone())),
            model: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_analyze(args, &Config::default(), &formatter).await.unwrap();

        let saved = fs::read_to_string(output).unwrap();
        assert_eq!(saved, "Invoice #123 Amount: $1,234.56 Signed: John Smith");
    }

    #[tokio::test]
    async fn test_local_analyze_rejects_unsupported_type() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("photo.gif");
        fs::write(&input, b"GIF89a").unwrap();

        let args = AnalyzeArgs {
            file: input,
            local: true,
            section: Section::All,
            save_text: None,
            model: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let err = execute_analyze(args, &Config::default(), &formatter)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("image/gif"));
    }
}
