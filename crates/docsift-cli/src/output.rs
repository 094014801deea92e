//! Output formatting for the CLI.

use crate::cli::Section;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docsift_analyzer::{AnalysisReport, DocumentReport};
use docsift_domain::{Confidence, DocumentAnalysis, EntityBundle, SignatureFinding, StampFinding};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest context excerpt shown in finding tables
const CONTEXT_PREVIEW_CHARS: usize = 100;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a processed file: a header with file details, then the section.
    pub fn format_document(&self, document: &DocumentReport, section: Section) -> Result<String> {
        match (self.format, section) {
            (OutputFormat::Json, Section::All) => Ok(serde_json::to_string_pretty(document)?),
            (OutputFormat::Table, _) => {
                let header = self.info(&format!(
                    "{} ({}, {} bytes) via {}",
                    document.file_name,
                    document.mime_type,
                    document.size_bytes,
                    document.metadata.model_name
                ));
                let body = self.format_report(&document.text, &document.report, section)?;
                Ok(format!("{}\n\n{}", header, body))
            }
            _ => self.format_report(&document.text, &document.report, section),
        }
    }

    /// Format the analysis of `text`.
    pub fn format_report(&self, text: &str, report: &AnalysisReport, section: Section) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(text, report, section),
            OutputFormat::Table => Ok(self.format_table(text, report, section)),
            OutputFormat::Quiet => Ok(format_quiet(text, report, section)),
        }
    }

    fn format_json(&self, text: &str, report: &AnalysisReport, section: Section) -> Result<String> {
        let value = match section {
            Section::All => serde_json::to_value(report)?,
            Section::Text => json!({
                "text": text,
                "characters": text.encode_utf16().count(),
            }),
            Section::Summary => serde_json::to_value(&report.analysis)?,
            Section::Entities => serde_json::to_value(&report.entities)?,
            Section::Signatures => serde_json::to_value(&report.signatures)?,
            Section::Stamps => serde_json::to_value(&report.stamps)?,
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_table(&self, text: &str, report: &AnalysisReport, section: Section) -> String {
        let no_content = text.is_empty();
        match section {
            Section::All => [
                self.summary_table(&report.analysis, no_content),
                self.entities_table(&report.entities, no_content),
                self.signatures_table(&report.signatures, no_content),
                self.stamps_table(&report.stamps, no_content),
            ]
            .join("\n\n"),
            Section::Text => self.text_block(text),
            Section::Summary => self.summary_table(&report.analysis, no_content),
            Section::Entities => self.entities_table(&report.entities, no_content),
            Section::Signatures => self.signatures_table(&report.signatures, no_content),
            Section::Stamps => self.stamps_table(&report.stamps, no_content),
        }
    }

    fn text_block(&self, text: &str) -> String {
        if text.is_empty() {
            return self.warning("No text extracted yet");
        }
        format!(
            "{}\n\n{}",
            text,
            self.colorize(&format!("{} characters extracted", text.encode_utf16().count()), "cyan")
        )
    }

    fn summary_table(&self, analysis: &DocumentAnalysis, no_content: bool) -> String {
        let mut out = vec![self.heading("Document Summary")];
        if no_content {
            out.push(self.warning("No document content to analyze"));
            return out.join("\n");
        }

        out.push(format!("Document Type: {}", analysis.document_type));
        out.push(format!("Summary: {}", analysis.summary));
        out.push(String::new());
        out.push(self.heading("Document Analysis (NLP)"));
        out.push(analysis.narrative.clone());

        let fields = [
            ("Authorized Parties", &analysis.parties),
            ("Organizations", &analysis.organizations),
            ("Key Dates", &analysis.dates),
            ("Amounts", &analysis.amounts),
        ];
        if fields.iter().any(|(_, values)| !values.is_empty()) {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Values"]);
            for (label, values) in fields {
                if !values.is_empty() {
                    builder.push_record([label.to_string(), values.join(", ")]);
                }
            }
            out.push(String::new());
            out.push(render(builder));
        }

        out.join("\n")
    }

    fn entities_table(&self, entities: &EntityBundle, no_content: bool) -> String {
        let mut out = vec![self.heading(&format!("Important Entities ({})", entities.total()))];
        if no_content {
            out.push(self.warning("No document content to analyze for entities"));
            return out.join("\n");
        }
        if entities.is_empty() {
            out.push(self.warning("No important entities detected in this document"));
            return out.join("\n");
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Value"]);
        for (label, values) in entities.categories() {
            for value in values {
                builder.push_record([label, value.as_str()]);
            }
        }
        out.push(render(builder));
        out.join("\n")
    }

    fn signatures_table(&self, signatures: &[SignatureFinding], no_content: bool) -> String {
        let mut out = vec![self.heading(&format!("Signatures Detected ({})", signatures.len()))];
        if no_content {
            out.push(self.warning("No document content to analyze for signatures"));
            return out.join("\n");
        }
        if signatures.is_empty() {
            out.push(self.warning("No signatures detected in this document"));
            return out.join("\n");
        }

        let mut builder = Builder::default();
        builder.push_record(["Type", "Content", "Confidence", "Context"]);
        for signature in signatures {
            builder.push_record([
                signature.kind.label().to_string(),
                signature.content.clone(),
                self.confidence(signature.confidence),
                context_preview(&signature.context),
            ]);
        }
        out.push(render(builder));
        out.join("\n")
    }

    fn stamps_table(&self, stamps: &[StampFinding], no_content: bool) -> String {
        let mut out = vec![self.heading(&format!("Stamps Detected ({})", stamps.len()))];
        if no_content {
            out.push(self.warning("No document content to analyze for stamps"));
            return out.join("\n");
        }
        if stamps.is_empty() {
            out.push(self.warning("No stamps or seals detected in this document"));
            return out.join("\n");
        }

        let mut builder = Builder::default();
        builder.push_record(["Type", "Content", "Context"]);
        for stamp in stamps {
            builder.push_record([
                stamp.kind.label().to_string(),
                stamp.content.clone(),
                context_preview(&stamp.context),
            ]);
        }
        out.push(render(builder));
        out.join("\n")
    }

    fn confidence(&self, confidence: Confidence) -> String {
        let color = match confidence {
            Confidence::High => "green",
            Confidence::Medium => "yellow",
            Confidence::Low => "none",
        };
        self.colorize(confidence.as_str(), color)
    }

    fn heading(&self, title: &str) -> String {
        if self.color_enabled {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// First 100 characters of a context, always followed by an ellipsis
fn context_preview(context: &str) -> String {
    let preview: String = context.chars().take(CONTEXT_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

fn format_quiet(text: &str, report: &AnalysisReport, section: Section) -> String {
    match section {
        Section::All | Section::Summary => report.analysis.document_type.label().to_string(),
        Section::Text => text.to_string(),
        Section::Entities => report
            .entities
            .categories()
            .into_iter()
            .flat_map(|(_, values)| values.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n"),
        Section::Signatures => report
            .signatures
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        Section::Stamps => report
            .stamps
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_analyzer::analyze_all;

    const INVOICE: &str = "Invoice #123 Date: 01/15/2024 Amount: $1,234.56 Signed: John Smith";

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_report(INVOICE, &analyze_all(INVOICE), Section::All)
            .unwrap();
        assert!(output.contains("Document Type: Invoice/Bill"));
        assert!(output.contains("Authorized Parties"));
        assert!(output.contains("Signed Reference"));
        assert!(output.contains("No stamps or seals detected in this document"));
    }

    #[test]
    fn test_json_section() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_report(INVOICE, &analyze_all(INVOICE), Section::Signatures)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["type"], "Signed Reference");
        assert_eq!(value[0]["confidence"], "High");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let report = analyze_all(INVOICE);
        assert_eq!(
            formatter.format_report(INVOICE, &report, Section::Summary).unwrap(),
            "Invoice/Bill"
        );
        assert_eq!(
            formatter.format_report(INVOICE, &report, Section::Signatures).unwrap(),
            "John Smith"
        );
    }

    #[test]
    fn test_empty_text_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_report("", &AnalysisReport::default(), Section::All)
            .unwrap();
        assert!(output.contains("No document content to analyze"));
        assert!(output.contains("No document content to analyze for entities"));
        assert!(output.contains("No document content to analyze for signatures"));
        assert!(output.contains("No document content to analyze for stamps"));
    }

    #[test]
    fn test_text_section_counts_characters() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_report("héllo", &AnalysisReport::default(), Section::Text)
            .unwrap();
        assert!(output.ends_with("5 characters extracted"));
    }

    #[test]
    fn test_context_preview() {
        assert_eq!(context_preview("short"), "short...");
        let long = "x".repeat(150);
        assert_eq!(context_preview(&long).chars().count(), 103);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("saved"), "✓ saved");
    }
}
