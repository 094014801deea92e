//! Docsift Analyzer
//!
//! Mines text extracted from an uploaded document for structured findings.
//!
//! # Overview
//!
//! Every analyzer is a pure function over one immutable string. They share no
//! state, never fail, and return the "no content" value for empty input, so
//! they can be called in any order, repeatedly, from any thread.
//!
//! # Architecture
//!
//! ```text
//! File → DocumentProcessor → TextExtractor → text ─┬→ analyze_document
//!                                                  ├→ extract_entities
//!                                                  ├→ detect_signatures
//!                                                  └→ detect_stamps
//! ```
//!
//! # Analyzers
//!
//! - **Classification**: keyword-driven document type and purpose
//! - **Fields**: parties, dates, amounts, organizations
//! - **Narrative**: text statistics plus a templated description and summary
//! - **Entities**: emails, phone numbers, addresses, ID numbers, URLs
//! - **Signatures**: phrase and layout cues, ranked by confidence
//! - **Stamps**: seal, notary, filing, payment cues, date stamps, references
//!
//! # Example Usage
//!
//! ```
//! use docsift_analyzer::{analyze_document, detect_signatures};
//! use docsift_domain::{Confidence, DocumentType};
//!
//! let text = "Invoice #123 Date: 01/15/2024 Amount: $1,234.56 Signed: John Smith";
//!
//! let analysis = analyze_document(text);
//! assert_eq!(analysis.document_type, DocumentType::InvoiceBill);
//! assert!(analysis.amounts.contains(&"$1,234.56".to_string()));
//!
//! let signatures = detect_signatures(text);
//! assert!(signatures
//!     .iter()
//!     .any(|s| s.content == "John Smith" && s.confidence == Confidence::High));
//! ```

#![warn(missing_docs)]

mod analyzer;
mod collect;
mod config;
mod context;
mod error;
mod processor;
mod types;

pub mod classifier;
pub mod document;
pub mod entities;
pub mod narrative;
pub mod signatures;
pub mod stamps;


pub use analyzer::{
    analyze_all, analyze_document, detect_signatures, detect_stamps, extract_entities, Analyzer,
};
pub use classifier::classify_document;
pub use config::AnalyzerConfig;
pub use document::{extract_amounts, extract_dates, extract_organizations, extract_parties};
pub use error::AnalyzerError;
pub use processor::DocumentProcessor;
pub use types::{AnalysisReport, DocumentReport, ProcessingMetadata, SourceDocument};
