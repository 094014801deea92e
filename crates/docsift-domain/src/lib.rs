//! Docsift Domain Layer
//!
//! Value types and trait seams shared by every other docsift crate.
//! Nothing here performs I/O: analyzers produce these values, providers
//! implement the traits, and the CLI renders them.
//!
//! ## Key Concepts
//!
//! - **DocumentAnalysis**: Classification, narrative, and field extractions for one text
//! - **EntityBundle**: Contact details, identifiers, and links found in a text
//! - **SignatureFinding / StampFinding**: Heuristic evidence of signing and stamping
//! - **Confidence**: Ordinal tier used to rank signature findings
//! - **TextExtractor**: The boundary to the external service that turns files into text
//!
//! Every value is built fresh per analysis call and owns its data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod confidence;
pub mod entity;
pub mod signature;
pub mod stamp;
pub mod traits;

// Re-exports for convenience
pub use analysis::{Complexity, DocumentAnalysis, DocumentType, TextStatistics};
pub use confidence::Confidence;
pub use entity::EntityBundle;
pub use signature::{SignatureFinding, SignatureKind};
pub use stamp::{StampFinding, StampKind};
pub use traits::TextExtractor;
