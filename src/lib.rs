//! # PDF Paragraphs
//!
//! Reconstructs readable paragraphs from the flat per-page text that PDF text
//! extraction produces.
//!
//! ## What it does
//!
//! - **Normalization**: strips soft hyphens, turns carriage returns into line feeds
//! - **Running header/footer removal**: short lines repeated on two or more pages
//!   of a multi-page document are dropped
//! - **Page-number removal**: lines of one or two digits are dropped
//! - **Hyphenation rejoin**: "exam-" + "ple" becomes "example"
//! - **Paragraph grouping**: consecutive lines are joined, blank lines separate paragraphs
//!
//! Layout-aware reconstruction (columns, tables), font heuristics, OCR and
//! heading classification are out of scope.
//!
//! ## Architecture
//!
//! ```text
//! PDF bytes ─[extractors]→ page text ─[text::normalize]→ normalized pages
//!     ─[layout::LineFrequencyTable]→ table ─[layout::build_paragraphs]→ paragraphs
//!     ─[document]→ ParsedDocument (JSON envelope)
//! ```
//!
//! The three text stages are pure functions that never fail. Errors only come
//! from the boundary in [`api`]: payload decoding, the size limit and PDF parsing.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_paragraphs::extract_paragraphs;
//!
//! let pages = vec![
//!     "Annual Report\nThe year began with a reorgan-\nization.\n\n1".to_string(),
//!     "Annual Report\nRevenue grew.".to_string(),
//! ];
//! let paragraphs = extract_paragraphs(&pages);
//!
//! assert_eq!(paragraphs[0].text, "The year began with a reorganization.");
//! assert_eq!(paragraphs[1].text, "Revenue grew.");
//! assert_eq!(paragraphs[1].page, 2);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Line-level text handling
pub mod text;

// Frequency analysis and paragraph building
pub mod layout;

// Document-level orchestration
pub mod pipeline;

// Output model
pub mod document;

// Page text sources
pub mod extractors;

// High-level API
pub mod api;

// Python bindings (optional)
#[cfg(feature = "python")]
mod python;

// Re-exports
pub use api::{DocumentParser, ParseRequest};
pub use config::ExtractionConfig;
pub use document::{ElementType, ParsedDocument, TextElement};
pub use error::{Error, ErrorResponse, Result};
pub use layout::LineFrequencyTable;
pub use pipeline::{extract_paragraphs, ParagraphPipeline};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
