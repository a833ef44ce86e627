//! High-level parsing API.
//!
//! This module is the boundary between callers and the paragraph pipeline:
//! - Decoding a base64 request payload
//! - Enforcing the payload size limit
//! - Running the page text source (the PDF extractor)
//! - Assembling the [`ParsedDocument`] envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_paragraphs::api::DocumentParser;
//!
//! let parser = DocumentParser::new();
//! let doc = parser.parse_file("report.pdf")?;
//! for para in &doc.texts {
//!     println!("[p{}] {}", para.page, para.text);
//! }
//! ```
//!
//! ## Request payloads
//!
//! ```
//! use pdf_paragraphs::api::{DocumentParser, ParseRequest};
//! use pdf_paragraphs::extractors::PrecomputedPages;
//! use pdf_paragraphs::ExtractionConfig;
//!
//! let parser = DocumentParser::with_source(
//!     ExtractionConfig::default(),
//!     PrecomputedPages::new(["Hello\nworld"]),
//! );
//! let request = ParseRequest::from_bytes(b"%PDF-1.7");
//! let doc = parser.parse_request(&request, "hello.pdf").unwrap();
//! assert_eq!(doc.body.text, "Hello world");
//! ```

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::config::ExtractionConfig;
use crate::document::ParsedDocument;
use crate::error::{Error, Result};
use crate::extractors::{PageTextSource, PdfExtractTextSource};
use crate::pipeline::ParagraphPipeline;

/// Name used when the caller does not supply one.
pub const DEFAULT_DOCUMENT_NAME: &str = "document.pdf";

/// Parse request payload: `{"pdf_base64": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Base64-encoded PDF bytes
    #[serde(default)]
    pub pdf_base64: String,
}

impl ParseRequest {
    /// Build a request by encoding raw PDF bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            pdf_base64: STANDARD.encode(bytes),
        }
    }
}

/// Decode a base64 payload, ignoring embedded whitespace and line breaks.
///
/// An empty (or whitespace-only) payload is [`Error::MissingPayload`].
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::MissingPayload);
    }
    Ok(STANDARD.decode(compact.as_bytes())?)
}

/// Parses PDF payloads into paragraph documents.
#[derive(Debug, Clone)]
pub struct DocumentParser<S = PdfExtractTextSource> {
    source: S,
    pipeline: ParagraphPipeline,
}

impl DocumentParser<PdfExtractTextSource> {
    /// Create a parser backed by the PDF extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a parser backed by the PDF extractor.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self::with_source(config, PdfExtractTextSource::new())
    }
}

impl Default for DocumentParser<PdfExtractTextSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PageTextSource> DocumentParser<S> {
    /// Create a parser over a custom page text source.
    pub fn with_source(config: ExtractionConfig, source: S) -> Self {
        Self {
            source,
            pipeline: ParagraphPipeline::with_config(config),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractionConfig {
        self.pipeline.config()
    }

    /// Parse raw PDF bytes.
    pub fn parse_bytes(&self, bytes: &[u8], name: &str) -> Result<ParsedDocument> {
        let limit = self.config().max_input_bytes;
        if !self.config().accepts_size(bytes.len()) {
            log::warn!("Rejecting {}: {} bytes exceeds limit of {}", name, bytes.len(), limit);
            return Err(Error::PayloadTooLarge {
                size: bytes.len(),
                limit,
            });
        }

        log::info!("Parsing {} ({} bytes)", name, bytes.len());
        let pages = self.source.extract_pages(bytes)?;
        let texts = self.pipeline.process(&pages);

        Ok(ParsedDocument::from_elements(name, texts, pages.len()))
    }

    /// Parse a base64-encoded PDF.
    pub fn parse_base64(&self, encoded: &str, name: &str) -> Result<ParsedDocument> {
        let bytes = decode_payload(encoded)?;
        self.parse_bytes(&bytes, name)
    }

    /// Parse a request payload.
    pub fn parse_request(&self, request: &ParseRequest, name: &str) -> Result<ParsedDocument> {
        self.parse_base64(&request.pdf_base64, name)
    }

    /// Parse a JSON request body (`{"pdf_base64": "..."}`).
    pub fn parse_request_json(&self, body: &str, name: &str) -> Result<ParsedDocument> {
        let request: ParseRequest = serde_json::from_str(body)?;
        self.parse_request(&request, name)
    }

    /// Read and parse a PDF file. The file name becomes the document name.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedDocument> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string());
        self.parse_bytes(&bytes, &name)
    }
}
