//! Output document model.
//!
//! Paragraphs are emitted as [`TextElement`] records and assembled into a
//! [`ParsedDocument`], the JSON envelope returned to callers:
//!
//! ```json
//! {
//!   "schema_name": "DoclingDocument",
//!   "version": "1.0.0",
//!   "name": "report.pdf",
//!   "body": { "text": "First paragraph\n\nSecond paragraph" },
//!   "texts": [
//!     { "text": "First paragraph", "page": 1, "type": "paragraph" },
//!     { "text": "Second paragraph", "page": 2, "type": "paragraph" }
//!   ],
//!   "page_count": 2
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Schema name written into every envelope.
pub const SCHEMA_NAME: &str = "DoclingDocument";

/// Envelope format version.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Status string reported by [`ServiceStatus::current`].
pub const SERVICE_NAME: &str = "PDF Paragraph Parser";

/// Kind of an extracted text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Body paragraph
    Paragraph,
}

/// One paragraph of output text with its source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    /// Paragraph text, never empty
    pub text: String,
    /// 1-based page number
    pub page: usize,
    /// Element kind
    #[serde(rename = "type")]
    pub element_type: ElementType,
}

impl TextElement {
    /// Create a paragraph element.
    pub fn paragraph(text: impl Into<String>, page: usize) -> Self {
        Self {
            text: text.into(),
            page,
            element_type: ElementType::Paragraph,
        }
    }
}

/// Concatenated body text of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBody {
    /// All paragraphs joined by a blank line
    pub text: String,
}

/// Parsed document envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Always [`SCHEMA_NAME`]
    pub schema_name: String,
    /// Always [`SCHEMA_VERSION`]
    pub version: String,
    /// Source document name
    pub name: String,
    /// Concatenated body text
    pub body: DocumentBody,
    /// Paragraphs in page order
    pub texts: Vec<TextElement>,
    /// Number of pages in the source document, including pages without text
    pub page_count: usize,
}

impl ParsedDocument {
    /// Assemble the envelope from extracted paragraphs.
    pub fn from_elements(name: impl Into<String>, texts: Vec<TextElement>, page_count: usize) -> Self {
        let body = DocumentBody {
            text: join_body_text(&texts),
        };

        Self {
            schema_name: SCHEMA_NAME.to_string(),
            version: SCHEMA_VERSION.to_string(),
            name: name.into(),
            body,
            texts,
            page_count,
        }
    }

    /// Paragraphs extracted from one 1-based page.
    pub fn paragraphs_on_page(&self, page: usize) -> impl Iterator<Item = &TextElement> {
        self.texts.iter().filter(move |t| t.page == page)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Join paragraph texts with a blank line between each.
pub fn join_body_text(texts: &[TextElement]) -> String {
    texts
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Service status payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Service description
    pub status: String,
    /// Library version
    pub version: String,
}

impl ServiceStatus {
    /// Status of this library build.
    pub fn current() -> Self {
        Self {
            status: SERVICE_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}
