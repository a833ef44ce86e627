//! Page text sources.
//!
//! Paragraph reconstruction only needs "one string per page, in page order".
//! [`PageTextSource`] is that seam: the PDF-backed implementation lives in
//! [`pdf`], and [`PrecomputedPages`] serves text a caller already holds.

pub mod pdf;

pub use pdf::{check_pdf_header, PdfExtractTextSource};

use crate::error::Result;

/// Something that turns document bytes into per-page raw text.
///
/// Implementations return one entry per page, in page order. Pages without
/// extractable text are returned as empty strings, not skipped.
pub trait PageTextSource: Send + Sync {
    /// Extract the raw text of every page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// A source that ignores the input bytes and returns fixed pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecomputedPages {
    pages: Vec<String>,
}

impl PrecomputedPages {
    /// Wrap already-extracted page text.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageTextSource for PrecomputedPages {
    fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<String>> {
        Ok(self.pages.clone())
    }
}
