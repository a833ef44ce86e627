//! PDF-backed page text source.
//!
//! Uses [`pdf_extract`] to pull one text string per page. `pdf_extract` can
//! panic on malformed input instead of returning an error, so the call is
//! wrapped in [`std::panic::catch_unwind`] and panics are reported as
//! [`Error::MalformedPdf`].

use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};
use crate::extractors::PageTextSource;

/// How far into the input the `%PDF-` marker may appear.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// PDF magic bytes.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Check that the bytes look like a PDF file.
///
/// The `%PDF-` marker must appear within the first 1024 bytes. Some producers
/// write a few bytes of junk before the header, so it is not required at
/// offset zero.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::extractors::check_pdf_header;
///
/// assert!(check_pdf_header(b"%PDF-1.7\n").is_ok());
/// assert!(check_pdf_header(b"GIF89a").is_err());
/// ```
pub fn check_pdf_header(bytes: &[u8]) -> Result<()> {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    if window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
        return Ok(());
    }

    let found = String::from_utf8_lossy(&bytes[..bytes.len().min(PDF_MAGIC.len())]).into_owned();
    Err(Error::MalformedPdf(format!(
        "Invalid PDF header: expected '%PDF-', found '{}'",
        found
    )))
}

/// Page text source over the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractTextSource;

impl PdfExtractTextSource {
    /// Create a new source.
    pub fn new() -> Self {
        Self
    }
}

impl PageTextSource for PdfExtractTextSource {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        check_pdf_header(bytes)?;

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        match result {
            Ok(Ok(pages)) => {
                log::debug!("Extracted text from {} pages", pages.len());
                Ok(pages)
            },
            Ok(Err(e)) => Err(Error::MalformedPdf(format!("PDF extraction failed: {}", e))),
            Err(_) => {
                log::warn!("PDF text extractor panicked on malformed input");
                Err(Error::MalformedPdf(
                    "PDF extraction panicked (malformed document)".to_string(),
                ))
            },
        }
    }
}
