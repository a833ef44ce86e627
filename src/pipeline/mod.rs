//! Document-level paragraph extraction pipeline.
//!
//! ```text
//! Raw page text (one String per page)
//!     ↓
//! [normalize_page]          per page, independent
//!     ↓
//! ── barrier: all pages normalized ──
//!     ↓
//! [LineFrequencyTable]      once per document, read-only afterwards
//!     ↓
//! [build_paragraphs]        per page, independent
//!     ↓
//! TextElement[] (page order, 1-based page numbers)
//! ```
//!
//! Both per-page stages run on the rayon pool when
//! [`ExtractionConfig::parallel`] is set. Output order does not depend on it.

use rayon::prelude::*;

use crate::config::ExtractionConfig;
use crate::document::TextElement;
use crate::layout::{build_paragraphs, LineFrequencyTable};
use crate::text::normalize_pages;

/// Orchestrates normalization, frequency analysis and paragraph building.
#[derive(Debug, Clone, Default)]
pub struct ParagraphPipeline {
    config: ExtractionConfig,
}

impl ParagraphPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract paragraphs from every page of a document.
    ///
    /// Pages without text contribute nothing. Elements come out in page order
    /// and, within a page, top to bottom.
    pub fn process(&self, raw_pages: &[String]) -> Vec<TextElement> {
        let page_count = raw_pages.len();
        let parallel = self.config.parallel;

        let pages = normalize_pages(raw_pages, parallel);
        log::debug!("Normalized {} pages", page_count);

        let table = if parallel {
            LineFrequencyTable::build_parallel(&pages)
        } else {
            LineFrequencyTable::build(&pages)
        };

        let per_page: Vec<Vec<String>> = if parallel {
            pages
                .par_iter()
                .map(|page| build_paragraphs(page, &table, page_count))
                .collect()
        } else {
            pages
                .iter()
                .map(|page| build_paragraphs(page, &table, page_count))
                .collect()
        };

        let elements: Vec<TextElement> = per_page
            .into_iter()
            .enumerate()
            .flat_map(|(index, paragraphs)| {
                paragraphs
                    .into_iter()
                    .map(move |text| TextElement::paragraph(text, index + 1))
            })
            .collect();

        log::info!("Extracted {} paragraphs from {} pages", elements.len(), page_count);
        elements
    }
}

/// Extract paragraphs with the default pipeline.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::pipeline::extract_paragraphs;
///
/// let pages = vec![
///     "Confidential Draft\nIntro text\n\n1".to_string(),
///     "Confidential Draft\nMore text".to_string(),
/// ];
/// let elements = extract_paragraphs(&pages);
/// let texts: Vec<&str> = elements.iter().map(|e| e.text.as_str()).collect();
/// assert_eq!(texts, vec!["Intro text", "More text"]);
/// assert_eq!(elements[1].page, 2);
/// ```
pub fn extract_paragraphs(raw_pages: &[String]) -> Vec<TextElement> {
    ParagraphPipeline::new().process(raw_pages)
}
