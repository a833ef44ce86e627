//! Paragraph layout reconstruction for extracted PDF page text.
//!
//! This module turns flat page text into paragraphs:
//! - Cross-page line frequency analysis
//! - Running header/footer and page-number removal
//! - Blank-line paragraph grouping with hyphenation rejoin

pub mod artifacts;
pub mod line_frequency;
pub mod paragraphs;

// Re-export main types
pub use artifacts::{is_page_number, is_running_artifact, should_drop};
pub use line_frequency::LineFrequencyTable;
pub use paragraphs::{build_paragraphs, filter_lines, group_paragraphs};
