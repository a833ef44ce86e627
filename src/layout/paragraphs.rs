//! Paragraph reconstruction for a single page.
//!
//! Given one normalized page, the document-wide [`LineFrequencyTable`] and the
//! document page count, [`build_paragraphs`] runs:
//!
//! 1. Split into lines and collapse each to its working form (blank lines kept)
//! 2. Drop running headers/footers and page-number stamps
//! 3. Group consecutive non-blank lines into paragraphs at blank lines,
//!    rejoining hyphen-broken words on the way
//!
//! Every function here is pure and works on one page, so pages can be built
//! independently once the table exists.

use crate::layout::artifacts::should_drop;
use crate::layout::line_frequency::LineFrequencyTable;
use crate::text::{collapse_whitespace, split_lines, ParagraphBuffer};

/// Working-form lines of a page with page artifacts removed.
///
/// Dropped lines vanish entirely; they are not replaced by blank markers.
pub fn filter_lines(page: &str, table: &LineFrequencyTable, page_count: usize) -> Vec<String> {
    split_lines(page)
        .map(collapse_whitespace)
        .filter(|line| !should_drop(line, table, page_count))
        .collect()
}

/// Group working-form lines into paragraphs at blank-line boundaries.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::layout::group_paragraphs;
///
/// let lines = ["Para one line A", "Para one line B", "", "Para two"];
/// assert_eq!(
///     group_paragraphs(lines),
///     vec!["Para one line A Para one line B", "Para two"]
/// );
/// ```
pub fn group_paragraphs<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paragraphs = Vec::new();
    let mut buffer = ParagraphBuffer::new();

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            paragraphs.extend(buffer.flush());
        } else {
            buffer.push(line);
        }
    }
    paragraphs.extend(buffer.flush());

    paragraphs
}

/// Reconstruct the paragraphs of one normalized page, top to bottom.
///
/// A page with no text, or with nothing left after artifact removal, yields
/// no paragraphs.
pub fn build_paragraphs(page: &str, table: &LineFrequencyTable, page_count: usize) -> Vec<String> {
    if page.trim().is_empty() {
        return Vec::new();
    }
    group_paragraphs(filter_lines(page, table, page_count))
}
