//! Page artifact detection.
//!
//! Two kinds of lines are treated as page furniture rather than body text:
//!
//! - **Running headers/footers**: short lines that occur on at least two
//!   distinct pages of a multi-page document
//! - **Page-number stamps**: lines of one or two digits
//!
//! The thresholds are fixed heuristics and are not configurable.

use crate::layout::line_frequency::LineFrequencyTable;

/// Longest line (in characters) still considered a running header or footer.
pub const MAX_ARTIFACT_LINE_CHARS: usize = 80;

/// Minimum number of distinct pages a line must appear on to be a running artifact.
pub const MIN_ARTIFACT_PAGE_HITS: usize = 2;

/// Longest digit-only line treated as a page number.
pub const MAX_PAGE_NUMBER_DIGITS: usize = 2;

/// Check whether a trimmed line is an isolated page-number stamp ("7", "42", "٧").
///
/// Any Unicode numeric character counts as a digit, so non-Latin numerals are
/// recognized too. Longer numbers such as years ("2024") are kept.
pub fn is_page_number(line: &str) -> bool {
    let len = line.chars().count();
    (1..=MAX_PAGE_NUMBER_DIGITS).contains(&len) && line.chars().all(char::is_numeric)
}

/// Check whether a collapsed line repeats across pages like a header or footer.
///
/// Never true for single-page documents: repetition inside one page is not a
/// page-level artifact.
pub fn is_running_artifact(line: &str, table: &LineFrequencyTable, page_count: usize) -> bool {
    page_count > 1
        && !line.is_empty()
        && table.count(line) >= MIN_ARTIFACT_PAGE_HITS
        && line.chars().count() <= MAX_ARTIFACT_LINE_CHARS
}

/// Check whether a collapsed line should be removed before paragraph grouping.
///
/// Blank lines are paragraph boundaries and are never dropped.
pub fn should_drop(line: &str, table: &LineFrequencyTable, page_count: usize) -> bool {
    if line.is_empty() {
        return false;
    }
    is_running_artifact(line, table, page_count) || is_page_number(line)
}
