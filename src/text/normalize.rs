//! Page text normalization.
//!
//! Raw page text coming out of a PDF extractor carries two kinds of noise that
//! every later stage would otherwise have to special-case:
//!
//! - Soft hyphens (U+00AD) mark optional break points and are never visible text
//! - Carriage returns show up alongside or instead of line feeds
//!
//! [`normalize_page`] removes the first and turns the second into `\n`. Nothing
//! else is touched, so a `\r\n` pair becomes two line breaks.
//!
//! [`collapse_whitespace`] produces the collapsed form of a line that is used as
//! the frequency-table key and as the paragraph builder's working form.

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

/// Soft hyphen (U+00AD).
pub const SOFT_HYPHEN: char = '\u{00AD}';

lazy_static! {
    /// Any run of whitespace characters
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonicalize one page of raw text.
///
/// Deletes every soft hyphen and replaces every carriage return with a line
/// feed. Total over all inputs; an empty page stays empty.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::text::normalize_page;
///
/// assert_eq!(normalize_page("opti\u{00AD}onal\rbreak"), "optional\nbreak");
/// assert_eq!(normalize_page(""), "");
/// ```
pub fn normalize_page(raw: &str) -> String {
    if !raw.contains(|c: char| c == SOFT_HYPHEN || c == '\r') {
        return raw.to_string();
    }

    raw.chars()
        .filter(|&c| c != SOFT_HYPHEN)
        .map(|c| if c == '\r' { '\n' } else { c })
        .collect()
}

/// Normalize every page of a document, preserving page order.
pub fn normalize_pages(raw_pages: &[String], parallel: bool) -> Vec<String> {
    if parallel {
        raw_pages.par_iter().map(|p| normalize_page(p)).collect()
    } else {
        raw_pages.iter().map(|p| normalize_page(p)).collect()
    }
}

/// Split normalized page text into lines on `\n`.
///
/// Unlike [`str::lines`], a trailing line feed yields a final empty line and no
/// `\r` handling is attempted; normalization has already removed them.
pub fn split_lines(page: &str) -> impl Iterator<Item = &str> {
    page.split('\n')
}

/// Trim a line and reduce each internal whitespace run to a single space.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::text::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Confidential \t  Draft  "), "Confidential Draft");
/// assert_eq!(collapse_whitespace(" \t "), "");
/// ```
pub fn collapse_whitespace(line: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(line.trim(), " ").into_owned()
}
