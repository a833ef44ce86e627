//! Cross-page line frequency analysis.
//!
//! Running headers, footers and confidentiality notices repeat verbatim on many
//! pages, while body text rarely does. This module counts, for every distinct
//! collapsed line, on how many *distinct pages* it occurs.
//!
//! Counting is done in two phases:
//! 1. Every page is reduced to the set of its distinct non-empty collapsed lines
//! 2. The per-page sets are folded into one table, adding 1 per page
//!
//! A line repeated on the same page therefore contributes only once for that
//! page. The table needs every page before it is complete; callers build it once
//! after normalization and share it read-only afterwards.

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;

use crate::text::{collapse_whitespace, split_lines};

/// Number of distinct pages on which each collapsed line appears.
///
/// Keys are kept in first-seen order (page order, then line order), which makes
/// iteration deterministic. For every key, `1 <= count <= page_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFrequencyTable {
    counts: IndexMap<String, usize>,
    page_count: usize,
}

impl LineFrequencyTable {
    /// Build the table from every normalized page of a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_paragraphs::layout::LineFrequencyTable;
    ///
    /// let pages = vec![
    ///     "Title\nfirst body\nfirst body".to_string(),
    ///     "  Title \nsecond body".to_string(),
    /// ];
    /// let table = LineFrequencyTable::build(&pages);
    /// assert_eq!(table.count("Title"), 2);
    /// assert_eq!(table.count("first body"), 1);
    /// assert_eq!(table.count("missing"), 0);
    /// ```
    pub fn build(pages: &[String]) -> Self {
        let page_sets: Vec<IndexSet<String>> = pages.iter().map(|p| distinct_lines(p)).collect();
        Self::from_page_sets(page_sets)
    }

    /// Same as [`build`](Self::build), collecting the per-page sets in parallel.
    pub fn build_parallel(pages: &[String]) -> Self {
        let page_sets: Vec<IndexSet<String>> =
            pages.par_iter().map(|p| distinct_lines(p)).collect();
        Self::from_page_sets(page_sets)
    }

    fn from_page_sets(page_sets: Vec<IndexSet<String>>) -> Self {
        let page_count = page_sets.len();
        let counts = page_sets
            .into_iter()
            .fold(IndexMap::new(), |mut acc, lines| {
                for line in lines {
                    *acc.entry(line).or_insert(0) += 1;
                }
                acc
            });

        log::debug!(
            "Line frequency table: {} distinct lines across {} pages",
            counts.len(),
            page_count
        );

        Self { counts, page_count }
    }

    /// Number of distinct pages containing `line` (already collapsed). Zero when unseen.
    pub fn count(&self, line: &str) -> usize {
        self.counts.get(line).copied().unwrap_or(0)
    }

    /// Number of pages the table was built from.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no non-empty line was seen at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(line, page count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(line, &count)| (line.as_str(), count))
    }
}

/// Distinct non-empty collapsed lines of one page.
fn distinct_lines(page: &str) -> IndexSet<String> {
    split_lines(page)
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_counts_distinct_pages() {
        let table = LineFrequencyTable::build(&pages(&[
            "Header\nbody one",
            "Header\nbody two",
            "Header\nbody three",
        ]));
        assert_eq!(table.count("Header"), 3);
        assert_eq!(table.count("body two"), 1);
        assert_eq!(table.page_count(), 3);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_repeat_within_page_counts_once() {
        let table = LineFrequencyTable::build(&pages(&["same\nsame\nsame", "other"]));
        assert_eq!(table.count("same"), 1);
    }

    #[test]
    fn test_whitespace_variants_share_a_key() {
        let table = LineFrequencyTable::build(&pages(&["  Running   Title ", "Running\tTitle"]));
        assert_eq!(table.count("Running Title"), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let table = LineFrequencyTable::build(&pages(&["\n   \n\t\n", ""]));
        assert!(table.is_empty());
        assert_eq!(table.count(""), 0);
        assert_eq!(table.page_count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let table = LineFrequencyTable::build(&[]);
        assert!(table.is_empty());
        assert_eq!(table.page_count(), 0);
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let input = pages(&["a\nb\nc", "b\nc", "c\nd", "", "a"]);
        assert_eq!(
            LineFrequencyTable::build(&input),
            LineFrequencyTable::build_parallel(&input)
        );
    }

    #[test]
    fn test_iteration_is_first_seen_order() {
        let table = LineFrequencyTable::build(&pages(&["z\ny", "x\nz"]));
        let keys: Vec<&str> = table.iter().map(|(line, _)| line).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_counts_within_bounds() {
        let input = pages(&["a\nb", "a\na\nc", "b\nc\na"]);
        let table = LineFrequencyTable::build(&input);
        for (_, count) in table.iter() {
            assert!(count >= 1 && count <= table.page_count());
        }
    }
}
