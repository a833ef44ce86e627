//! Line-level text handling.
//!
//! - [`normalize`]: per-page canonicalization and whitespace collapsing
//! - [`hyphenation`]: rejoining words broken across lines with a hyphen

pub mod hyphenation;
pub mod normalize;

pub use hyphenation::{ends_with_break_hyphen, ParagraphBuffer};
pub use normalize::{collapse_whitespace, normalize_page, normalize_pages, split_lines};
