//! Line predicates shared by the type-table and position-table readers.
//!
//! The format has no grammar. Sections are found by case-insensitive
//! substring search, so `"ntyp"` matches anywhere in a line, including inside
//! comments and longer words.

pub(super) const TYPE_COUNT_KEYWORD: &str = "ntyp";
pub(super) const TYPE_HEADER_KEYWORDS: [&str; 2] = ["typ", "ncmp"];
pub(super) const TYPE_TABLE_TERMINATORS: [&str; 2] = ["natm", "atmicx"];
pub(super) const POSITION_MARKERS: [&str; 2] = ["atmicx", "atmtyp"];
const END_KEYWORD: &str = "end";

/// True for blank lines and lines whose first non-space character is a
/// lowercase `c` or `#`.
///
/// The `c` test is case-sensitive: a record starting with `Cu_...` is data.
pub fn is_comment_or_blank(line: &str) -> bool {
    let stripped = line.trim();
    stripped.is_empty() || stripped.starts_with('c') || stripped.starts_with('#')
}

/// True if `keyword` occurs anywhere in the lower-cased line.
pub fn mentions(line: &str, keyword: &str) -> bool {
    line.to_lowercase().contains(keyword)
}

pub fn mentions_any(line: &str, keywords: &[&str]) -> bool {
    let lowered = line.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

pub fn mentions_all(line: &str, keywords: &[&str]) -> bool {
    let lowered = line.to_lowercase();
    keywords.iter().all(|k| lowered.contains(k))
}

/// True if the stripped, lower-cased line contains `end`.
pub fn is_end_marker(line: &str) -> bool {
    mentions(line.trim(), END_KEYWORD)
}

pub fn is_position_marker(line: &str) -> bool {
    mentions_any(line, &POSITION_MARKERS)
}

/// Separator rules such as `c-----`; dropped from the position preamble on
/// write because the writer emits its own.
pub fn is_separator(line: &str) -> bool {
    line.trim().starts_with("c---")
}
