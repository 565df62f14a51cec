//! Common types for parsers

use std::ops::Range;

/// A `uses:` value found in workflow text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsesMatch {
    /// The value with quoting removed, or the raw text if it could not be unquoted
    pub value: String,
    /// Quote character wrapping the value in the source, if it was unquoted successfully
    pub quote: Option<char>,
    /// Byte offset of the raw value (including quotes) in the source (start)
    pub start_offset: usize,
    /// Byte offset of the raw value (including quotes) in the source (end)
    pub end_offset: usize,
    /// Line number (0-indexed)
    pub line: usize,
}

impl UsesMatch {
    /// Byte range of the raw value in the source
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Whether the value refers to something that has no tags to look up:
    /// a local action (`./path`) or a container image (`docker://...`).
    pub fn is_local_or_docker(&self) -> bool {
        self.value.starts_with("./")
            || self.value.starts_with("../")
            || self.value.starts_with("docker://")
    }
}
