//! Positioned matches produced by the scanner.

use serde::Serialize;

use super::validate::is_valid_url;

/// A matched substring and its position in the scanned string.
///
/// Offsets are zero-based character indices (not bytes); `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextSpan {
    /// Builds a span from a byte range of `haystack`, converting to character offsets.
    pub(crate) fn from_byte_range(haystack: &str, start: usize, end: usize) -> Self {
        let char_start = haystack[..start].chars().count();
        let text = haystack[start..end].to_string();
        let char_end = char_start + text.chars().count();
        Self {
            start: char_start,
            end: char_end,
            text,
        }
    }

    /// True if `offset` lies within the span, inclusive at both ends.
    ///
    /// A cursor sitting just after the last character still counts.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A scanner match plus the validator's verdict on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateUrl {
    pub span: TextSpan,
    pub well_formed: bool,
}

impl CandidateUrl {
    pub(crate) fn new(span: TextSpan) -> Self {
        let well_formed = is_valid_url(&span.text);
        Self { span, well_formed }
    }

    pub fn as_str(&self) -> &str {
        &self.span.text
    }
}
