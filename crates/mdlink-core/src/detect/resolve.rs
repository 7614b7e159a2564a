//! Maps a cursor position or a selection to the URLs it covers.

use serde::Serialize;

use super::context::{is_in_code_block, FenceTracking};
use super::pattern::find_candidates;
use super::span::CandidateUrl;

/// The URL under the cursor, tagged with whether it sits inside code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlAtPosition {
    pub url: CandidateUrl,
    pub in_code: bool,
}

impl UrlAtPosition {
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Valid and malformed matches from a block of text, each in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionScan {
    pub valid: Vec<String>,
    pub malformed: Vec<String>,
}

impl SelectionScan {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.malformed.is_empty()
    }
}

/// Finds the URL covering `offset` on line `line_index` of `document`.
///
/// A match is returned when it is well-formed or when it lies in code; code
/// membership is reported in [`UrlAtPosition::in_code`] rather than filtered.
/// Returns `None` for an out-of-range line or when nothing qualifies.
pub fn url_at_position(
    document: &str,
    line_index: usize,
    offset: usize,
    tracking: FenceTracking,
) -> Option<UrlAtPosition> {
    let line = document.lines().nth(line_index)?;
    find_candidates(line)
        .filter(|span| span.contains(offset))
        .find_map(|span| {
            let url = CandidateUrl::new(span);
            let in_code = is_in_code_block(document, line_index, offset, tracking);
            (in_code || url.well_formed).then_some(UrlAtPosition { url, in_code })
        })
}

/// Single-line form of [`url_at_position`], without any fence context.
pub fn url_at_line_offset(line: &str, offset: usize) -> Option<UrlAtPosition> {
    let first_line = line.lines().next().unwrap_or("");
    url_at_position(first_line, 0, offset, FenceTracking::Parity)
}

/// Every well-formed URL in `selection`, in order of first appearance.
pub fn urls_in_selection(selection: &str) -> Vec<String> {
    scan_selection(selection).valid
}

/// Splits the matches in `selection` into well-formed and malformed URLs.
pub fn scan_selection(selection: &str) -> SelectionScan {
    let mut scan = SelectionScan::default();
    for span in find_candidates(selection) {
        let candidate = CandidateUrl::new(span);
        if candidate.well_formed {
            scan.valid.push(candidate.span.text);
        } else {
            scan.malformed.push(candidate.span.text);
        }
    }
    scan
}
