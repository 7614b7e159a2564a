//! URL detection in markdown text.
//!
//! Layers a syntactic scanner (`pattern`), a semantic check (`validate`) and
//! code-context classification (`context`) under the position and selection
//! resolvers the editor layer calls into.

mod context;
mod document;
mod pattern;
mod resolve;
mod span;
mod validate;

pub use context::{
    inline_code_spans, is_fence_marker, is_in_code_block, is_in_inline_code, FenceTracker,
    FenceTracking,
};
pub use document::{linkify, scan_document, DocumentUrl};
pub use pattern::{find_candidates, find_urls, url_regex};
pub use resolve::{
    scan_selection, url_at_line_offset, url_at_position, urls_in_selection, SelectionScan,
    UrlAtPosition,
};
pub use span::{CandidateUrl, TextSpan};
pub use validate::is_valid_url;
