//! Whole-document scanning and bare-link rewriting.

use serde::Serialize;
use std::collections::HashMap;

use super::context::{inline_code_spans, is_fence_marker, FenceTracker, FenceTracking};
use super::pattern::find_candidates;
use super::span::CandidateUrl;
use crate::markdown::markdown_link;

/// Characters that mark a URL as already being part of link syntax when they
/// immediately precede it: `[text](url)`, `<url>`, `[url]`.
const LINK_OPENERS: [char; 3] = ['(', '<', '['];

/// A URL found while scanning a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentUrl {
    /// Zero-based line index.
    pub line: usize,
    pub url: CandidateUrl,
    pub in_code: bool,
    /// Preceded by `(`, `<` or `[`.
    pub already_linked: bool,
}

impl DocumentUrl {
    /// Well-formed, outside code, and not already inside link syntax.
    pub fn is_bare_link(&self) -> bool {
        self.url.well_formed && !self.in_code && !self.already_linked
    }
}

/// Every URL candidate in `document`, with code context from a single pass.
pub fn scan_document(document: &str, tracking: FenceTracking) -> Vec<DocumentUrl> {
    let first_line_fenced = document.lines().next().is_some_and(is_fence_marker);
    let mut tracker = FenceTracker::new();
    let mut found = Vec::new();

    for (line_index, line) in document.lines().enumerate() {
        let fenced = match tracking {
            FenceTracking::Parity => tracker.is_open(),
            FenceTracking::FirstLine => first_line_fenced,
        };
        let marker = tracker.advance(line);
        let code_spans = inline_code_spans(line);

        for span in find_candidates(line) {
            let in_inline_code = code_spans
                .iter()
                .any(|&(start, end)| span.start >= start && span.start <= end);
            let already_linked = span
                .start
                .checked_sub(1)
                .and_then(|i| line.chars().nth(i))
                .is_some_and(|c| LINK_OPENERS.contains(&c));
            found.push(DocumentUrl {
                line: line_index,
                url: CandidateUrl::new(span),
                in_code: fenced || marker || in_inline_code,
                already_linked,
            });
        }
    }
    found
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}

/// Rewrites bare URLs that have an entry in `titles` into `[title](url)`.
///
/// URLs in code, malformed URLs, URLs already inside link syntax and URLs
/// without a title are left untouched. Line endings are preserved.
pub fn linkify(document: &str, titles: &HashMap<String, String>, tracking: FenceTracking) -> String {
    let found = scan_document(document, tracking);
    let mut pending = found.iter().filter(|f| f.is_bare_link()).peekable();
    let mut out = String::with_capacity(document.len());

    for (line_index, raw) in document.split_inclusive('\n').enumerate() {
        let (body, ending) = split_line_ending(raw);
        let chars: Vec<char> = body.chars().collect();
        let mut cursor = 0usize;

        while let Some(hit) = pending.next_if(|f| f.line == line_index) {
            let Some(title) = titles.get(hit.url.as_str()) else {
                continue;
            };
            out.extend(&chars[cursor..hit.url.span.start]);
            out.push_str(&markdown_link(title, hit.url.as_str()));
            cursor = hit.url.span.end;
        }
        out.extend(&chars[cursor..]);
        out.push_str(ending);
    }
    out
}
