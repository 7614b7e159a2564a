//! Code-context classification: inline code spans and fenced blocks.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn inline_code_regex() -> &'static Regex {
    static INLINE_CODE: OnceLock<Regex> = OnceLock::new();
    INLINE_CODE.get_or_init(|| Regex::new(r"`[^`]*`").expect("inline code pattern is a valid regex"))
}

/// How fenced-block membership is decided for lines that are not markers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FenceTracking {
    /// Track open/close fences from the start of the document.
    #[default]
    Parity,
    /// Treat the whole document as fenced when its first line is a fence marker.
    FirstLine,
}

/// Character-offset ranges `(start, end)` of backtick-delimited spans on one line.
///
/// `end` is one past the closing backtick.
pub fn inline_code_spans(line: &str) -> Vec<(usize, usize)> {
    inline_code_regex()
        .find_iter(line)
        .map(|m| {
            let start = line[..m.start()].chars().count();
            (start, start + m.as_str().chars().count())
        })
        .collect()
}

/// True if `offset` falls within an inline code span on `line`, boundaries included.
pub fn is_in_inline_code(line: &str, offset: usize) -> bool {
    inline_code_spans(line)
        .into_iter()
        .any(|(start, end)| offset >= start && offset <= end)
}

/// Splits a fence marker line into (fence char, run length, info string).
fn parse_fence(line: &str) -> Option<(char, usize, &str)> {
    let trimmed = line.trim_start();
    let fence_char = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = trimmed.chars().take_while(|c| *c == fence_char).count();
    if run < 3 {
        return None;
    }
    // Fence chars are ASCII, so `run` is also a byte length.
    Some((fence_char, run, &trimmed[run..]))
}

/// True if `line` opens or closes a fenced block (three backticks or tildes
/// after leading whitespace).
pub fn is_fence_marker(line: &str) -> bool {
    parse_fence(line).is_some()
}

/// Line-by-line fenced-block state.
///
/// A fence closes only on a marker of the same character, at least as long as
/// the opener, with no info string.
#[derive(Debug, Clone, Default)]
pub struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while inside an unclosed fence.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Feeds the next line. Returns true if it was a fence marker line.
    pub fn advance(&mut self, line: &str) -> bool {
        let Some((fence_char, run, info)) = parse_fence(line) else {
            return false;
        };
        match self.open {
            None => self.open = Some((fence_char, run)),
            Some((open_char, open_run)) => {
                if fence_char == open_char && run >= open_run && info.trim().is_empty() {
                    self.open = None;
                }
            }
        }
        true
    }
}

fn fence_open_before(document: &str, line_index: usize) -> bool {
    let mut tracker = FenceTracker::new();
    for line in document.lines().take(line_index) {
        tracker.advance(line);
    }
    tracker.is_open()
}

/// True if `offset` on line `line_index` of `document` is inside code.
///
/// Inline code, fence marker lines, and lines inside an open fence all count.
/// An out-of-range line is never in code.
pub fn is_in_code_block(
    document: &str,
    line_index: usize,
    offset: usize,
    tracking: FenceTracking,
) -> bool {
    let Some(line) = document.lines().nth(line_index) else {
        return false;
    };
    if is_in_inline_code(line, offset) || is_fence_marker(line) {
        return true;
    }
    match tracking {
        FenceTracking::Parity => fence_open_before(document, line_index),
        FenceTracking::FirstLine => document.lines().next().is_some_and(is_fence_marker),
    }
}
