//! Best-effort page title extraction built on `scraper`.
//!
//! Prefers the first `<title>`, falls back to the first `<h1>`. Text is only
//! trimmed; internal whitespace is kept as the page wrote it.

use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::OnceLock;

/// Why no title could be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// Markup parsed, but neither `<title>` nor `<h1>` has text.
    NotFound,
    /// The body is not markup at all (binary content).
    Unparsable,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NotFound => write!(f, "no <title> or <h1> text"),
            ExtractError::Unparsable => write!(f, "body is not parseable markup"),
        }
    }
}

impl std::error::Error for ExtractError {}

struct Selectors {
    title: Selector,
    h1: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        title: Selector::parse("title").expect("title selector"),
        h1: Selector::parse("h1").expect("h1 selector"),
    })
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el: ElementRef<'_>| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Extracts the most representative title from `html`.
///
/// html5ever recovers from malformed markup, so the only unparsable input is
/// content that is not text markup at all (it contains NUL bytes).
pub fn extract(html: &str) -> Result<String, ExtractError> {
    if html.contains('\0') {
        return Err(ExtractError::Unparsable);
    }
    let document = Html::parse_document(html);
    let sel = selectors();
    if let Some(title) = first_text(&document, &sel.title) {
        return Ok(title);
    }
    match first_text(&document, &sel.h1) {
        Some(heading) => {
            tracing::debug!("no <title>; using first <h1>");
            Ok(heading)
        }
        None => Err(ExtractError::NotFound),
    }
}

/// Like [`extract`], but both failure kinds collapse to `None`.
pub fn extract_title_from_html(html: &str) -> Option<String> {
    extract(html).ok()
}
