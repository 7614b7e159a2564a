//! Detect command: classify the URL under a cursor position.

use anyhow::{Context, Result};
use mdlink_core::detect::{url_at_position, FenceTracking, UrlAtPosition};
use mdlink_core::markdown::markdown_link;
use mdlink_core::{fetch_title, TitleFetchOptions};
use std::fs;
use std::path::Path;

/// Message for a position lookup result.
pub(crate) fn describe_position(found: Option<&UrlAtPosition>) -> String {
    match found {
        None => "No URL detected at cursor position".to_string(),
        Some(f) if f.in_code => format!("URL in code block: {}", f.as_str()),
        Some(f) if !f.url.well_formed => format!("Malformed URL detected: {}", f.as_str()),
        Some(f) => format!("URL detected: {}", f.as_str()),
    }
}

/// Print what sits at `line`/`column` of `path`; fetch the title when it is a
/// well-formed URL outside code and `fetch` is set.
pub async fn run_detect(
    path: &Path,
    line: usize,
    column: usize,
    tracking: FenceTracking,
    fetch: Option<TitleFetchOptions>,
) -> Result<()> {
    let document =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let found = url_at_position(&document, line, column, tracking);
    println!("{}", describe_position(found.as_ref()));

    let (Some(found), Some(opts)) = (found, fetch) else {
        return Ok(());
    };
    if found.in_code || !found.url.well_formed {
        return Ok(());
    }

    let result = fetch_title(found.as_str(), &opts).await;
    match result.title() {
        Some(title) => {
            println!("Title: {}", title);
            println!("{}", markdown_link(title, &result.url));
        }
        None => println!(
            "Could not fetch title: {}",
            result.error_message().unwrap_or_default()
        ),
    }
    Ok(())
}
