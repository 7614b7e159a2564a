//! Linkify command: turn bare URLs in a markdown file into titled links.

use anyhow::{Context, Result};
use mdlink_core::detect::{linkify, scan_document, FenceTracking};
use mdlink_core::{fetch_titles, TitleFetchOptions};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Distinct bare URLs in `document`, in order of first appearance.
pub(crate) fn bare_urls(document: &str, tracking: FenceTracking) -> Vec<String> {
    let mut seen = HashSet::new();
    scan_document(document, tracking)
        .into_iter()
        .filter(|f| f.is_bare_link())
        .map(|f| f.url.span.text)
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Resolve titles for every bare URL in `path` and print (or write back) the
/// rewritten document. URLs whose title cannot be resolved stay as they are.
pub async fn run_linkify(
    path: &Path,
    in_place: bool,
    tracking: FenceTracking,
    opts: &TitleFetchOptions,
) -> Result<()> {
    let document =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let urls = bare_urls(&document, tracking);
    let results = fetch_titles(&urls, opts).await;

    let mut titles = HashMap::new();
    for r in results {
        match r.outcome {
            Ok(title) => {
                titles.insert(r.url, title);
            }
            Err(e) => tracing::warn!(url = %r.url, kind = %e.kind, "left unlinked: {}", e),
        }
    }
    tracing::info!("linkify {}: {} of {} URL(s) titled", path.display(), titles.len(), urls.len());

    let rewritten = linkify(&document, &titles, tracking);
    if in_place {
        fs::write(path, rewritten).with_context(|| format!("writing {}", path.display()))?;
    } else {
        print!("{}", rewritten);
    }
    Ok(())
}
