//! Scan command: list valid and malformed URLs in a block of text.

use anyhow::{Context, Result};
use mdlink_core::detect::{scan_selection, SelectionScan};
use mdlink_core::markdown::render_report;
use mdlink_core::{fetch_titles, TitleFetchOptions};
use std::fs;
use std::io;
use std::path::Path;

/// Messages summarizing a selection scan.
pub(crate) fn describe_scan(scan: &SelectionScan) -> Vec<String> {
    let mut lines = Vec::new();
    if !scan.valid.is_empty() {
        lines.push(format!("Valid URLs detected: {}", scan.valid.join(", ")));
        if !scan.malformed.is_empty() {
            lines.push(format!("Malformed URLs detected: {}", scan.malformed.join(", ")));
        }
    } else if !scan.malformed.is_empty() {
        lines.push(format!(
            "Only malformed URLs detected: {}",
            scan.malformed.join(", ")
        ));
    } else {
        lines.push("No URLs detected in selection".to_string());
    }
    lines
}

/// Scan `path` (or stdin) and print the summary; with `fetch`, also resolve
/// titles for the valid URLs and print the markdown report.
pub async fn run_scan(path: Option<&Path>, fetch: Option<TitleFetchOptions>) -> Result<()> {
    let text = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => io::read_to_string(io::stdin()).context("reading stdin")?,
    };
    let scan = scan_selection(&text);
    for line in describe_scan(&scan) {
        println!("{}", line);
    }

    if let Some(opts) = fetch {
        if !scan.valid.is_empty() {
            let results = fetch_titles(&scan.valid, &opts).await;
            println!();
            print!("{}", render_report(&results));
        }
    }
    Ok(())
}
