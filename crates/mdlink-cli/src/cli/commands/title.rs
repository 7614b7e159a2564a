//! Title command: resolve page titles for URLs given on the command line.

use anyhow::Result;
use mdlink_core::markdown::render_report;
use mdlink_core::{fetch_titles, TitleFetchOptions};

/// Fetch titles for `urls` and print a markdown report or JSON.
pub async fn run_title(urls: &[String], json: bool, opts: &TitleFetchOptions) -> Result<()> {
    let results = fetch_titles(urls, opts).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_report(&results));
    }
    Ok(())
}
