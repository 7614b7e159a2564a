//! Markdown output: titled links and a per-batch report.

use crate::fetch::TitleFetchResult;

/// Escapes characters that would end or nest the link text. Whitespace runs
/// collapse to one space so the link stays on a single line.
fn escape_link_text(title: &str) -> String {
    let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Formats `[title](url)`.
///
/// URLs containing whitespace or parentheses are wrapped as `<url>` so the
/// destination stays unambiguous.
pub fn markdown_link(title: &str, url: &str) -> String {
    let text = escape_link_text(title);
    if url.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
        format!("[{}](<{}>)", text, url)
    } else {
        format!("[{}]({})", text, url)
    }
}

/// Renders batch results as markdown: a `# URL Titles` list of links, then a
/// `# Failed URLs` list with reasons when anything failed.
pub fn render_report(results: &[TitleFetchResult]) -> String {
    let mut out = String::from("# URL Titles\n\n");
    for r in results {
        if let Some(title) = r.title() {
            out.push_str(&format!("* {}\n", markdown_link(title, &r.url)));
        }
    }

    let failed: Vec<&TitleFetchResult> = results.iter().filter(|r| !r.is_success()).collect();
    if !failed.is_empty() {
        out.push_str("\n# Failed URLs\n\n");
        for r in failed {
            out.push_str(&format!("* {} - {}\n", r.url, r.error_message().unwrap_or_default()));
        }
    }
    out
}
