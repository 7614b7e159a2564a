//! User-facing messages for detect, scan and linkify.

use crate::cli::commands::{bare_urls, describe_position, describe_scan};
use mdlink_core::detect::{scan_selection, url_at_line_offset, url_at_position, FenceTracking};

#[test]
fn detect_messages() {
    let line = "Visit http://example.com for more information.";
    assert_eq!(
        describe_position(url_at_line_offset(line, 10).as_ref()),
        "URL detected: http://example.com"
    );
    assert_eq!(
        describe_position(url_at_line_offset(line, 1).as_ref()),
        "No URL detected at cursor position"
    );
    assert_eq!(
        describe_position(url_at_line_offset("`http://example.com`", 4).as_ref()),
        "URL in code block: http://example.com"
    );
}

#[test]
fn detect_malformed_in_fence_reports_code_block() {
    let doc = "```\nhttp://example.com.\n```";
    let found = url_at_position(doc, 1, 2, FenceTracking::Parity);
    assert_eq!(
        describe_position(found.as_ref()),
        "URL in code block: http://example.com."
    );
}

#[test]
fn scan_messages() {
    assert_eq!(
        describe_scan(&scan_selection("a http://a.io b http://example.com. c")),
        vec![
            "Valid URLs detected: http://a.io".to_string(),
            "Malformed URLs detected: http://example.com.".to_string(),
        ]
    );
    assert_eq!(
        describe_scan(&scan_selection("only http://example.com. here")),
        vec!["Only malformed URLs detected: http://example.com.".to_string()]
    );
    assert_eq!(
        describe_scan(&scan_selection("nothing")),
        vec!["No URLs detected in selection".to_string()]
    );
}

#[test]
fn bare_urls_are_distinct_and_skip_code() {
    let doc = "http://a.io and http://a.io\n`http://b.io`\n[x](http://c.io)\nhttp://d.io";
    assert_eq!(bare_urls(doc, FenceTracking::Parity), vec!["http://a.io", "http://d.io"]);
}
