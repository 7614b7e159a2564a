//! Syntactic URL scanner.
//!
//! A heuristic, not a grammar: it requires an `http`/`https` scheme, a host
//! with a dotted suffix of 1-6 alphanumerics, and an optional path/query/fragment
//! tail. Some invalid hosts slip through (e.g. a trailing dot) and are left for
//! [`is_valid_url`](super::is_valid_url) to reject.

use regex::Regex;
use std::sync::OnceLock;

use super::span::TextSpan;

const URL_PATTERN: &str = concat!(
    r"https?://(?:www\.)?",
    r"[-a-zA-Z0-9@:%._+~#=]{1,256}",
    r"\.[a-zA-Z0-9()]{1,6}(?-u:\b)",
    r"(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)",
);

/// The URL regex, compiled once.
pub fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// Lazily yields every URL-shaped span in `text`, left to right, non-overlapping.
///
/// Calling again restarts the scan; nothing is cached between calls.
pub fn find_candidates(text: &str) -> impl Iterator<Item = TextSpan> + '_ {
    url_regex()
        .find_iter(text)
        .map(move |m| TextSpan::from_byte_range(text, m.start(), m.end()))
}

/// All URL-shaped substrings of `text`, in order of appearance.
pub fn find_urls(text: &str) -> Vec<String> {
    url_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(s: &str) -> bool {
        url_regex().find(s).map(|m| m.as_str()) == Some(s)
    }

    #[test]
    fn matches_common_urls_in_full() {
        for url in [
            "http://example.com",
            "https://example.com",
            "http://www.example.com",
            "https://example.com/path",
            "https://example.com/path?query=value",
            "https://example.com/path?query=value#fragment",
            "https://subdomain.example.com",
            "https://example.com/path/to/resource.html",
            "https://example.co.uk",
            "https://example.com:8080",
        ] {
            assert!(full_match(url), "should fully match {}", url);
        }
    }

    #[test]
    fn rejects_non_urls() {
        for text in [
            "example.com",
            "http:/example.com",
            "http//example.com",
            "http://",
            "http://localhost",
            "ftp://example.com",
            "http://example",
            "text with http:// in it",
        ] {
            assert!(!full_match(text), "should not fully match {}", text);
        }
        assert!(find_urls("http://localhost").is_empty());
        assert!(find_urls("http:/example.com").is_empty());
        assert!(find_urls("http://").is_empty());
    }

    #[test]
    fn ftp_scheme_never_matches() {
        // The `tp://` tail is not preceded by `http`, so nothing matches.
        assert!(find_urls("ftp://example.com").is_empty());
    }

    #[test]
    fn finds_multiple_urls_in_order() {
        let text = "Visit http://example.com and https://another-example.com/path for more information.";
        assert_eq!(
            find_urls(text),
            vec!["http://example.com", "https://another-example.com/path"]
        );
    }

    #[test]
    fn no_urls_yields_empty() {
        assert!(find_urls("This text does not contain any URLs.").is_empty());
        assert_eq!(find_candidates("").count(), 0);
    }

    #[test]
    fn every_match_starts_with_a_supported_scheme() {
        let text = "a https://x.io/b c http://www.y.org?q=1 d http://z.dev# e";
        let found = find_urls(text);
        assert_eq!(found.len(), 3);
        for url in found {
            assert!(url.starts_with("http://") || url.starts_with("https://"));
        }
    }

    #[test]
    fn candidates_carry_positions_and_restart() {
        let text = "see http://a.com and http://b.org";
        let first: Vec<TextSpan> = find_candidates(text).collect();
        let again: Vec<TextSpan> = find_candidates(text).collect();
        assert_eq!(first, again);
        assert_eq!(first.len(), 2);
        assert_eq!((first[0].start, first[0].end), (4, 16));
        assert_eq!((first[1].start, first[1].end), (21, 33));
        assert!(first[0].end <= first[1].start);
    }

    #[test]
    fn non_ascii_text_after_the_host_ends_the_match() {
        assert_eq!(find_urls("见http://example.com是官网"), vec!["http://example.com"]);
        assert_eq!(find_urls("http://example.comé"), vec!["http://example.com"]);
        let spans: Vec<TextSpan> = find_candidates("见http://example.com是官网").collect();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (1, 19));
    }

    #[test]
    fn trailing_dot_is_accepted_syntactically() {
        assert_eq!(find_urls("go to http://example.com."), vec!["http://example.com."]);
    }
}
