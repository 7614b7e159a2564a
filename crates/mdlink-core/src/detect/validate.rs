//! Semantic URL check layered on top of the scanner.

use url::Url;

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// True if `candidate` is an absolute `http`/`https` URL whose host looks like
/// a public web host.
///
/// Hosts without a dot (e.g. `localhost`) and hosts ending in a dot are
/// rejected. Any parse failure yields `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(u) => u,
        Err(_) => return false,
    };
    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return false;
    }
    match parsed.host_str() {
        Some(host) => host.contains('.') && !host.ends_with('.'),
        None => false,
    }
}
