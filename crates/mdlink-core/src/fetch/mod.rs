//! Time-bounded page fetching and title resolution.
//!
//! Uses the curl crate (libcurl) for a single GET per URL. The transfer runs on
//! a tokio blocking worker; curl enforces the timeout and aborts the in-flight
//! request when it expires. Every failure comes back as a classified
//! [`TitleFetchResult`], never as a panic or an `Err` crossing the boundary.

mod classify;
mod error;
mod options;
mod result;

pub use classify::{classify, classify_curl_error};
pub use error::{FetchError, TitleErrorKind, TitleFetchError};
pub use options::{default_user_agent, TitleFetchOptions, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_MS};
pub use result::TitleFetchResult;

use std::time::{Duration, Instant};
use url::Url;

use crate::title;

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: u32 = 20;

const NOT_FOUND_MESSAGE: &str = "Title not found in the HTML";

/// Performs the GET on the current thread. Returns the status code and raw body.
fn perform_get(
    url: &str,
    timeout: Duration,
    user_agent: &str,
) -> Result<(u32, Vec<u8>), FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.useragent(user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.timeout(timeout)?;
    easy.signal(false)?; // required when used from worker threads
    easy.accept_encoding("")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().map_err(|e| {
            if e.is_operation_timedout() {
                FetchError::Timeout(timeout.as_millis() as u64)
            } else {
                FetchError::Transport(e)
            }
        })?;
    }

    let code = easy.response_code()?;
    Ok((code, body))
}

/// Fetches the markup at `url` within `options.timeout_ms`.
///
/// Unparseable input short-circuits with [`FetchError::InvalidUrl`] before any
/// network activity. Non-2xx responses fail with [`FetchError::Status`].
pub async fn fetch_html(url: &str, options: &TitleFetchOptions) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(FetchError::InvalidUrl)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    let timeout = options.timeout();
    let user_agent = options.user_agent.clone();
    // Hand curl the normalized form; raw input may carry spaces or non-ASCII.
    let target = parsed.as_str().to_string();
    let started = Instant::now();
    let timeout_ms = timeout.as_millis() as u64;
    tracing::debug!(url, timeout_ms, "fetching page");

    let (code, body) =
        tokio::task::spawn_blocking(move || perform_get(&target, timeout, &user_agent))
            .await
            .map_err(FetchError::Task)??;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::debug!(url, status = code, bytes = body.len(), elapsed_ms, "fetch finished");

    if !(200..300).contains(&code) {
        return Err(FetchError::Status(code));
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Resolves the page title for `url`.
///
/// Never fails: network, timeout and URL problems are classified into the
/// returned result. Markup without a usable `<title>`/`<h1>` and markup that
/// cannot be parsed both report [`TitleErrorKind::NotFound`].
pub async fn fetch_title(url: &str, options: &TitleFetchOptions) -> TitleFetchResult {
    let html = match fetch_html(url, options).await {
        Ok(html) => html,
        Err(e) => {
            let kind = classify(&e);
            tracing::warn!(url, kind = %kind, "title fetch failed: {}", e);
            return TitleFetchResult::failed(url, kind, e.to_string());
        }
    };

    match title::extract(&html) {
        Ok(found) => TitleFetchResult::found(url, found),
        Err(e) => {
            tracing::debug!(url, "no title: {}", e);
            TitleFetchResult::failed(url, TitleErrorKind::NotFound, NOT_FOUND_MESSAGE)
        }
    }
}
