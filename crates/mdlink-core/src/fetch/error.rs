//! Fetch pipeline errors and the title error taxonomy surfaced to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure from a single page fetch, before classification.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The input did not parse as a URL; no request was made.
    #[error("Invalid URL format")]
    InvalidUrl(#[source] url::ParseError),
    /// Parsed, but not an `http`/`https` URL.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// No complete response within the configured window; the transfer was aborted.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),
    /// Response arrived with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u32),
    /// Curl reported a transport failure (DNS, connect, TLS, reset, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The blocking worker running the request panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(#[source] tokio::task::JoinError),
}

/// Category of a failed title lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleErrorKind {
    #[serde(rename = "INVALID_URL")]
    InvalidUrl,
    #[serde(rename = "TIMEOUT_ERROR")]
    Timeout,
    #[serde(rename = "NETWORK_ERROR")]
    Network,
    /// Reserved: markup that cannot be parsed is currently reported as `NotFound`.
    #[serde(rename = "PARSING_ERROR")]
    Parsing,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
}

impl TitleErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleErrorKind::InvalidUrl => "INVALID_URL",
            TitleErrorKind::Timeout => "TIMEOUT_ERROR",
            TitleErrorKind::Network => "NETWORK_ERROR",
            TitleErrorKind::Parsing => "PARSING_ERROR",
            TitleErrorKind::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for TitleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure plus the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TitleFetchError {
    pub kind: TitleErrorKind,
    pub message: String,
}

impl TitleFetchError {
    pub fn new(kind: TitleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
