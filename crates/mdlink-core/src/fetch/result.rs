//! Outcome of a single title lookup.

use serde::ser::{Serialize, Serializer};

use super::error::{TitleErrorKind, TitleFetchError};

/// The title found for `url`, or the classified reason there is none.
///
/// `url` is always the caller's input string, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFetchResult {
    pub url: String,
    pub outcome: Result<String, TitleFetchError>,
}

impl TitleFetchResult {
    pub fn found(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: Ok(title.into()),
        }
    }

    pub fn failed(url: impl Into<String>, kind: TitleErrorKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: Err(TitleFetchError::new(kind, message)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn title(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error_kind(&self) -> Option<TitleErrorKind> {
        self.outcome.as_ref().err().map(|e| e.kind)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(|e| e.message.as_str())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Record<'a> {
    url: &'a str,
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<TitleErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<&'a str>,
}

impl Serialize for TitleFetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record {
            url: &self.url,
            title: self.title(),
            error: self.error_kind(),
            error_message: self.error_message(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_title_and_no_error() {
        let r = TitleFetchResult::found("https://example.com", "Example Domain");
        assert!(r.is_success());
        assert_eq!(r.title(), Some("Example Domain"));
        assert!(r.error_kind().is_none());
        assert!(r.error_message().is_none());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "https://example.com", "title": "Example Domain"})
        );
    }

    #[test]
    fn failure_has_error_and_null_title() {
        let r = TitleFetchResult::failed("https://x.io", TitleErrorKind::Timeout, "Request timeout after 5ms");
        assert!(!r.is_success());
        assert!(r.title().is_none());
        assert_eq!(r.error_kind(), Some(TitleErrorKind::Timeout));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "url": "https://x.io",
                "title": null,
                "error": "TIMEOUT_ERROR",
                "errorMessage": "Request timeout after 5ms"
            })
        );
    }
}
