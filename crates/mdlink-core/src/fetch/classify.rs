//! Classify fetch failures into the title error taxonomy.

use super::error::{FetchError, TitleErrorKind};

/// Classify a curl error. Timeouts are distinguished; everything else is a
/// network failure.
///
/// URLs reach curl only after `Url::parse` accepted them, so a late rejection
/// from curl (`is_url_malformed`) is a transport problem, not bad input.
pub fn classify_curl_error(e: &curl::Error) -> TitleErrorKind {
    if e.is_operation_timedout() {
        return TitleErrorKind::Timeout;
    }
    TitleErrorKind::Network
}

/// Classify a fetch error into a TitleErrorKind.
pub fn classify(e: &FetchError) -> TitleErrorKind {
    match e {
        FetchError::InvalidUrl(_) => TitleErrorKind::InvalidUrl,
        FetchError::Timeout(_) => TitleErrorKind::Timeout,
        FetchError::Transport(ce) => classify_curl_error(ce),
        // Non-2xx statuses are reported as network errors, status in the message.
        FetchError::Status(_) | FetchError::UnsupportedScheme(_) | FetchError::Task(_) => {
            TitleErrorKind::Network
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_its_own_kind() {
        assert_eq!(classify(&FetchError::Timeout(10)), TitleErrorKind::Timeout);
        // CURLE_OPERATION_TIMEDOUT
        let ce = curl::Error::new(28);
        assert_eq!(classify_curl_error(&ce), TitleErrorKind::Timeout);
    }

    #[test]
    fn statuses_are_network_errors() {
        assert_eq!(classify(&FetchError::Status(404)), TitleErrorKind::Network);
        assert_eq!(classify(&FetchError::Status(503)), TitleErrorKind::Network);
    }

    #[test]
    fn transport_failures_are_network_errors() {
        // CURLE_COULDNT_RESOLVE_HOST, CURLE_COULDNT_CONNECT
        assert_eq!(classify_curl_error(&curl::Error::new(6)), TitleErrorKind::Network);
        assert_eq!(classify_curl_error(&curl::Error::new(7)), TitleErrorKind::Network);
        assert_eq!(
            classify(&FetchError::UnsupportedScheme("ftp".into())),
            TitleErrorKind::Network
        );
    }

    #[test]
    fn parse_failures_are_invalid_url() {
        let parse_err = url::Url::parse("http://").unwrap_err();
        assert_eq!(classify(&FetchError::InvalidUrl(parse_err)), TitleErrorKind::InvalidUrl);
    }

    #[test]
    fn curl_url_rejection_is_a_network_error() {
        // CURLE_URL_MALFORMAT
        let ce = curl::Error::new(3);
        assert!(ce.is_url_malformed());
        assert_eq!(classify_curl_error(&ce), TitleErrorKind::Network);
        assert_eq!(classify(&FetchError::Transport(ce)), TitleErrorKind::Network);
    }
}
