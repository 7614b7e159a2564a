//! Resolve titles for many URLs concurrently.
//!
//! Keeps up to `max_concurrent` fetches in flight; when one finishes, the next
//! queued URL is started until the queue is empty. Results land in the slot of
//! their input index, so output order matches input order whatever the
//! completion order.

use std::sync::Arc;
use tokio::task::JoinSet;

use crate::fetch::{fetch_title, TitleErrorKind, TitleFetchOptions, TitleFetchResult};

/// Resolves every URL in `urls` and returns one result per input, in input order.
///
/// A failing URL never cancels or delays the others. A task that dies without
/// producing a result is reported as a network error in its own slot.
pub async fn fetch_titles<S: AsRef<str>>(
    urls: &[S],
    options: &TitleFetchOptions,
) -> Vec<TitleFetchResult> {
    let max_concurrent = options.max_concurrent.max(1);
    let options = Arc::new(options.clone());
    let mut slots: Vec<Option<TitleFetchResult>> = vec![None; urls.len()];
    let mut queue = urls
        .iter()
        .map(|u| u.as_ref().to_string())
        .enumerate();
    let mut join_set = JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some((index, url)) = queue.next() else {
                break;
            };
            let options = Arc::clone(&options);
            join_set.spawn(async move { (index, fetch_title(&url, &options).await) });
        }

        let Some(joined) = join_set.join_next().await else {
            break;
        };
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => tracing::warn!("title task join: {}", e),
        }
    }

    let results: Vec<TitleFetchResult> = slots
        .into_iter()
        .zip(urls)
        .map(|(slot, url)| {
            let url: &str = url.as_ref();
            slot.unwrap_or_else(|| {
                TitleFetchResult::failed(
                    url,
                    TitleErrorKind::Network,
                    "title task ended without a result",
                )
            })
        })
        .collect();

    let found = results.iter().filter(|r| r.is_success()).count();
    tracing::info!(
        total = results.len(),
        found,
        failed = results.len() - found,
        "title batch finished"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_batch_is_empty() {
        let urls: [&str; 0] = [];
        assert!(fetch_titles(&urls, &TitleFetchOptions::default()).await.is_empty());
    }

    #[tokio::test]
    async fn invalid_urls_keep_their_slots() {
        let urls = ["not a url", "also bad", "://nope"];
        let opts = TitleFetchOptions::default().with_max_concurrent(1);
        let results = fetch_titles(&urls, &opts).await;
        assert_eq!(results.len(), 3);
        for (result, url) in results.iter().zip(urls) {
            assert_eq!(result.url, url);
            assert_eq!(result.error_kind(), Some(TitleErrorKind::InvalidUrl));
        }
    }
}
