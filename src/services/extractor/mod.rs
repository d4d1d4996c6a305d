//! Signal page extraction.
//!
//! Turns a signal page URL into a [`SignalRecord`]: the URL is validated,
//! the page fetched once, and the parsed tree handed to each field extractor.
//! Extractors treat a missing node as empty; only an unexpected fault or
//! a failed fetch aborts the whole record.

pub mod distribution;
pub mod document;
pub mod general_info;
pub mod related;
pub mod statistics;
pub mod trade_history;
pub mod validate;

pub use distribution::DistributionExtractor;
pub use document::SignalDocument;
pub use general_info::GeneralInfoExtractor;
pub use related::RelatedSignalsExtractor;
pub use statistics::StatisticsExtractor;
pub use trade_history::TradeHistoryExtractor;
pub use validate::{is_signal_url, validate_signal_url};

use crate::error::ExtractError;
use crate::sources::Fetcher;
use crate::types::SignalRecord;
use std::sync::Arc;
use tracing::{debug, warn};

/// A projection from a parsed signal page to one part of the record.
pub trait FieldExtractor {
    type Output;

    /// Section name used in logs.
    fn name(&self) -> &'static str;

    /// Read this section from the document.
    /// Absent nodes produce empty values, never an error.
    fn extract(&self, doc: &SignalDocument) -> Result<Self::Output, ExtractError>;
}

/// Build a record from markup that has already been fetched.
///
/// The URL is carried through as-is; no validation happens here.
pub fn extract_from_html(url: &str, html: &str) -> Result<SignalRecord, ExtractError> {
    let doc = SignalDocument::parse(html);

    let general_info = run(&GeneralInfoExtractor, &doc)?;
    let statistics = run(&StatisticsExtractor, &doc)?;
    let trade_history = run(&TradeHistoryExtractor, &doc)?;
    let distribution = run(&DistributionExtractor, &doc)?;
    let author_signals = run(&RelatedSignalsExtractor, &doc)?;

    debug!(
        "Extracted {}: {} info fields, {} stats, {} trades, {} symbols, {} related",
        url,
        general_info.len(),
        statistics.len(),
        trade_history.len(),
        distribution.len(),
        author_signals.len()
    );

    Ok(SignalRecord {
        general_info,
        statistics,
        trade_history,
        distribution,
        author_signals,
        source_url: url.to_string(),
        extracted_at: chrono::Utc::now(),
    })
}

fn run<E: FieldExtractor>(extractor: &E, doc: &SignalDocument) -> Result<E::Output, ExtractError> {
    extractor.extract(doc).map_err(|e| {
        warn!("Extractor {} failed: {}", extractor.name(), e);
        e
    })
}

/// Validates, fetches and extracts signal pages.
pub struct SignalExtractor {
    fetcher: Arc<dyn Fetcher>,
}

impl SignalExtractor {
    /// Create a new extractor backed by `fetcher`.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Arc<Self> {
        Arc::new(Self { fetcher })
    }

    /// Extract the signal page at `url`.
    ///
    /// Fails with [`ExtractError::InvalidIdentifierFormat`] before any
    /// request is made if `url` is not a signal page URL.
    pub async fn extract(&self, url: &str) -> Result<SignalRecord, ExtractError> {
        if let Err(e) = validate_signal_url(url) {
            warn!("Rejected signal URL {:?}", url);
            return Err(e);
        }

        let html = self.fetcher.fetch(url).await?;
        extract_from_html(url, &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFetcher {
        body: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Fetcher for CountingFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl Fetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
            Err(ExtractError::FetchFailure(format!("timed out: {}", url)))
        }
    }

    #[tokio::test]
    async fn test_invalid_url_skips_fetch() {
        let fetcher = Arc::new(CountingFetcher {
            body: String::new(),
            calls: AtomicUsize::new(0),
        });
        let extractor = SignalExtractor::new(fetcher.clone());

        let result = extractor.extract("https://example.com/en/signals/1").await;

        assert!(matches!(result, Err(ExtractError::InvalidIdentifierFormat(_))));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_url_fetches_once() {
        let fetcher = Arc::new(CountingFetcher {
            body: r#"<div class="s-line-card__title">Alpha</div>"#.to_string(),
            calls: AtomicUsize::new(0),
        });
        let extractor = SignalExtractor::new(fetcher.clone());
        let url = "https://www.mql5.com/en/signals/42";

        let record = extractor.extract(url).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(record.signal_name(), "Alpha");
        assert_eq!(record.source_url, url);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let extractor = SignalExtractor::new(Arc::new(FailingFetcher));

        let result = extractor.extract("https://www.mql5.com/en/signals/42").await;

        assert!(matches!(result, Err(ExtractError::FetchFailure(_))));
    }

    #[test]
    fn test_extract_from_garbage_markup() {
        let record = extract_from_html("raw", "<<<not html at all>>> </td></tr>").unwrap();

        assert_eq!(record.general_info.len(), 3);
        assert!(record.statistics.is_empty());
        assert!(record.trade_history.is_empty());
        assert!(record.distribution.is_empty());
        assert!(record.author_signals.is_empty());
        assert_eq!(record.source_url, "raw");
    }
}
