//! The conversion engine: validates a request and drives the rate lookup.

use std::sync::Arc;

use crate::domain::{format_amount, parse_amount, CurrencyCode};
use crate::error::ConvertError;
use crate::rate_source::RateSource;
use crate::selection::SelectionState;

/// Successful conversion outcome. Created fresh per request, never mutated,
/// superseded by the next request's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Source and target are the same currency; no rate lookup happens.
    Identity { amount: f64, code: CurrencyCode },
    Converted {
        amount: f64,
        converted: f64,
        rate: f64,
        source: CurrencyCode,
        target: CurrencyCode,
        /// Feed-supplied rate date, passed through unmodified.
        as_of: String,
    },
}

impl Conversion {
    /// Result line with both sides at two fraction digits, e.g.
    /// `10.00 EUR = 11.00 USD`.
    pub fn main_line(&self) -> String {
        match self {
            Self::Identity { amount, code } => {
                let formatted = format_amount(*amount);
                format!("{formatted} {code} = {formatted} {code}")
            }
            Self::Converted {
                amount,
                converted,
                source,
                target,
                ..
            } => format!(
                "{} {source} = {} {target}",
                format_amount(*amount),
                format_amount(*converted)
            ),
        }
    }
}

/// Validates conversion input and resolves it against the rate feed.
pub struct ConversionEngine {
    feed: Arc<dyn RateSource>,
}

impl ConversionEngine {
    pub fn new(feed: Arc<dyn RateSource>) -> Self {
        Self { feed }
    }

    /// Run one conversion. Checks short-circuit in order: amount parse,
    /// selection completeness, same-currency identity, then the remote
    /// lookup.
    pub async fn convert(
        &self,
        amount_text: &str,
        selection: &SelectionState,
    ) -> Result<Conversion, ConvertError> {
        let amount = parse_amount(amount_text)?;
        let (source, target) = selection.pair().ok_or(ConvertError::MissingSelection)?;

        if source == target {
            return Ok(Conversion::Identity {
                amount,
                code: source.clone(),
            });
        }

        let quote = self.feed.latest(source, target).await?;
        let rate = quote
            .rate_for(target)
            .ok_or_else(|| ConvertError::RateNotFound {
                target: target.clone(),
            })?;

        Ok(Conversion::Converted {
            amount,
            converted: amount * rate,
            rate,
            source: source.clone(),
            target: target.clone(),
            as_of: quote.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_source::{FeedError, RateQuote};
    use crate::selection::Slot;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted feed double counting `latest` calls.
    struct StubFeed {
        quote: Result<RateQuote, FeedError>,
        latest_calls: AtomicUsize,
    }

    impl StubFeed {
        fn with_rate(base: &str, target: &str, rate: f64, date: &str) -> Self {
            let mut rates = BTreeMap::new();
            rates.insert(code(target), rate);
            Self {
                quote: Ok(RateQuote {
                    base: code(base),
                    date: date.to_owned(),
                    rates,
                }),
                latest_calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: FeedError) -> Self {
            Self {
                quote: Err(error),
                latest_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.latest_calls.load(Ordering::SeqCst)
        }
    }

    impl RateSource for StubFeed {
        fn currencies<'a>(
            &'a self,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<BTreeMap<CurrencyCode, String>, FeedError>> + Send + 'a,
            >,
        > {
            Box::pin(async move { Ok(BTreeMap::new()) })
        }

        fn latest<'a>(
            &'a self,
            _base: &'a CurrencyCode,
            _symbol: &'a CurrencyCode,
        ) -> Pin<Box<dyn Future<Output = Result<RateQuote, FeedError>> + Send + 'a>> {
            self.latest_calls.fetch_add(1, Ordering::SeqCst);
            let quote = self.quote.clone();
            Box::pin(async move { quote })
        }
    }

    fn code(value: &str) -> CurrencyCode {
        CurrencyCode::parse(value).expect("valid code")
    }

    fn engine_with(feed: Arc<StubFeed>) -> ConversionEngine {
        ConversionEngine::new(feed)
    }

    #[tokio::test]
    async fn converts_using_the_fetched_rate() {
        let feed = Arc::new(StubFeed::with_rate("EUR", "USD", 1.1, "2024-01-01"));
        let engine = engine_with(feed.clone());

        let conversion = engine
            .convert("10", &SelectionState::default())
            .await
            .expect("conversion succeeds");

        match &conversion {
            Conversion::Converted {
                converted,
                rate,
                as_of,
                ..
            } => {
                assert!((converted - 11.0).abs() < 1e-9);
                assert_eq!(*rate, 1.1);
                assert_eq!(as_of, "2024-01-01");
            }
            other => panic!("expected converted outcome, got {other:?}"),
        }
        assert_eq!(conversion.main_line(), "10.00 EUR = 11.00 USD");
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn accepts_decimal_comma_amounts() {
        let feed = Arc::new(StubFeed::with_rate("EUR", "USD", 2.0, "2024-01-01"));
        let engine = engine_with(feed);

        let conversion = engine
            .convert("10,5", &SelectionState::default())
            .await
            .expect("conversion succeeds");
        assert_eq!(conversion.main_line(), "10.50 EUR = 21.00 USD");
    }

    #[tokio::test]
    async fn identity_skips_the_rate_lookup() {
        let feed = Arc::new(StubFeed::with_rate("EUR", "USD", 1.1, "2024-01-01"));
        let engine = engine_with(feed.clone());

        let mut selection = SelectionState::default();
        selection.set(Slot::Target, code("EUR"));

        let conversion = engine
            .convert("7", &selection)
            .await
            .expect("identity succeeds");
        assert_eq!(conversion.main_line(), "7.00 EUR = 7.00 EUR");
        assert_eq!(feed.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_amount_wins_over_missing_selection() {
        let feed = Arc::new(StubFeed::with_rate("EUR", "USD", 1.1, "2024-01-01"));
        let engine = engine_with(feed.clone());

        let error = engine
            .convert("-5", &SelectionState::empty())
            .await
            .expect_err("must fail");
        assert!(matches!(error, ConvertError::InvalidAmount { .. }));
        assert_eq!(feed.calls(), 0);
    }

    #[tokio::test]
    async fn missing_selection_is_reported_before_any_lookup() {
        let feed = Arc::new(StubFeed::with_rate("EUR", "USD", 1.1, "2024-01-01"));
        let engine = engine_with(feed.clone());

        let error = engine
            .convert("10", &SelectionState::empty())
            .await
            .expect_err("must fail");
        assert_eq!(error, ConvertError::MissingSelection);
        assert_eq!(feed.calls(), 0);
    }

    #[tokio::test]
    async fn missing_target_rate_is_rate_not_found() {
        // Feed answers, but for a different symbol than requested.
        let feed = Arc::new(StubFeed::with_rate("EUR", "SEK", 11.2, "2024-01-01"));
        let engine = engine_with(feed);

        let error = engine
            .convert("10", &SelectionState::default())
            .await
            .expect_err("must fail");
        assert_eq!(
            error,
            ConvertError::RateNotFound {
                target: code("USD"),
            }
        );
    }

    #[tokio::test]
    async fn feed_failure_maps_to_fetch_error() {
        let feed = Arc::new(StubFeed::failing(FeedError::Status { status: 500 }));
        let engine = engine_with(feed);

        let error = engine
            .convert("10", &SelectionState::default())
            .await
            .expect_err("must fail");
        assert_eq!(error, ConvertError::Fetch(FeedError::Status { status: 500 }));
    }
}
