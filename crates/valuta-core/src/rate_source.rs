use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::domain::CurrencyCode;
use crate::http_client::HttpError;

/// Errors surfaced by a rate feed adapter.
///
/// Covers both feed operations: a failed currency-listing fetch leaves the
/// catalog empty, a failed rate fetch fails the conversion attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("rate feed transport error: {message}")]
    Transport { message: String, retryable: bool },
    #[error("rate feed returned status {status}")]
    Status { status: u16 },
    #[error("failed to decode rate feed payload: {message}")]
    Decode { message: String },
}

impl FeedError {
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } => *retryable,
            Self::Status { .. } => true,
            Self::Decode { .. } => false,
        }
    }
}

impl From<HttpError> for FeedError {
    fn from(error: HttpError) -> Self {
        Self::Transport {
            message: error.message().to_owned(),
            retryable: error.retryable(),
        }
    }
}

/// Latest-rate payload for one base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub base: CurrencyCode,
    /// Feed-supplied date string, passed through unmodified.
    pub date: String,
    pub rates: BTreeMap<CurrencyCode, f64>,
}

impl RateQuote {
    pub fn rate_for(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates.get(target).copied()
    }
}

/// Rate feed contract.
pub trait RateSource: Send + Sync {
    /// Fetch the code → display-name listing for the catalog.
    fn currencies<'a>(
        &'a self,
    ) -> Pin<
        Box<dyn Future<Output = Result<BTreeMap<CurrencyCode, String>, FeedError>> + Send + 'a>,
    >;

    /// Fetch the latest rate quoting `symbol` against `base`.
    fn latest<'a>(
        &'a self,
        base: &'a CurrencyCode,
        symbol: &'a CurrencyCode,
    ) -> Pin<Box<dyn Future<Output = Result<RateQuote, FeedError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability_follows_the_failure_kind() {
        let transport = FeedError::from(HttpError::new("connection reset"));
        assert!(transport.retryable());

        let fatal = FeedError::from(HttpError::non_retryable("bad url"));
        assert!(!fatal.retryable());

        assert!(FeedError::Status { status: 503 }.retryable());
        assert!(!FeedError::Decode {
            message: String::from("unexpected token"),
        }
        .retryable());
    }

    #[test]
    fn quote_lookup_is_by_exact_code() {
        let usd = CurrencyCode::parse("USD").expect("valid code");
        let sek = CurrencyCode::parse("SEK").expect("valid code");
        let quote = RateQuote {
            base: CurrencyCode::parse("EUR").expect("valid code"),
            date: String::from("2024-01-01"),
            rates: [(usd.clone(), 1.1)].into_iter().collect(),
        };

        assert_eq!(quote.rate_for(&usd), Some(1.1));
        assert_eq!(quote.rate_for(&sek), None);
    }
}
