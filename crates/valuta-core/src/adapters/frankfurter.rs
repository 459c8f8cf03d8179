use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::CurrencyCode;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::rate_source::{FeedError, RateQuote, RateSource};
use crate::ValidationError;

/// Public Frankfurter API, no auth.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.dev/v1";

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Frankfurter rate feed adapter over an injected transport.
///
/// Two endpoints are used: `GET {base}/currencies` for the catalog listing
/// and `GET {base}/latest?base=..&symbols=..` for the latest rate.
pub struct FrankfurterSource {
    base_url: String,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl FrankfurterSource {
    /// Production adapter against the public API.
    pub fn new() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FeedError> {
        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(FeedError::Status {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| FeedError::Decode {
            message: error.to_string(),
        })
    }
}

impl Default for FrankfurterSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload of `GET /latest`. Fields beyond `date` and `rates` are ignored.
#[derive(Debug, Deserialize)]
struct LatestPayload {
    date: String,
    rates: BTreeMap<String, f64>,
}

fn decode_code(value: &str) -> Result<CurrencyCode, FeedError> {
    CurrencyCode::parse(value).map_err(|error: ValidationError| FeedError::Decode {
        message: error.to_string(),
    })
}

impl RateSource for FrankfurterSource {
    fn currencies<'a>(
        &'a self,
    ) -> Pin<
        Box<dyn Future<Output = Result<BTreeMap<CurrencyCode, String>, FeedError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let url = format!("{}/currencies", self.base_url);
            let payload: BTreeMap<String, String> = self.fetch_json(url).await?;

            let mut entries = BTreeMap::new();
            for (code, name) in payload {
                entries.insert(decode_code(&code)?, name);
            }
            Ok(entries)
        })
    }

    fn latest<'a>(
        &'a self,
        base: &'a CurrencyCode,
        symbol: &'a CurrencyCode,
    ) -> Pin<Box<dyn Future<Output = Result<RateQuote, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let url = format!(
                "{}/latest?base={}&symbols={}",
                self.base_url,
                urlencoding::encode(base.as_str()),
                urlencoding::encode(symbol.as_str()),
            );
            let payload: LatestPayload = self.fetch_json(url).await?;

            let mut rates = BTreeMap::new();
            for (code, rate) in payload.rates {
                rates.insert(decode_code(&code)?, rate);
            }

            Ok(RateQuote {
                base: base.clone(),
                date: payload.date,
                rates,
            })
        })
    }
}
