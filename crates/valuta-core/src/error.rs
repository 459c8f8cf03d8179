use thiserror::Error;

use crate::domain::CurrencyCode;
use crate::rate_source::FeedError;

/// Validation errors for domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCurrency,
    #[error("currency must be a 3-letter ISO code: '{value}'")]
    InvalidCurrency { value: String },
}

/// Conversion failure classification surfaced to the presentation adapter.
///
/// Every kind is recoverable: the session stays usable and the user retries
/// by editing the amount or selection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("amount '{input}' is not a valid non-negative number")]
    InvalidAmount { input: String },
    #[error("both source and target currencies must be selected")]
    MissingSelection,
    #[error("rate feed returned no rate for '{target}'")]
    RateNotFound { target: CurrencyCode },
    #[error("rate lookup failed: {0}")]
    Fetch(#[from] FeedError),
}
