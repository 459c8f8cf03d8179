//! Canonical domain types for the conversion core.

mod amount;
mod currency;

pub use amount::{format_amount, parse_amount};
pub use currency::CurrencyCode;
