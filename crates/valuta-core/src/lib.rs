//! Core currency-conversion engine for valuta.
//!
//! This crate contains:
//! - Currency catalog with locale-aware alias search
//! - Selection state for the source/target pair
//! - Async conversion engine over a pluggable rate feed
//! - Locale/text provider for user-facing strings
//! - Frankfurter feed adapter and HTTP transport abstraction
//!
//! The presentation layer is out of scope: a session exposes plain strings
//! (status, error, result lines) and takes raw user input; nothing here
//! touches a UI directly.

pub mod adapters;
pub mod aliases;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http_client;
pub mod i18n;
pub mod rate_source;
pub mod selection;
pub mod session;

pub use adapters::{FrankfurterSource, DEFAULT_BASE_URL};
pub use aliases::AliasTable;
pub use catalog::Catalog;
pub use domain::{format_amount, parse_amount, CurrencyCode};
pub use engine::{Conversion, ConversionEngine};
pub use error::{ConvertError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use i18n::{Lang, Messages};
pub use rate_source::{FeedError, RateQuote, RateSource};
pub use selection::{SelectionState, Slot};
pub use session::{Session, Ticket, ViewState};
