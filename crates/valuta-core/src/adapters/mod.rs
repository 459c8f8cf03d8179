//! Rate feed adapters.

mod frankfurter;

pub use frankfurter::{FrankfurterSource, DEFAULT_BASE_URL};
