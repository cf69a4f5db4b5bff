//!
//! Common types and logic shared by the muse client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` data model and the embedded fallback list.
//! - `pool` — `QuotePool`, sampling-without-replacement over fetched quotes.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod pool;

pub use error::QuoteError;
pub use result::Result;
pub use quote::Quote;
pub use pool::{QuotePool, QuoteSource};
