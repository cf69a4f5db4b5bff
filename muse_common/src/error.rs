//! Error types shared between the quote source and the client.
//!
//! The `QuoteError` enum unifies the failure cases of fetching and parsing
//! quotes, allowing crates to propagate a single error type. Note that the
//! pool itself never surfaces these errors to its callers: they are absorbed
//! at the fetch boundary and masked by the embedded fallback list.
use thiserror::Error;

/// Unified error type for quote sourcing and parsing.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Transport-level HTTP failure (connection refused, DNS, timeout, ...).
    ///
    /// Carried as a string so this crate stays agnostic of the HTTP client.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status code.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A quote had an empty or missing `content`/`author` field.
    #[error("invalid quote: {0}")]
    InvalidQuote(String),

    /// The source answered successfully but yielded no usable quotes.
    #[error("quote source returned no usable quotes")]
    EmptySource,
}
