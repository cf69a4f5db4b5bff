//! HTTP quote source and payload parsing.
//!
//! This module implements [`QuoteSource`] over a blocking HTTP client. Two
//! endpoint shapes are supported, selected by [`FetchMode`]:
//!
//! - `single` — `GET <url>` answering `{"content": ..., "author": ...}`,
//!   one quote per request.
//! - `batch` — `GET <url>?limit=N` answering
//!   `{"quotes": [{"quote": ..., "author": ...}, ...]}`; entries missing
//!   either field (or carrying empty values) are discarded.
//!
//! Parsing is separated from transport (`parse_single`/`parse_batch`) so the
//! payload handling is testable without a network. Transport failures and
//! non-2xx statuses surface as `QuoteError`; the pool masks them with its
//! fallback list.
use clap::ValueEnum;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;
use strum_macros::{Display, EnumString};

use muse_common::pool::QuoteSource;
use muse_common::{Quote, QuoteError, Result};

/// Request timeout for a single quote fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for establishing the connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How quotes are requested from the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FetchMode {
    /// One random quote per request.
    Single,
    /// A batch of quotes per request, cycled through before refetching.
    Batch,
}

/// Single-quote payload: `{"content": ..., "author": ...}`.
#[derive(Debug, Deserialize)]
struct SinglePayload {
    content: String,
    author: String,
}

/// Batch payload wrapper: `{"quotes": [...]}`.
#[derive(Debug, Deserialize)]
struct BatchPayload {
    quotes: Vec<BatchEntry>,
}

/// One batch entry. Fields are optional so malformed entries can be
/// recognized and dropped instead of failing the whole batch.
#[derive(Debug, Deserialize)]
struct BatchEntry {
    #[serde(default)]
    quote: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

/// Parse a single-quote body into a one-element batch.
pub fn parse_single(body: &str) -> Result<Vec<Quote>> {
    let payload: SinglePayload = serde_json::from_str(body)?;
    let quote = Quote::new(payload.content, payload.author)?;
    Ok(vec![quote])
}

/// Parse a batch body, discarding entries without a usable quote or author.
pub fn parse_batch(body: &str) -> Result<Vec<Quote>> {
    let payload: BatchPayload = serde_json::from_str(body)?;
    let total = payload.quotes.len();
    let quotes: Vec<Quote> = payload
        .quotes
        .into_iter()
        .filter_map(|entry| match (entry.quote, entry.author) {
            (Some(content), Some(author)) => Quote::new(content, author).ok(),
            _ => None,
        })
        .collect();
    if quotes.len() < total {
        debug!("Discarded {} malformed batch entries", total - quotes.len());
    }
    Ok(quotes)
}

/// Blocking HTTP implementation of [`QuoteSource`].
pub struct QuoteFetcher {
    client: Client,
    api_url: String,
    mode: FetchMode,
    limit: usize,
}

impl QuoteFetcher {
    /// Build a fetcher for the given endpoint and mode.
    ///
    /// - api_url: base URL of the quote endpoint.
    /// - mode: single-quote or batch requests.
    /// - limit: batch size sent as `?limit=N` in batch mode.
    pub fn new(api_url: &str, mode: FetchMode, limit: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.to_string(),
            mode,
            limit,
        })
    }
}

impl QuoteSource for QuoteFetcher {
    fn fetch(&mut self) -> Result<Vec<Quote>> {
        let request = match self.mode {
            FetchMode::Single => self.client.get(&self.api_url),
            FetchMode::Batch => self
                .client
                .get(&self.api_url)
                .query(&[("limit", self.limit)]),
        };
        debug!("GET {} (mode: {})", self.api_url, self.mode);

        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        match self.mode {
            FetchMode::Single => parse_single(&body),
            FetchMode::Batch => parse_batch(&body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn single_payload_parses_into_one_quote() {
        let quotes =
            parse_single(r#"{"content": "stay hungry", "author": "Steve Jobs"}"#).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].content, "stay hungry");
        assert_eq!(quotes[0].author, "Steve Jobs");
    }

    #[test]
    fn single_payload_with_empty_content_is_an_error() {
        let result = parse_single(r#"{"content": "", "author": "nobody"}"#);
        assert!(matches!(result, Err(QuoteError::InvalidQuote(_))));
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(matches!(
            parse_single("<html>503</html>"),
            Err(QuoteError::SerdeJson(_))
        ));
    }

    #[test]
    fn malformed_batch_entries_are_discarded() {
        let body = r#"{"quotes": [{"quote": "x", "author": "y"}, {"quote": "z"}]}"#;
        let quotes = parse_batch(body).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].content, "x");
        assert_eq!(quotes[0].author, "y");
    }

    #[test]
    fn batch_entries_with_empty_fields_are_discarded() {
        let body = r#"{"quotes": [{"quote": "  ", "author": "a"}, {"quote": "b", "author": "c"}]}"#;
        let quotes = parse_batch(body).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].content, "b");
    }

    #[test]
    fn batch_may_turn_out_empty_after_filtering() {
        let quotes = parse_batch(r#"{"quotes": [{"author": "only"}]}"#).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn fetch_mode_parses_case_insensitively() {
        assert_eq!(<FetchMode as FromStr>::from_str("BATCH").unwrap(), FetchMode::Batch);
        assert_eq!(FetchMode::Single.to_string(), "single");
    }
}
