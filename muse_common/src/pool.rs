//! Quote pool with sampling-without-replacement.
//!
//! The `QuotePool` holds the most recently fetched collection of quotes and
//! tracks which of them have already been surfaced in the current cycle. It
//! exposes two operations:
//!
//! - `QuotePool::refill` — replace the pool contents from the source, masking
//!   any source failure with the embedded fallback list.
//! - `QuotePool::draw` — return one quote chosen uniformly at random among
//!   those not yet shown, refilling first when the pool is exhausted.
//!
//! Design notes:
//! - The pool is generic over [`QuoteSource`] so tests can inject scripted
//!   sources instead of a live HTTP endpoint.
//! - A refill requested while a fetch is already in flight is dropped, not
//!   joined: the caller proceeds with whatever pool state currently exists.
//!   The guard is an explicit `FetchState` rather than an ad hoc boolean.
//! - `draw` retries a failed attempt at most once instead of recursing, so a
//!   source that keeps yielding nothing cannot grow the stack.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::quote::{Quote, fallback_quotes};
use crate::result::Result;

/// Supplier of quote batches for a [`QuotePool`].
///
/// A batch may hold a single quote (random-endpoint mode) or many (batch
/// mode); the pool treats both uniformly. Implementations report failures
/// through the returned `Result`, and the pool absorbs them.
pub trait QuoteSource {
    /// Fetch a fresh batch of quotes from the source.
    fn fetch(&mut self) -> Result<Vec<Quote>>;
}

/// Whether a fetch is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchState {
    Idle,
    Fetching,
}

/// Pool of quotes that cycles through its contents without repeats.
///
/// Invariant: every index in `shown` points into `items`. Once `shown`
/// covers all of `items` the pool is exhausted and the next [`draw`] refills
/// it from the source.
///
/// [`draw`]: QuotePool::draw
pub struct QuotePool<S> {
    source: S,
    items: Vec<Quote>,
    shown: HashSet<usize>,
    state: FetchState,
}

impl<S: QuoteSource> QuotePool<S> {
    /// Create an empty pool over the given source.
    ///
    /// The pool starts with no quotes; the first [`QuotePool::draw`] triggers
    /// a refill.
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            shown: HashSet::new(),
            state: FetchState::Idle,
        }
    }

    /// Number of quotes currently held by the pool.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the pool holds no quotes at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` when every held quote has been shown this cycle.
    ///
    /// An empty pool counts as exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.shown.len() >= self.items.len()
    }

    /// Replace the pool contents with a fresh batch from the source.
    ///
    /// Source failures and empty batches are logged and masked by the
    /// embedded fallback list, so the pool is never left unusably empty.
    /// If a fetch is already in flight the call is a no-op and the pool
    /// keeps its current state, stale or empty.
    pub fn refill(&mut self) {
        if self.state == FetchState::Fetching {
            debug!("Refill skipped: a fetch is already in flight");
            return;
        }
        self.state = FetchState::Fetching;
        let items = match self.source.fetch() {
            Ok(items) if !items.is_empty() => {
                debug!("Fetched {} quotes from the source", items.len());
                items
            }
            Ok(_) => {
                warn!("Quote source returned an empty batch, using the embedded list");
                fallback_quotes()
            }
            Err(e) => {
                warn!("Quote source unavailable ({}), using the embedded list", e);
                fallback_quotes()
            }
        };
        self.items = items;
        self.shown.clear();
        self.state = FetchState::Idle;
    }

    /// Return the next quote, refilling the pool when it is exhausted.
    ///
    /// Within one cycle (the period between refills) no quote is returned
    /// twice, and the order of quotes is uniformly random. At most two
    /// refill attempts are made per call; if both are suppressed by an
    /// in-flight fetch the embedded fallback list is installed directly, so
    /// the caller always receives a quote.
    pub fn draw(&mut self) -> Quote {
        for _ in 0..2 {
            if self.is_exhausted() {
                self.refill();
            }
            if let Some(quote) = self.pick_unshown() {
                return quote;
            }
        }
        self.items = fallback_quotes();
        self.shown.clear();
        let index = rand::rng().random_range(0..self.items.len());
        self.shown.insert(index);
        self.items[index].clone()
    }

    /// Pick one not-yet-shown quote uniformly at random, if any remains.
    fn pick_unshown(&mut self) -> Option<Quote> {
        let unshown: Vec<usize> = (0..self.items.len())
            .filter(|index| !self.shown.contains(index))
            .collect();
        if unshown.is_empty() {
            return None;
        }
        let index = unshown[rand::rng().random_range(0..unshown.len())];
        self.shown.insert(index);
        Some(self.items[index].clone())
    }
}
