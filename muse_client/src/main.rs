//! muse — a terminal client that rotates inspirational quotes from a public
//! HTTP API. It draws quotes from a `QuotePool` so nothing repeats until the
//! whole pool has been shown, prints a date/time header with each quote, and
//! falls back to an embedded list whenever the source is unavailable.
//!
//! Usage examples (CLI):
//! ```bash
//! muse_client
//! muse_client --mode batch --limit 25 --interval 5
//! muse_client --once
//! ```
//!
//! The rotation loop multiplexes a crossbeam `tick` timer with a Ctrl+C
//! shutdown channel via `select!`. All quote sourcing details live in the
//! `source` module; the pool logic lives in `muse_common`.
#![warn(missing_docs)]
mod args;
mod clock;
mod source;

use std::time::Duration;

use chrono::Local;
use clap::Parser;
use crossbeam_channel::{select, tick, unbounded};
use log::info;

use muse_common::{Quote, QuoteError, QuotePool, Result};

use crate::args::Args;
use crate::source::QuoteFetcher;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let fetcher = QuoteFetcher::new(&args.api_url, args.mode, args.limit)?;
    let mut pool = QuotePool::new(fetcher);

    if args.once {
        print_quote(&pool.draw());
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(());
    })
    .expect("Error setting Ctrl+C handler");

    info!(
        "Client is running (mode: {}, rotating every {}s). Press Ctrl+C to exit.",
        args.mode, args.interval
    );

    // A zero interval would spin the rotation loop; clamp to one second.
    let rotation = tick(Duration::from_secs(args.interval.max(1)));
    print_quote(&pool.draw());

    loop {
        select! {
            recv(rotation) -> _ => print_quote(&pool.draw()),
            recv(shutdown_rx) -> _ => {
                info!("Ctrl+C received. Shutting down client...");
                break;
            }
        }
    }
    Ok(())
}

/// Print the clock header and one quote to stdout.
fn print_quote(quote: &Quote) {
    let now = Local::now();
    println!();
    println!("{}", clock::clock_line(&now));
    println!("{}", quote);
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
