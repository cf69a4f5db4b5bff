//! Command-line arguments for the muse client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use crate::source::FetchMode;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote endpoint.
    #[clap(long, default_value = "https://api.quotable.io/random")]
    pub api_url: String,

    /// Sourcing mode: one random quote per request, or a batch-fetched pool.
    #[clap(long, value_enum, default_value_t = FetchMode::Single)]
    pub mode: FetchMode,

    /// Number of quotes requested per batch. Only used in batch mode.
    #[clap(long, default_value_t = 10)]
    pub limit: usize,

    /// Seconds between quote rotations.
    #[clap(long, default_value_t = 10)]
    pub interval: u64,

    /// Print a single quote and exit instead of rotating.
    #[clap(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_page() {
        let args = Args::try_parse_from(["muse_client"]).unwrap();
        assert_eq!(args.api_url, "https://api.quotable.io/random");
        assert_eq!(args.mode, FetchMode::Single);
        assert_eq!(args.limit, 10);
        assert_eq!(args.interval, 10);
        assert!(!args.once);
    }

    #[test]
    fn batch_mode_and_limit_parse() {
        let args = Args::try_parse_from([
            "muse_client",
            "--mode",
            "batch",
            "--limit",
            "25",
            "--once",
        ])
        .unwrap();
        assert_eq!(args.mode, FetchMode::Batch);
        assert_eq!(args.limit, 25);
        assert!(args.once);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["muse_client", "--mode", "firehose"]).is_err());
    }
}
