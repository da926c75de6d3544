//! Command-line interface definitions for Presswire.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the Presswire search harness.
///
/// The binary plays the host role end to end: it builds the upstream
/// request, performs the fetch, parses the response, and prints the
/// normalized records as JSON on stdout.
///
/// # Examples
///
/// ```sh
/// # First page of results
/// presswire "climate change"
///
/// # Third page, restricted to the last week, pretty-printed
/// presswire "climate change" -p 3 -t week --pretty
///
/// # Fetch three consecutive pages starting at page 1
/// presswire "markets" --pages 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search query to send upstream
    pub query: String,

    /// 1-based page of results to fetch
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Number of consecutive pages to fetch, starting at --page
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Restrict results to a lookback window: day, week, month, or year
    #[arg(short, long)]
    pub time_range: Option<String>,

    /// Override the upstream base URL (e.g. to point at a local stub)
    #[arg(long, env = "PRESSWIRE_BASE_URL")]
    pub base_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(&["presswire", "climate change"]);

        assert_eq!(cli.query, "climate change");
        assert_eq!(cli.page, 1);
        assert_eq!(cli.pages, 1);
        assert_eq!(cli.time_range, None);
        assert_eq!(cli.base_url, None);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["presswire", "markets", "-p", "3", "-t", "week"]);

        assert_eq!(cli.page, 3);
        assert_eq!(cli.time_range.as_deref(), Some("week"));
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from(&[
            "presswire",
            "markets",
            "--pages",
            "3",
            "--base-url",
            "http://localhost:8080",
            "--pretty",
        ]);

        assert_eq!(cli.pages, 3);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(cli.pretty);
    }
}
