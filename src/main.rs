//! # Presswire CLI
//!
//! A minimal search host around the engine adapters: builds the upstream
//! request, performs the HTTP fetch, parses the response, and prints the
//! normalized records as JSON on stdout.
//!
//! ## Usage
//!
//! ```sh
//! presswire "climate change" -t week --pretty
//! ```
//!
//! ## Architecture
//!
//! One fetch cycle per requested page:
//! 1. **Build**: turn the query and page number into the upstream URL + headers
//! 2. **Fetch**: issue the GET with `reqwest`
//! 3. **Parse**: normalize the JSON body into result records
//!
//! Pages are fetched concurrently; a page that fails is logged and
//! skipped, and the surviving pages keep their order.

use clap::Parser;
use futures::stream::{self, StreamExt};
use presswire::engines::reuters;
use presswire::{EngineConfig, SearchRequest, SearchResult, TimeRange};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.query, ?args.page, ?args.pages, "Parsed CLI arguments");

    // An unknown time-range tag is a startup error, not something to
    // silently drop from the search.
    let time_range = args
        .time_range
        .as_deref()
        .map(str::parse::<TimeRange>)
        .transpose()?;

    let cfg = match args.base_url {
        Some(base_url) => EngineConfig {
            base_url,
            ..EngineConfig::default()
        },
        None => EngineConfig::shared().clone(),
    };

    let client = reqwest::Client::new();

    let page_numbers: Vec<u32> = (args.page..args.page + args.pages).collect();
    info!(
        query = %args.query,
        first_page = args.page,
        pages = args.pages,
        "Searching Reuters"
    );

    let cfg_ref = &cfg;
    let client_ref = &client;
    let query = args.query.as_str();

    let fetched: Vec<Vec<SearchResult>> = stream::iter(page_numbers)
        .then(|pageno| async move {
            match fetch_page(client_ref, cfg_ref, query, pageno, time_range).await {
                Ok(results) => {
                    debug!(pageno, count = results.len(), "Fetched results page");
                    Some(results)
                }
                Err(e) => {
                    error!(error = %e, pageno, "Page fetch failed");
                    None
                }
            }
        })
        .filter(|opt| std::future::ready(opt.is_some()))
        .map(|opt| opt.unwrap())
        .collect()
        .await;

    let results: Vec<SearchResult> = fetched.into_iter().flatten().collect();
    info!(count = results.len(), "Search complete");

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{rendered}");

    Ok(())
}

/// Build, issue, and parse one page of the search.
#[instrument(level = "info", skip(client, cfg, time_range))]
async fn fetch_page(
    client: &reqwest::Client,
    cfg: &EngineConfig,
    query: &str,
    pageno: u32,
    time_range: Option<TimeRange>,
) -> Result<Vec<SearchResult>, Box<dyn Error>> {
    let mut request = SearchRequest::new(query);
    request.pageno = pageno;
    request.time_range = time_range;

    let outbound = reuters::build_request(cfg, &request);

    let mut http = client.get(&outbound.url);
    for (name, value) in &outbound.headers {
        http = http.header(name.as_str(), value.as_str());
    }

    let body = http.send().await?.error_for_status()?.text().await?;
    Ok(reuters::parse_response(cfg, &body)?)
}
