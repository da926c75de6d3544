//! Reuters news search adapter.
//!
//! Reuters has no public search API, but its site frontend queries an
//! internal JSON endpoint that accepts a JSON argument blob embedded in
//! the URL's query string. This adapter speaks that wire format: it builds
//! the GET request the host should issue, and normalizes the JSON body the
//! host gets back into [`SearchResult`] records.
//!
//! # URL Pattern
//!
//! ```text
//! https://www.reuters.com/pf/api/v3/content/fetch/articles-by-search-v2?query=<url-encoded-json>
//! ```
//!
//! where the encoded JSON carries keyword, offset, sort order, page size,
//! site identifier, and an optional `start_date` lookback bound.
//!
//! # Field Mapping
//!
//! | Upstream | Normalized | On absence |
//! |----------|------------|------------|
//! | `canonical_url` | `url` (prefixed with the base URL) | error |
//! | `web` | `title` (upstream's headline key really is named `web`) | error |
//! | `description` | `content` | error |
//! | `display_time` | `published_date` | error |
//! | `thumbnail.url` | `thumbnail` | `""` |
//! | `kicker.name` | `metadata` | `None` |

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{About, EngineTraits, OutboundRequest, SearchRequest, SearchResult, TimeRange};
use crate::utils::gen_useragent;
use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::form_urlencoded;

/// Static facts about the upstream site.
pub const ABOUT: About = About {
    website: "https://www.reuters.com",
    wikidata_id: Some("Q130879"),
    official_api_documentation: None,
    use_official_api: false,
    require_api_key: false,
    results: "JSON",
};

/// Capability flags for host-side routing.
pub const TRAITS: EngineTraits = EngineTraits {
    categories: &["news"],
    time_range_support: true,
    paging: true,
    require_api_key: false,
};

/// Path of the internal article-search endpoint.
const SEARCH_PATH: &str = "/pf/api/v3/content/fetch/articles-by-search-v2";

/// Site identifier the endpoint expects in its argument blob.
const WEBSITE: &str = "reuters";

/// Exact format of upstream `display_time` values (UTC, whole seconds).
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format of the `start_date` bound sent upstream: local time, no zone
/// suffix. Upstream is only known to accept a full timestamp here, so the
/// time component is kept even though the parameter name suggests a date.
const START_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Argument blob serialized into the endpoint's `query` parameter.
#[derive(Debug, Serialize)]
struct SearchArgs<'a> {
    keyword: &'a str,
    offset: u32,
    orderby: &'a str,
    size: u32,
    website: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
}

/// Build the outbound search request for the host to issue.
///
/// Pure per-call transform: the host-seeded headers are copied and
/// augmented with a freshly generated `User-Agent`, and nothing is
/// retained between calls.
///
/// # Arguments
///
/// * `cfg` - Engine configuration (base URL, page size, sort order)
/// * `request` - Generic search parameters from the host
///
/// # Returns
///
/// The fully qualified URL and complete header set to fetch. Infallible:
/// an unrecognized time-range tag cannot reach this function (it fails
/// earlier, at [`TimeRange`]'s string boundary).
#[instrument(level = "debug", skip_all, fields(query = %request.query, pageno = request.pageno))]
pub fn build_request(cfg: &EngineConfig, request: &SearchRequest) -> OutboundRequest {
    let args = SearchArgs {
        keyword: &request.query,
        offset: request.pageno.saturating_sub(1) * cfg.page_size,
        orderby: &cfg.sort_order,
        size: cfg.page_size,
        website: WEBSITE,
        start_date: request.time_range.map(start_date),
    };

    let json = serde_json::to_string(&args).expect("search args serialize to JSON");
    let encoded: String = form_urlencoded::byte_serialize(json.as_bytes()).collect();
    let url = format!("{}{}?query={}", cfg.base_url, SEARCH_PATH, encoded);

    let mut headers = request.headers.clone();
    headers.insert("User-Agent".to_string(), gen_useragent());

    debug!(%url, "Built Reuters search request");
    OutboundRequest { url, headers }
}

/// Lower bound of a lookback window, as upstream expects it.
fn start_date(range: TimeRange) -> String {
    let start = Local::now().naive_local() - Duration::days(range.days_back());
    start.format(START_DATE_FORMAT).to_string()
}

/// Shape of the upstream search response.
///
/// Only the pieces the mapping needs are modeled; everything else in the
/// body is ignored. The containers are optional so that an unexpected
/// shape degrades to "no results" instead of failing the search.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: Option<ResultBlock>,
}

#[derive(Debug, Deserialize)]
struct ResultBlock {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    canonical_url: String,
    web: String,
    description: String,
    display_time: String,
    thumbnail: Option<Thumbnail>,
    kicker: Option<Kicker>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Kicker {
    name: Option<String>,
}

/// Normalize an upstream response body into result records.
///
/// Upstream ordering is preserved; nothing is re-sorted, deduplicated, or
/// filtered out. A missing `result` or `articles` container yields an
/// empty vec rather than an error.
///
/// # Errors
///
/// * [`EngineError::Json`] when the body is not valid JSON or an article
///   is missing a required field
/// * [`EngineError::Timestamp`] when a `display_time` deviates from the
///   upstream format; a corrupt timestamp is surfaced, not coerced
#[instrument(level = "debug", skip_all)]
pub fn parse_response(cfg: &EngineConfig, body: &str) -> Result<Vec<SearchResult>, EngineError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let articles = response.result.map(|r| r.articles).unwrap_or_default();

    let mut results = Vec::with_capacity(articles.len());
    for article in articles {
        let published_date = NaiveDateTime::parse_from_str(&article.display_time, DISPLAY_TIME_FORMAT)
            .map_err(|source| EngineError::Timestamp {
                value: article.display_time.clone(),
                source,
            })?
            .and_utc();

        results.push(SearchResult {
            url: format!("{}{}", cfg.base_url, article.canonical_url),
            title: article.web,
            content: article.description,
            published_date,
            thumbnail: article.thumbnail.and_then(|t| t.url).unwrap_or_default(),
            metadata: article.kicker.and_then(|k| k.name),
        });
    }

    debug!(count = results.len(), "Parsed Reuters search results");
    Ok(results)
}
