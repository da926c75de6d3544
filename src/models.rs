//! Common schema shared between the host and the engine adapters.
//!
//! This module defines the host-facing data structures:
//! - [`SearchRequest`]: generic per-search parameters handed down by the host
//! - [`OutboundRequest`]: the HTTP request descriptor the host should issue
//! - [`SearchResult`]: one normalized result record
//! - [`TimeRange`]: the fixed set of lookback windows the host may request
//! - [`EngineTraits`] / [`About`]: static capability flags the host reads
//!   when deciding which engines to route a search to
//!
//! Everything here lives for a single request/response cycle; nothing is
//! retained between searches.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A lookback window restricting results to recent articles.
///
/// The variants are the only windows the host contract admits, so the
/// days-lookback table is total by construction. Strings enter through
/// [`FromStr`], which is where an unrecognized tag fails fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Days of lookback the window spans.
    pub fn days_back(self) -> i64 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }
}

impl FromStr for TimeRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(EngineError::UnsupportedTimeRange(other.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        };
        f.write_str(tag)
    }
}

/// Generic search parameters the host hands to an engine adapter.
///
/// The header map is seeded by the host (cookies, language preferences,
/// whatever its policy dictates) and passed through to the outbound
/// request with the engine's own additions layered on top.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text search query.
    pub query: String,
    /// 1-based page of results to request.
    pub pageno: u32,
    /// Optional lookback window; `None` searches the full archive.
    pub time_range: Option<TimeRange>,
    /// Host-seeded headers for the outbound request.
    pub headers: HashMap<String, String>,
}

impl SearchRequest {
    /// Convenience constructor for a plain first-page search.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            pageno: 1,
            time_range: None,
            headers: HashMap::new(),
        }
    }
}

/// The HTTP request the host should issue on the adapter's behalf.
///
/// GET-style: the entire upstream payload is embedded in the URL's query
/// string, so there is no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Fully qualified request URL.
    pub url: String,
    /// Complete header set: the host-seeded headers plus the engine's.
    pub headers: HashMap<String, String>,
}

/// One normalized search result in the aggregator's common schema.
///
/// `thumbnail` and `metadata` default differently on absence, and the
/// distinction is deliberate: a missing thumbnail becomes an empty string,
/// while `metadata` stays `None` so downstream consumers can tell "no
/// label" apart from "empty label".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Absolute article URL.
    pub url: String,
    /// Article headline.
    pub title: String,
    /// Snippet or standfirst text.
    pub content: String,
    /// Publish time in UTC.
    pub published_date: DateTime<Utc>,
    /// Thumbnail image URL, empty when the article has none.
    pub thumbnail: String,
    /// Category or kicker label, when the article carries one.
    pub metadata: Option<String>,
}

/// Capability flags the host consults when routing searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTraits {
    /// Search categories the engine serves.
    pub categories: &'static [&'static str],
    /// Whether the engine honors a [`TimeRange`] filter.
    pub time_range_support: bool,
    /// Whether the engine can fetch pages past the first.
    pub paging: bool,
    /// Whether the upstream API needs an API key.
    pub require_api_key: bool,
}

/// Static facts about an engine's upstream site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    /// Public website the results link into.
    pub website: &'static str,
    /// Wikidata entity id for the upstream organization.
    pub wikidata_id: Option<&'static str>,
    /// Link to official API docs, when any exist.
    pub official_api_documentation: Option<&'static str>,
    /// Whether the adapter speaks an officially supported API.
    pub use_official_api: bool,
    /// Whether the upstream API needs an API key.
    pub require_api_key: bool,
    /// Wire format of upstream results.
    pub results: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parses_all_tags() {
        assert_eq!("day".parse::<TimeRange>().unwrap(), TimeRange::Day);
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("month".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert_eq!("year".parse::<TimeRange>().unwrap(), TimeRange::Year);
    }

    #[test]
    fn test_time_range_rejects_unknown_tag() {
        let err = "decade".parse::<TimeRange>().unwrap_err();
        match err {
            EngineError::UnsupportedTimeRange(tag) => assert_eq!(tag, "decade"),
            other => panic!("expected UnsupportedTimeRange, got {other:?}"),
        }
    }

    #[test]
    fn test_time_range_lookback_table() {
        assert_eq!(TimeRange::Day.days_back(), 1);
        assert_eq!(TimeRange::Week.days_back(), 7);
        assert_eq!(TimeRange::Month.days_back(), 30);
        assert_eq!(TimeRange::Year.days_back(), 365);
    }

    #[test]
    fn test_time_range_display_round_trips() {
        for range in [
            TimeRange::Day,
            TimeRange::Week,
            TimeRange::Month,
            TimeRange::Year,
        ] {
            assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_search_request_defaults() {
        let request = SearchRequest::new("climate change");
        assert_eq!(request.query, "climate change");
        assert_eq!(request.pageno, 1);
        assert_eq!(request.time_range, None);
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult {
            url: "https://www.reuters.com/world/abc".to_string(),
            title: "Title X".to_string(),
            content: "Desc".to_string(),
            published_date: "2024-01-02T03:04:05Z".parse().unwrap(),
            thumbnail: String::new(),
            metadata: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://www.reuters.com/world/abc");
        assert_eq!(json["title"], "Title X");
        assert_eq!(json["thumbnail"], "");
        assert!(json["metadata"].is_null());
    }
}
