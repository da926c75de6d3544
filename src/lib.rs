//! # Presswire
//!
//! Adapters that let a metasearch aggregator query news sites' internal
//! search APIs and normalize the answers into one common result schema.
//!
//! ## Design
//!
//! An engine adapter is two pure functions the host invokes per search:
//!
//! 1. **Request building**: a generic [`models::SearchRequest`] becomes the
//!    exact URL and headers the upstream expects
//! 2. **Response parsing**: the raw body the host fetched becomes an
//!    ordered `Vec` of [`models::SearchResult`] records
//!
//! The host owns everything in between: the actual HTTP fetch, retries,
//! caching, ranking, and deduplication. Adapters hold no state between
//! calls beyond a read-only [`config::EngineConfig`], so concurrent
//! searches need no coordination.
//!
//! ## Usage
//!
//! ```ignore
//! let cfg = EngineConfig::shared();
//! let request = SearchRequest::new("climate change");
//! let outbound = engines::reuters::build_request(cfg, &request);
//! // ... host fetches outbound.url with outbound.headers ...
//! let results = engines::reuters::parse_response(cfg, &body)?;
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod models;
pub mod utils;

pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{About, EngineTraits, OutboundRequest, SearchRequest, SearchResult, TimeRange};
