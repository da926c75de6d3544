//! Upstream search engine adapters.
//!
//! Each submodule adapts one news site's search API to the common schema
//! in [`crate::models`]. Every adapter follows the same two-phase pattern:
//!
//! 1. **Request building**: turn a generic [`crate::models::SearchRequest`]
//!    into the exact URL and headers the upstream expects
//! 2. **Response parsing**: turn the raw body the host fetched into an
//!    ordered `Vec` of [`crate::models::SearchResult`] records
//!
//! # Supported Engines
//!
//! | Engine | Module | Upstream API | Notes |
//! |--------|--------|--------------|-------|
//! | Reuters | [`reuters`] | internal article-search JSON API | paging + time-range filters, no API key |
//!
//! # Common Patterns
//!
//! Adapters are pure per-call transforms: no I/O, no shared mutable state,
//! safe to invoke concurrently. All network traffic is the host's job, so
//! an adapter can be exercised completely offline in tests. Adapters
//! export:
//! - `build_request(cfg, request)`: produces an [`crate::models::OutboundRequest`]
//! - `parse_response(cfg, body)`: produces `Vec<SearchResult>`
//! - `TRAITS` / `ABOUT`: static capability flags for host-side routing

pub mod reuters;
