//! Engine configuration.
//!
//! All tunables an adapter needs are collected into a single immutable
//! [`EngineConfig`] value constructed once and passed by reference to both
//! the request builder and the response parser. There is no hidden global
//! mutable state; concurrent searches share the same read-only value.

use once_cell::sync::Lazy;

static SHARED: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);

/// Immutable per-engine settings.
///
/// The defaults target the public Reuters site. `base_url` is overridable
/// so a host can point the adapter at a mirror (or a local stub in tests)
/// without touching the adapter itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Scheme and host the article URLs and the search endpoint hang off.
    pub base_url: String,
    /// Results requested per page; also the multiplier for the page offset.
    pub page_size: u32,
    /// Upstream sort key. Upstream also accepts `display_date:desc` and
    /// `display_date:asc`.
    pub sort_order: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.reuters.com".to_string(),
            page_size: 20,
            sort_order: "relevance".to_string(),
        }
    }
}

impl EngineConfig {
    /// The process-wide default configuration, built on first use.
    pub fn shared() -> &'static EngineConfig {
        &SHARED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.base_url, "https://www.reuters.com");
        assert_eq!(cfg.page_size, 20);
        assert_eq!(cfg.sort_order, "relevance");
    }

    #[test]
    fn test_shared_config_matches_default() {
        assert_eq!(EngineConfig::shared(), &EngineConfig::default());
    }
}
