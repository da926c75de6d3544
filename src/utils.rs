//! Helpers shared across engine adapters.
//!
//! Currently just user-agent generation: upstream news sites tend to
//! fingerprint and block obviously non-browser clients, so outbound
//! requests carry a plausible desktop browser identity instead of a
//! library default.

use rand::seq::IndexedRandom;

/// Platform tokens observed in real desktop Firefox user agents.
const UA_PLATFORMS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
    "Macintosh; Intel Mac OS X 14.7",
];

/// Recent Firefox release versions to rotate through.
const UA_VERSIONS: &[&str] = &["139.0", "140.0", "141.0", "142.0", "143.0"];

/// Generate a plausible desktop browser `User-Agent` string.
///
/// A fresh platform/version combination is picked per call; nothing is
/// cached or reused between calls.
///
/// # Examples
///
/// ```ignore
/// let ua = gen_useragent();
/// assert!(ua.starts_with("Mozilla/5.0 ("));
/// ```
pub fn gen_useragent() -> String {
    let mut rng = rand::rng();
    let platform = UA_PLATFORMS.choose(&mut rng).unwrap();
    let version = UA_VERSIONS.choose(&mut rng).unwrap();
    format!("Mozilla/5.0 ({platform}; rv:{version}) Gecko/20100101 Firefox/{version}")
}
