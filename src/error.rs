//! Error taxonomy for the engine adapters.
//!
//! The surface is intentionally small. Missing optional pieces of an
//! upstream response are not errors at all (they degrade to documented
//! defaults); what remains is a handful of hard failures the host should
//! see rather than have papered over.

use thiserror::Error;

/// Failures an engine adapter can surface to the host.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The host passed a time-range tag no engine recognizes.
    ///
    /// This is a caller contract violation: the set of accepted tags is
    /// fixed, and an unknown one must fail at the boundary instead of
    /// silently dropping the date filter.
    #[error("unsupported time range tag {0:?} (expected day, week, month, or year)")]
    UnsupportedTimeRange(String),

    /// The upstream body was not valid JSON, or an article object was
    /// missing one of its required fields.
    #[error("failed to decode upstream search response")]
    Json(#[from] serde_json::Error),

    /// An article carried a publish timestamp that does not match the
    /// upstream wire format. A corrupt timestamp means the upstream
    /// contract changed under us, so it is propagated, never coerced.
    #[error("malformed display_time {value:?}")]
    Timestamp {
        /// The offending timestamp string as received.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_time_range_message_names_the_tag() {
        let err = EngineError::UnsupportedTimeRange("decade".to_string());
        assert!(err.to_string().contains("decade"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
