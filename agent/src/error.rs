//! Error types for the agent core.

use thiserror::Error;

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent configuration.
///
/// All variants are construction-time errors: once a [`crate::Matcher`]
/// compiles, responding cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A rule declared no candidate replies.
    #[error("rule {rule:?}: replies must be non-empty")]
    EmptyReplies { rule: String },

    /// A rule's trigger is not a valid regular expression.
    #[error("rule {rule:?}: invalid trigger pattern: {source}")]
    InvalidTrigger {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_rule() {
        let err = Error::EmptyReplies {
            rule: "greeting".to_string(),
        };
        assert_eq!(err.to_string(), "rule \"greeting\": replies must be non-empty");
    }
}
