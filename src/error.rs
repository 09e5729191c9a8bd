//! Error taxonomy for video lookups.
//!
//! Every failure of a search or URL lookup is one of these variants and is
//! rendered into the error banner through its `Display` implementation.

use thiserror::Error;

/// Failure of a keyword search or URL lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No usable API key was configured (missing, blank or the placeholder).
    #[error(
        "YouTube API key is not configured. Set api_key in config.jsonc or the YT_LOOKUP_API_KEY environment variable"
    )]
    Configuration,

    /// User input was empty or could not be interpreted.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status, reported an error payload,
    /// or could not be reached at all (`status` is `None` in that case).
    #[error("{}", upstream_message(.status, .message))]
    Upstream {
        /// HTTP status (or API error code) when one is known
        status: Option<u16>,
        /// API-provided message, or a description of the transport failure
        message: String,
    },

    /// A lookup by id returned zero items.
    #[error("No video found for id {0}")]
    NotFound(String),
}

impl LookupError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status carried by an upstream failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match *status {
        Some(code) if message.is_empty() => format!("YouTube API error ({code})"),
        Some(code) => format!("YouTube API error ({code}): {message}"),
        None => format!("YouTube API request failed: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_with_status() {
        let err = LookupError::Upstream {
            status: Some(403),
            message: "The request cannot be completed because you have exceeded your quota."
                .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "YouTube API error (403): The request cannot be completed because you have exceeded your quota."
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_upstream_display_without_message() {
        let err = LookupError::Upstream {
            status: Some(500),
            message: String::new(),
        };
        assert_eq!(err.to_string(), "YouTube API error (500)");
    }

    #[test]
    fn test_non_upstream_has_no_status() {
        assert_eq!(LookupError::Configuration.status(), None);
        assert_eq!(LookupError::NotFound("abc".into()).status(), None);
        assert_eq!(
            LookupError::validation("Enter a search keyword").to_string(),
            "Enter a search keyword"
        );
    }
}
