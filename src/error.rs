// Convex client error types
use thiserror::Error;

/// Failures below the "status 200 vs not 200" outcome.
///
/// A non-200 response is not an error: it is reported to the user and the
/// process exits normally. Everything here aborts the command.
#[derive(Error, Debug)]
pub enum ConvexError {
    #[error("Invalid Convex URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Convex function error: {0}")]
    Function(String),
}

impl ConvexError {
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        ConvexError::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    pub fn function(message: impl Into<String>) -> Self {
        ConvexError::Function(message.into())
    }
}
