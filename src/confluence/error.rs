use thiserror::Error;

/// Failures talking to the Confluence REST API
#[derive(Debug, Error)]
pub enum ConfluenceError {
    #[error("url empty")]
    EmptyEndpoint,

    #[error("invalid url {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ConfluenceResult<T> = Result<T, ConfluenceError>;
