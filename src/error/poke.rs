use thiserror::Error;

/// Failures contained within a single poke task. These are logged and
/// counted, never propagated across task boundaries.
#[derive(Debug, Error)]
pub enum PokeError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    SendFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Bad status {status}")]
    BadStatus { status: u16 },
    #[error("Poke task did not complete: {source}")]
    Join {
        #[source]
        source: tokio::task::JoinError,
    },
}
