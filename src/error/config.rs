use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read endpoints file '{path}': {source}")]
    ReadEndpoints {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse endpoints file '{path}': {source}")]
    ParseEndpoints {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Endpoint {index} has an empty url.")]
    EmptyUrl { index: usize },
    #[error("Failed to load env file '{path}': {source}")]
    LoadEnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
