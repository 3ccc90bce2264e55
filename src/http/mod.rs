mod poke;

pub use poke::poke_endpoint;

use std::time::Duration;

use reqwest::Client;

use crate::error::AppResult;

/// Builds the HTTP client whose handle is cloned into every poke task.
///
/// Without `--timeout` the client keeps its own defaults; the dispatcher adds
/// no timeout of its own.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(timeout: Option<Duration>) -> AppResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
