use std::path::{Path, PathBuf};

use tracing::info;

use crate::endpoint::Endpoint;
use crate::error::{AppError, AppResult, ConfigError};

/// Endpoints file checked when no path is given on the command line,
/// resolved relative to the current working directory.
pub const DEFAULT_ENDPOINTS_FILE: &str = "endpoints.json";

/// Loads the endpoint list from the provided path or the default location.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not a valid JSON array
/// of endpoints, or an endpoint fails validation. All of these are fatal and
/// happen before any network activity.
pub fn load_endpoints(path: Option<&str>) -> AppResult<Vec<Endpoint>> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_ENDPOINTS_FILE), PathBuf::from);
    let endpoints = load_endpoints_file(&path)?;
    for endpoint in &endpoints {
        info!(url = %endpoint.url, "endpoint found");
    }
    Ok(endpoints)
}

pub(crate) fn load_endpoints_file(path: &Path) -> AppResult<Vec<Endpoint>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadEndpoints {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let endpoints: Vec<Endpoint> = serde_json::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseEndpoints {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    for (index, endpoint) in endpoints.iter().enumerate() {
        if endpoint.url.trim().is_empty() {
            return Err(AppError::config(ConfigError::EmptyUrl { index }));
        }
    }
    Ok(endpoints)
}
