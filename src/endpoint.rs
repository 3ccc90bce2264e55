use std::collections::BTreeMap;

use serde::Deserialize;

/// HTTP verbs the poker knows how to issue. Anything else in the endpoints
/// file is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
}

/// A header value as written in the endpoints file.
///
/// A bare string names an environment variable to read at request time; the
/// `{ "literal": "..." }` object form carries the value verbatim. Keeping the
/// indirection in the descriptor (instead of resolving it at load) means
/// secrets are read from the process environment at the moment the request
/// is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Literal { literal: String },
    Env(String),
}

/// One entry of the endpoints file. Immutable after load; each descriptor is
/// moved into exactly one poke task.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    pub name: Option<String>,
    pub url: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: BTreeMap<String, HeaderValue>,
}

impl Endpoint {
    /// Label used for log correlation: the name when present, the url
    /// otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }

    /// Resolves headers against the process environment.
    ///
    /// An env-indirected value whose variable is unset resolves to an empty
    /// string; the header is still sent.
    #[must_use]
    pub fn resolved_headers(&self) -> Vec<(String, String)> {
        self.resolve_headers_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_headers_with<F>(&self, lookup: F) -> Vec<(String, String)>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.headers
            .iter()
            .map(|(key, value)| {
                let resolved = match value {
                    HeaderValue::Literal { literal } => literal.clone(),
                    HeaderValue::Env(var) => lookup(var).unwrap_or_default(),
                };
                (key.clone(), resolved)
            })
            .collect()
    }
}
