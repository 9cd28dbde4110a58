//! Resolution of the backend API base URL.

use serde::Serialize;
use std::fmt;

use crate::env::EnvSource;

/// Build-time setting that overrides the default base URL.
pub const API_URL_ENV: &str = "VITE_API_URL";

/// Base URL used when no override is supplied: same origin, `/api` prefix.
pub const DEFAULT_API_URL: &str = "/api";

/// Where the resolved base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlSource {
    Override,
    Default,
}

impl UrlSource {
    /// Same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            UrlSource::Override => "override",
            UrlSource::Default => "default",
        }
    }
}

impl fmt::Display for UrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved API base URL together with the raw override it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    /// Effective base URL (`API_URL`).
    pub api_url: String,
    /// Override setting exactly as read; `None` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_override: Option<String>,
    pub source: UrlSource,
}

/// Resolve the API base URL from `env`.
///
/// A present, non-empty override is used verbatim. Unset or empty falls back
/// to [`DEFAULT_API_URL`]. Never fails.
pub fn resolve_config(env: &impl EnvSource) -> ApiConfig {
    let raw_override = env.get(API_URL_ENV);
    let (api_url, source) = match raw_override.as_deref() {
        Some(v) if !v.is_empty() => (v.to_string(), UrlSource::Override),
        _ => (DEFAULT_API_URL.to_string(), UrlSource::Default),
    };
    ApiConfig {
        api_url,
        raw_override,
        source,
    }
}

impl ApiConfig {
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn is_default(&self) -> bool {
        self.source == UrlSource::Default
    }

    /// Raw override as shown in diagnostics: `undefined` when unset.
    pub fn raw_override_display(&self) -> String {
        match &self.raw_override {
            Some(v) => format!("{v:?}"),
            None => "undefined".to_string(),
        }
    }

    /// Origin of an absolute base URL, or `None` for a relative base
    /// (requests go to the frontend's own origin).
    pub fn origin(&self) -> Option<String> {
        let parsed = url::Url::parse(&self.api_url).ok()?;
        match parsed.origin() {
            origin @ url::Origin::Tuple(..) => Some(origin.ascii_serialization()),
            url::Origin::Opaque(_) => None,
        }
    }

    /// Join a route path onto the base with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.api_url.clone();
        }
        let base = self.api_url.trim_end_matches('/');
        format!("{base}/{path}")
    }

    /// Emit the two startup diagnostics: the resolved value, then the raw override.
    pub fn log_diagnostics(&self) {
        let origin = self.origin();
        tracing::info!(
            api_url = %self.api_url,
            source = %self.source,
            origin = origin.as_deref().unwrap_or("same-origin"),
            "API_URL configured as {}",
            self.api_url
        );
        let raw = self.raw_override_display();
        tracing::info!(key = API_URL_ENV, raw = %raw, "{} env var: {}", API_URL_ENV, raw);
    }
}
