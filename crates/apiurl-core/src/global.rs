//! Process-wide `API_URL`: resolved once, never reassigned.

use std::sync::OnceLock;

use crate::config::{resolve_config, ApiConfig};
use crate::env::{BuildEnv, EnvSource};

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Resolve from `env` and store the result, unless a value is already stored.
///
/// Diagnostics are logged only by the call that performs the resolution.
/// Later calls ignore `env` and return the stored value.
pub fn init(env: &impl EnvSource) -> &'static ApiConfig {
    API_CONFIG.get_or_init(|| {
        let cfg = resolve_config(env);
        cfg.log_diagnostics();
        cfg
    })
}

/// The stored configuration, resolved from the compiled-in environment on first use.
pub fn config() -> &'static ApiConfig {
    init(&BuildEnv)
}

/// The resolved base URL (`API_URL`).
pub fn api_url() -> &'static str {
    config().api_url()
}

/// Whether the process-wide value has been resolved yet.
pub fn is_initialized() -> bool {
    API_CONFIG.get().is_some()
}
