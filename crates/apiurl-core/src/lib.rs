//! Backend API base URL resolution.
//!
//! [`config::resolve_config`] is the pure resolver over an injected
//! [`env::EnvSource`]; [`global::api_url`] is the process-wide value.

pub mod config;
pub mod env;
pub mod global;
pub mod logging;

pub use config::{resolve_config, ApiConfig, UrlSource, API_URL_ENV, DEFAULT_API_URL};
pub use global::api_url;
