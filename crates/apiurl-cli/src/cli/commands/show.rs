//! `apiurl show` – print the resolved configuration.

use anyhow::{Context, Result};
use apiurl_core::{ApiConfig, API_URL_ENV};

use crate::cli::OutputFormat;

pub fn render(cfg: &ApiConfig, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let origin = cfg.origin().unwrap_or_else(|| "same-origin".to_string());
            format!(
                "API_URL={}\nsource={}\norigin={}\n{}={}\n",
                cfg.api_url(),
                cfg.source,
                origin,
                API_URL_ENV,
                cfg.raw_override_display()
            )
        }
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(cfg).context("serialize config as JSON")?;
            s.push('\n');
            s
        }
        OutputFormat::Toml => toml::to_string_pretty(cfg).context("serialize config as TOML")?,
    };
    Ok(out)
}

pub fn run_show(cfg: &ApiConfig, format: OutputFormat) -> Result<()> {
    print!("{}", render(cfg, format)?);
    Ok(())
}
