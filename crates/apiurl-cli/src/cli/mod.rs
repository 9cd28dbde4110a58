//! CLI for inspecting the resolved backend API URL.

mod commands;

use anyhow::{Context, Result};
use apiurl_core::env::{BuildEnv, DotEnv, Layered, ProcessEnv};
use apiurl_core::{global, logging, ApiConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use commands::{run_completions, run_endpoint, run_man, run_show};

/// Top-level CLI for apiurl.
#[derive(Debug, Parser)]
#[command(name = "apiurl")]
#[command(about = "apiurl: resolve the backend API base URL", long_about = None)]
pub struct Cli {
    /// Log to stderr instead of the state-dir log file.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to read the override setting from, besides the compiled-in value.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Let the process environment shadow the compiled-in value.
    #[arg(long)]
    pub runtime: bool,

    /// Read variables from a .env file; these shadow everything else.
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resolved API_URL and where it came from.
    Show {
        #[command(flatten)]
        env: EnvArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the full URL of an API route under the resolved base.
    Endpoint {
        /// Route path, e.g. `health`.
        path: String,

        #[command(flatten)]
        env: EnvArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Render the man page (roff) to stdout.
    Man,
}

/// `--env-file` over `--runtime` over the compiled-in value.
pub type CliEnv = Layered<Option<DotEnv>, Layered<Option<ProcessEnv>, BuildEnv>>;

impl EnvArgs {
    /// Stack the selected sources in precedence order.
    pub fn sources(&self) -> Result<CliEnv> {
        let file = self
            .env_file
            .as_deref()
            .map(DotEnv::from_path)
            .transpose()
            .context("load --env-file")?;
        let process = self.runtime.then_some(ProcessEnv);
        Ok(Layered::new(file, Layered::new(process, BuildEnv)))
    }

    /// Resolve the process-wide configuration from the selected sources.
    pub fn resolve(&self) -> Result<&'static ApiConfig> {
        Ok(global::init(&self.sources()?))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);

        match cli.command {
            CliCommand::Show { env, format } => run_show(env.resolve()?, format)?,
            CliCommand::Endpoint { path, env } => run_endpoint(env.resolve()?, &path),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn init_logging(verbose: bool) {
    if verbose {
        logging::init_logging_stderr();
        return;
    }
    if let Err(err) = logging::init_logging("apiurl") {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }
}

#[cfg(test)]
mod tests;
