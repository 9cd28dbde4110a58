//! Tests for show and its environment flags.

use super::parse;
use crate::cli::{Cli, CliCommand, OutputFormat};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_show_defaults() {
    match parse(&["apiurl", "show"]) {
        CliCommand::Show { env, format } => {
            assert!(!env.runtime);
            assert!(env.env_file.is_none());
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_runtime_env_file_json() {
    match parse(&[
        "apiurl",
        "show",
        "--runtime",
        "--env-file",
        "/srv/app/.env",
        "--format",
        "json",
    ]) {
        CliCommand::Show { env, format } => {
            assert!(env.runtime);
            assert_eq!(env.env_file.as_deref(), Some(Path::new("/srv/app/.env")));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected Show with flags"),
    }
}

#[test]
fn cli_parse_show_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["apiurl", "show", "--format", "yaml"]).is_err());
}

#[test]
fn cli_parse_global_verbose() {
    let cli = Cli::try_parse_from(["apiurl", "show", "-v"]).unwrap();
    assert!(cli.verbose);
}
