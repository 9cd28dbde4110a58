//! Tests for endpoint, completions, man.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_endpoint() {
    match parse(&["apiurl", "endpoint", "health"]) {
        CliCommand::Endpoint { path, env } => {
            assert_eq!(path, "health");
            assert!(!env.runtime);
        }
        _ => panic!("expected Endpoint"),
    }
}

#[test]
fn cli_parse_endpoint_runtime() {
    match parse(&["apiurl", "endpoint", "/users/1", "--runtime"]) {
        CliCommand::Endpoint { path, env } => {
            assert_eq!(path, "/users/1");
            assert!(env.runtime);
        }
        _ => panic!("expected Endpoint with --runtime"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["apiurl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["apiurl", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
