//! Tests for the fetch, serve and completions subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::Path;

#[test]
fn cli_parse_fetch() {
    match parse(&["luach", "fetch"]) {
        CliCommand::Fetch { output_dir, json } => {
            assert!(output_dir.is_none());
            assert!(!json);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_output_dir_and_json() {
    match parse(&["luach", "fetch", "-o", "/srv/luach", "--json"]) {
        CliCommand::Fetch { output_dir, json } => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("/srv/luach")));
            assert!(json);
        }
        _ => panic!("expected Fetch with -o and --json"),
    }

    match parse(&["luach", "fetch", "--output-dir", "out"]) {
        CliCommand::Fetch { output_dir, .. } => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("out")));
        }
        _ => panic!("expected Fetch with --output-dir"),
    }
}

#[test]
fn cli_parse_serve_defaults() {
    match parse(&["luach", "serve"]) {
        CliCommand::Serve { host, port } => {
            assert!(host.is_none());
            assert!(port.is_none());
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_host_port() {
    match parse(&["luach", "serve", "--host", "127.0.0.1", "--port", "8080"]) {
        CliCommand::Serve { host, port } => {
            assert_eq!(host.as_deref(), Some("127.0.0.1"));
            assert_eq!(port, Some(8080));
        }
        _ => panic!("expected Serve with --host and --port"),
    }
}

#[test]
fn cli_parse_serve_rejects_bad_port() {
    assert!(Cli::try_parse_from(["luach", "serve", "--port", "70000"]).is_err());
    assert!(Cli::try_parse_from(["luach", "serve", "--port", "http"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["luach", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["luach", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["luach", "fetch", "--config", "/etc/luach.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/luach.toml")));

    let cli = Cli::try_parse_from(["luach", "--config", "c.toml", "serve"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("c.toml")));
    assert!(matches!(cli.command, CliCommand::Serve { .. }));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["luach"]).is_err());
}
