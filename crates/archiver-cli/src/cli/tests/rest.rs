use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_snapshots_defaults() {
    match parse(&["archiver", "snapshots", "https://example.com/"]) {
        CliCommand::Snapshots { url, max, json } => {
            assert_eq!(url, "https://example.com/");
            assert!(max.is_none());
            assert!(!json);
        }
        _ => panic!("expected Snapshots"),
    }
}

#[test]
fn cli_parse_snapshots_max_and_json() {
    match parse(&["archiver", "snapshots", "https://example.com/", "--max", "5", "--json"]) {
        CliCommand::Snapshots { max, json, .. } => {
            assert_eq!(max, Some(5));
            assert!(json);
        }
        _ => panic!("expected Snapshots"),
    }
}

#[test]
fn cli_parse_link() {
    match parse(&["archiver", "link", "https://example.com/a/"]) {
        CliCommand::Link { url } => assert_eq!(url, "https://example.com/a/"),
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_token_default_action() {
    match parse(&["archiver", "token", "--secret", "s3cret"]) {
        CliCommand::Token { action, secret } => {
            assert_eq!(action, "archiver_trigger_archive");
            assert_eq!(secret, "s3cret");
        }
        _ => panic!("expected Token"),
    }
}

#[test]
fn cli_parse_config_with_global_path() {
    let cli = Cli::try_parse_from(["archiver", "config", "--config", "/tmp/a.toml"]).unwrap();
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/a.toml")));
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["archiver", "bogus"]).is_err());
}

#[test]
fn cli_parse_manual() {
    match parse(&[
        "archiver",
        "manual",
        r#"{"url":"https://example.com/","token":"ff"}"#,
        "--secret",
        "s3cret",
    ]) {
        CliCommand::Manual { request, secret } => {
            assert!(request.contains("\"token\":\"ff\""));
            assert_eq!(secret, "s3cret");
        }
        _ => panic!("expected Manual"),
    }
}
