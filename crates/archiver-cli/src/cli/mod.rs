//! CLI for the Wayback Machine archiver.

mod commands;

use anyhow::Result;
use archiver_core::config;
use archiver_core::Archiver;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_link, run_manual, run_snapshots, run_token, run_trigger};

/// Top-level CLI for the archiver.
#[derive(Debug, Parser)]
#[command(name = "archiver")]
#[command(about = "Trigger and list Wayback Machine snapshots", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/archiver/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ask the Wayback Machine to capture one or more URLs now.
    Trigger {
        /// Absolute URLs to capture. Captured concurrently.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// List known snapshots of a URL, newest first.
    Snapshots {
        /// Absolute URL to look up.
        url: String,
        /// Maximum number of snapshots (default: max_snapshots from config).
        #[arg(long, value_name = "N")]
        max: Option<usize>,
        /// Print records as JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },

    /// Print the "all snapshots" link for a URL.
    Link {
        /// Absolute URL.
        url: String,
    },

    /// Print the anti-forgery token for an action.
    Token {
        /// Action name.
        #[arg(default_value = archiver_core::manual::TRIGGER_ACTION)]
        action: String,
        /// Shared secret the token is derived from.
        #[arg(long, env = "ARCHIVER_SECRET")]
        secret: String,
    },

    /// Handle a manual trigger request (JSON `{"url": ..., "token": ...}`) and print the JSON response.
    Manual {
        /// Request body as JSON.
        request: String,
        /// Shared secret tokens are checked against.
        #[arg(long, env = "ARCHIVER_SECRET")]
        secret: String,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let archiver = Archiver::new(cfg);

        match cli.command {
            CliCommand::Trigger { urls } => run_trigger(archiver, urls).await?,
            CliCommand::Snapshots { url, max, json } => {
                run_snapshots(archiver, url, max, json).await?
            }
            CliCommand::Link { url } => run_link(&archiver, &url),
            CliCommand::Token { action, secret } => run_token(&action, &secret),
            CliCommand::Manual { request, secret } => {
                run_manual(archiver, request, secret).await?
            }
            CliCommand::Config => run_config(&archiver, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
