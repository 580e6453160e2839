//! CLI for the daily luach PDF fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use luach_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_fetch, run_serve};

/// Top-level CLI for the daily luach PDF fetcher.
#[derive(Debug, Parser)]
#[command(name = "luach")]
#[command(about = "Fetch the daily PDF from dailyluach.com", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/luach/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download today's PDF once. Exits non-zero on failure (for cron, n8n and friends).
    Fetch {
        /// Directory to save the PDF in (default: `download_dir` from config).
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Print the fetch result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API that triggers downloads.
    Serve {
        /// Address to bind (default: `server.host` from config).
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: $PORT, then `server.port` from config).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { output_dir, json } => run_fetch(&cfg, output_dir, json).await?,
            CliCommand::Serve { host, port } => run_serve(&cfg, host, port).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
