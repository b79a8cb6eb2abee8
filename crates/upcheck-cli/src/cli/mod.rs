//! CLI for the upcheck release resolvers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use upcheck_core::config;
use upcheck_core::env::OutputFormat;

use commands::{run_config, run_list, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "upcheck")]
#[command(about = "Resolve the latest release download of a vendor application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a provider and print version, filename and url.
    Resolve {
        /// Provider name (see `upcheck list`).
        provider: String,

        /// Release channel to select (feed providers only).
        #[arg(long)]
        channel: Option<String>,

        /// Output format: env, json or plist.
        #[arg(long, default_value = "env")]
        format: OutputFormat,
    },

    /// List the available providers and the variables they emit.
    List,

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                provider,
                channel,
                format,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_resolve(&cfg, &provider, channel.as_deref(), format)?;
            }
            CliCommand::List => run_list(),
            CliCommand::Config => run_config()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
