//! CLI command definitions and execution
//!
//! `mc config host` is the only command tree implemented here; other client
//! commands plug into `Commands` the same way.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

pub mod host;

/// mc - object storage client
#[derive(Parser, Debug)]
#[command(name = "mc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, env = "MC_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// List, modify and remove hosts in configuration file
    #[command(override_usage = host::HOST_USAGE, after_help = host::HOST_EXAMPLES)]
    Host(host::HostArgs),
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    let formatter = Formatter::new(OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    });

    match cli.command {
        Commands::Config(ConfigCommands::Host(args)) => {
            host::execute(args, cli.config_dir, &formatter)
        }
    }
}
