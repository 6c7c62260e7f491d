//! mc - object storage client
//!
//! Command-line entry point. Parses arguments, sets up logging and runs the
//! selected command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mc_cli::commands::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable.
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli);

    std::process::exit(exit_code.as_i32());
}
