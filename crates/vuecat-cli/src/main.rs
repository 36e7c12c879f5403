//! vuecat CLI - inline Vue component templates and concatenate a source tree
//! into one script.
//!
//! This is the entry point: argument parsing, logging initialization and
//! command dispatch.

use clap::Parser;
use miette::Result;
use vuecat_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging and terminal output based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
