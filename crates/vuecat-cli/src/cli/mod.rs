//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `vuecat build [TARGET]...` - build targets into their output scripts
//! - `vuecat check [TARGET]...` - validate configuration and list the units
//!   each target would concatenate

mod commands;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, TargetArgs};
pub use validation::{parse_define, parse_escapes, parse_filter, parse_quote_char};

/// vuecat - concatenate a Vue source tree into one script
#[derive(Parser, Debug)]
#[command(
    name = "vuecat",
    version,
    about = "Concatenate a Vue source tree into one script",
    long_about = "vuecat walks a convention-organized source tree (components, directives,\n\
                  filters, mixins, partials, transitions), inlines each component's\n\
                  template.html as a string literal at its _TEMPLATE placeholder and\n\
                  joins everything into a single script."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
