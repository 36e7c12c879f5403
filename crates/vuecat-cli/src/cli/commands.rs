use super::validation::{parse_define, parse_escapes, parse_filter, parse_quote_char};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use vuecat_core::Selection;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build targets into their output scripts
    ///
    /// Builds every target in vuecat.config.json, or only the named ones.
    /// Without a config file, --src and --dest define a single target.
    Build(BuildArgs),

    /// Validate configuration and list resolved units without writing
    Check(CheckArgs),
}

/// Arguments for the build command.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Targets to build (all targets when omitted)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the check command.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Targets to check (all targets when omitted)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Print the JSON schema of vuecat.config.json and exit
    #[arg(long)]
    pub schema: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Config location and per-target overrides shared by `build` and `check`.
///
/// Overrides apply to every selected target and win over the config file
/// and the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Path to the config file
    ///
    /// Defaults to vuecat.config.json in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory; relative paths resolve against it
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Source root containing the category directories
    #[arg(short, long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Output script path
    #[arg(short, long, value_name = "FILE")]
    pub dest: Option<PathBuf>,

    /// Quote character for template literals
    #[arg(long, value_name = "CHAR", value_parser = parse_quote_char)]
    pub quote_char: Option<char>,

    /// Indentation unit for wrapped template lines (accepts \t)
    #[arg(long, value_name = "STRING", value_parser = parse_escapes)]
    pub indent_string: Option<String>,

    /// Text placed between units (accepts \n, \r and \t)
    #[arg(long, value_name = "STRING", value_parser = parse_escapes)]
    pub separator: Option<String>,

    /// Disable HTML minification of templates
    #[arg(long)]
    pub no_htmlmin: bool,

    /// Enable ${ } substitution in templates
    #[arg(long)]
    pub process: bool,

    /// Add a substitution variable (implies --process)
    #[arg(long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    pub define: Vec<(String, String)>,

    /// Restrict a category to all or some of its items
    ///
    /// Repeatable: --include-only components=greeting,alert --include-only mixins=all
    #[arg(long, value_name = "CATEGORY=all|a,b", value_parser = parse_filter)]
    pub include_only: Vec<(String, Selection)>,

    /// Drop all or some items of a category
    #[arg(long, value_name = "CATEGORY=all|a,b", value_parser = parse_filter)]
    pub exclude: Vec<(String, Selection)>,

    /// Category order (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub categories: Vec<String>,
}
