//! Error handling for the vuecat CLI.
//!
//! `CliError` is the top-level error returned by commands. Domain errors
//! (`ConfigError`, `BuildError`) convert into it via `#[from]`, and
//! [`cli_error_to_miette`] turns the final error into a `miette` report in
//! `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use vuecat_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

use miette::Report;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration errors (file not found, invalid values, unknown target)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build errors (unreadable sources, template failures)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
///
/// These are reported per target: a target with a configuration error is
/// skipped and the remaining targets still run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file and no `--src`/`--dest` to build an implicit target
    #[error("Config file not found: {}\n\nHint: Create a vuecat.config.json file, pass --config <path>, or pass --src and --dest", .0.display())]
    NotFound(PathBuf),

    /// The config file defines no targets
    #[error("No targets defined in {}\n\nHint: Add a \"targets\" object with at least one {{ \"src\", \"dest\" }} entry", .0.display())]
    NoTargets(PathBuf),

    /// A target named on the command line does not exist
    #[error("Target '{name}' not found\n\nHint: Available targets: {available}")]
    TargetNotFound {
        /// Requested target name
        name: String,
        /// Comma-separated list of defined targets
        available: String,
    },

    /// Missing required target field
    #[error("Target '{target}' is missing required field '{field}'\n\nHint: {hint}")]
    MissingField {
        /// Target name
        target: String,
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// A target's options were rejected
    #[error("Target '{target}' is invalid: {source}")]
    InvalidTarget {
        /// Target name
        target: String,
        /// Validation failure from the build pipeline
        #[source]
        source: vuecat_core::Error,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Build process errors. These abort the whole run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The minifier rejected a template
    #[error("Failed to minify template {}\n{message}\n\nHint: Fix the markup or relax the 'htmlmin' options (--no-htmlmin disables minification)", .path.display())]
    Minify {
        /// Template that failed to minify
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// `${ }` substitution failed
    #[error("Failed to process template {}: {message}\n\nHint: Check the template expressions against the 'process' context", .path.display())]
    Process {
        /// Template that failed to process
        path: PathBuf,
        /// Template engine message
        message: String,
    },

    /// A script that takes part in the build does not exist
    #[error("Source file not found: {}\n\nHint: Every component directory needs an index.js and every 'includeOnly' item must exist", .0.display())]
    MissingSource(PathBuf),

    /// Any other pipeline failure
    #[error("{0}")]
    Core(vuecat_core::Error),

    /// One or more targets were skipped because of configuration errors
    #[error("{} of {total} target(s) skipped: {}", .skipped.len(), .skipped.join(", "))]
    TargetsSkipped {
        /// Names of the skipped targets
        skipped: Vec<String>,
        /// Number of selected targets
        total: usize,
    },
}

impl From<vuecat_core::Error> for BuildError {
    fn from(err: vuecat_core::Error) -> Self {
        match err {
            vuecat_core::Error::Minify { path, message } => Self::Minify { path, message },
            vuecat_core::Error::Process { path, source } => Self::Process {
                path,
                message: source.to_string(),
            },
            vuecat_core::Error::MissingSource(path) => Self::MissingSource(path),
            other => Self::Core(other),
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use vuecat_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("vuecat.config.json");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a `CliError` into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a `BuildError` into a miette report.
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::Minify { path, message } => miette::miette!(
            help = "fix the markup or relax the 'htmlmin' options (--no-htmlmin disables minification)",
            "Failed to minify template {}\n{}",
            path.display(),
            message
        ),
        _ => miette::miette!("{}", err),
    }
}
