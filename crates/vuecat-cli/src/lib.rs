//! vuecat CLI - command-line front end for `vuecat-core`.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - `vuecat.config.json` loading and per-target option resolution
//! - [`commands`] - `build` and `check`
//! - [`error`] - CLI error types with actionable messages
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and formatting on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use vuecat_cli::config::VuecatConfig;
//!
//! println!("{}", VuecatConfig::example_config());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
