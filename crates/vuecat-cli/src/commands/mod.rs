//! Command implementations.
//!
//! - [`build`] - build targets into their output scripts
//! - [`check`] - validate configuration and list resolved units
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod build;
pub mod check;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
