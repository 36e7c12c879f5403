//! Logging infrastructure for the vuecat CLI.
//!
//! Structured logging via the `tracing` ecosystem. Events from `vuecat-core`
//! (resolution and rendering steps, skipped inputs) and from this crate go
//! through one subscriber that writes to stderr, so stdout stays free for
//! command output such as `check --schema`. ANSI output follows the same
//! detection as status lines ([`crate::ui::should_use_color`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use vuecat_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting build");
//! debug!("Rendering template: {}", "components/greeting/template.html");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "vuecat_core=debug,vuecat_cli=debug";
const QUIET_FILTER: &str = "vuecat_core=error,vuecat_cli=error";
const DEFAULT_FILTER: &str = "vuecat_core=info,vuecat_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for vuecat crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for vuecat crates
///
/// # Examples
///
/// ```rust,no_run
/// use vuecat_cli::logger::init_logger;
///
/// // Debug logging, no colors (CI / piped output)
/// init_logger(true, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use vuecat_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("vuecat_core=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
