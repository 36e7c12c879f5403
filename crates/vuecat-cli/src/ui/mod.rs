//! Terminal output: status lines and formatting.
//!
//! All status output goes to stderr. Colors follow `--no-color`, `NO_COLOR`,
//! `FORCE_COLOR` and TTY detection; `--quiet` silences everything but
//! warnings and errors.
//!
//! # Examples
//!
//! ```no_run
//! use vuecat_cli::ui;
//!
//! ui::init(false, false);
//! ui::success("Created dist/app.js 1.25kb");
//! ui::warning("Skipping target 'admin'");
//! ```

mod format;
mod messages;

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_kilobytes};
pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled, for status lines and log
/// events alike.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

/// Initialize terminal output from the global flags.
///
/// Should be called once, early in `main`.
pub fn init(quiet: bool, no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Emphasize a path or name in a status line.
pub fn highlight(text: &str) -> String {
    if colors_enabled() {
        text.cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_env_disables_color() {
        std::env::remove_var("FORCE_COLOR");
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_color());
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial]
    fn test_force_color_env_enables_color() {
        std::env::remove_var("NO_COLOR");
        std::env::set_var("FORCE_COLOR", "1");
        assert!(should_use_color());
        std::env::remove_var("FORCE_COLOR");
    }

    #[test]
    #[serial]
    fn test_no_color_flag_wins_over_force_color() {
        std::env::remove_var("NO_COLOR");
        std::env::set_var("FORCE_COLOR", "1");
        init(false, true);
        assert!(!colors_enabled());
        init(false, false);
        assert!(colors_enabled());
        std::env::remove_var("FORCE_COLOR");
        init(false, true);
    }

    #[test]
    #[serial]
    fn test_highlight_plain_without_colors() {
        init(false, true);
        assert_eq!(highlight("dist/app.js"), "dist/app.js");
        assert!(!is_quiet());
    }
}
