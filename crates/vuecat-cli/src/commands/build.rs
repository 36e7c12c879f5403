//! Build command implementation.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::VuecatConfig;
use crate::error::{BuildError, Result};
use crate::ui;
use std::time::Instant;

/// Execute the build command.
///
/// # Process
///
/// 1. Resolve the working directory and load configuration
/// 2. For each selected target, resolve options and run the pipeline
/// 3. Print `Created <dest> <size>` per written target
///
/// A target with a configuration error (missing `src`/`dest`, `src` not a
/// directory, invalid option value) is reported as a warning and skipped;
/// the remaining targets still run and the command fails afterwards. Any
/// other error aborts the run.
pub fn execute(args: BuildArgs) -> Result<()> {
    let start = Instant::now();
    let cwd = utils::resolve_cwd(args.target.cwd.as_deref())?;
    let loaded = VuecatConfig::load(&args.target, &args.targets, &cwd)?;

    let mut skipped = Vec::new();
    for name in &loaded.targets {
        let options = match loaded.config.build_options(name, &cwd) {
            Ok(options) => options,
            Err(err) => {
                ui::warning(&format!("Skipping target '{}': {}", name, err));
                skipped.push(name.clone());
                continue;
            }
        };

        tracing::debug!(target_name = %name, src = %options.src().display(), "building target");
        match vuecat_core::build(&options) {
            Ok(report) => {
                tracing::debug!(
                    target_name = %name,
                    units = report.units,
                    skipped_empty = report.skipped_empty,
                    "target built"
                );
                ui::success(&format!(
                    "Created {} {}",
                    ui::highlight(&utils::display_path(&report.dest, &cwd)),
                    ui::format_kilobytes(report.bytes)
                ));
            }
            Err(err) if err.is_config() => {
                ui::warning(&format!("Skipping target '{}': {}", name, err));
                skipped.push(name.clone());
            }
            Err(err) => return Err(BuildError::from(err).into()),
        }
    }

    if !skipped.is_empty() {
        return Err(BuildError::TargetsSkipped {
            skipped,
            total: loaded.targets.len(),
        }
        .into());
    }

    tracing::debug!(elapsed = %ui::format_duration(start.elapsed()), "build finished");
    Ok(())
}
