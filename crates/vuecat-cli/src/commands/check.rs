//! Check command implementation.
//!
//! Validates configuration and lists the units each target would
//! concatenate, without reading their contents or writing output.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::VuecatConfig;
use crate::error::{BuildError, Result, ResultExt};
use crate::ui;
use vuecat_core::{BuildOptions, Unit};

/// Execute the check command.
///
/// With `--schema`, prints the JSON schema of the config file to stdout and
/// returns without loading any configuration.
pub fn execute(args: CheckArgs) -> Result<()> {
    if args.schema {
        let schema = serde_json::to_string_pretty(&VuecatConfig::json_schema())
            .context("Failed to render config schema")?;
        println!("{}", schema);
        return Ok(());
    }

    let cwd = utils::resolve_cwd(args.target.cwd.as_deref())?;
    let loaded = VuecatConfig::load(&args.target, &args.targets, &cwd)?;
    match &loaded.path {
        Some(path) => ui::info(&format!("Using {}", utils::display_path(path, &cwd))),
        None => ui::info("No config file, using command-line target"),
    }

    let mut skipped = Vec::new();
    for name in &loaded.targets {
        let result = loaded
            .config
            .build_options(name, &cwd)
            .map_err(|e| e.to_string())
            .and_then(|options| match vuecat_core::resolve_units(&options) {
                Ok(units) => Ok((options, units)),
                Err(err) if err.is_config() => Err(err.to_string()),
                Err(err) => Err(format!("{}", BuildError::from(err))),
            });

        match result {
            Ok((options, units)) => report_target(name, &options, &units, &cwd),
            Err(message) => {
                ui::warning(&format!("Target '{}': {}", name, message));
                skipped.push(name.clone());
            }
        }
    }

    if !skipped.is_empty() {
        return Err(BuildError::TargetsSkipped {
            skipped,
            total: loaded.targets.len(),
        }
        .into());
    }

    ui::success("Configuration is valid");
    Ok(())
}

fn report_target(name: &str, options: &BuildOptions, units: &[Unit], cwd: &std::path::Path) {
    ui::info(&format!(
        "Target '{}': {} -> {} ({} unit{})",
        name,
        utils::display_path(options.src(), cwd),
        utils::display_path(options.dest(), cwd),
        units.len(),
        if units.len() == 1 { "" } else { "s" }
    ));
    for unit in units {
        println!("  {}", describe_unit(unit, options));
    }
}

fn describe_unit(unit: &Unit, options: &BuildOptions) -> String {
    let relative = |path: &std::path::Path| utils::display_path(path, options.src());
    match unit {
        Unit::Script { path, .. } => relative(path.as_path()),
        Unit::Component {
            script, template, ..
        } => match template {
            Some(template) => format!(
                "{} + {}",
                relative(script.as_path()),
                relative(template.as_path())
            ),
            None => relative(script.as_path()),
        },
    }
}
