use crate::config::{TargetOptions, VuecatConfig};
use crate::error::ConfigError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use vuecat_core::category::DEFAULT_CATEGORY_NAMES;
use vuecat_core::BuildOptions;

impl VuecatConfig {
    /// Resolve target `name` into validated, immutable build options.
    ///
    /// Target options are merged over the top-level options, built-in
    /// defaults fill the rest, and relative paths are resolved against `cwd`.
    pub fn build_options(&self, name: &str, cwd: &Path) -> Result<BuildOptions, ConfigError> {
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| ConfigError::TargetNotFound {
                name: name.to_string(),
                available: self.targets.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;

        let src = required(
            name,
            "src",
            target.src.as_ref(),
            "Set \"src\" to the directory holding components/, filters/, ... (or pass --src)",
        )?;
        let dest = required(
            name,
            "dest",
            target.dest.as_ref(),
            "Set \"dest\" to the output script path (or pass --dest)",
        )?;

        let options = target.options.clone().merged_over(&self.options);
        validate_categories(name, options.categories.as_deref())?;
        warn_unknown_filter_categories(name, &options);

        let build = options.into_build_options(src, dest);
        build
            .validate()
            .map_err(|source| ConfigError::InvalidTarget {
                target: name.to_string(),
                source,
            })?;
        Ok(build.relative_to(cwd))
    }
}

fn required(
    target: &str,
    field: &str,
    value: Option<&PathBuf>,
    hint: &str,
) -> Result<PathBuf, ConfigError> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .cloned()
        .ok_or_else(|| ConfigError::MissingField {
            target: target.to_string(),
            field: field.to_string(),
            hint: hint.to_string(),
        })
}

/// Category names must be plain, unique directory names.
fn validate_categories(target: &str, categories: Option<&[String]>) -> Result<(), ConfigError> {
    let Some(categories) = categories else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for name in categories {
        let valid = !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != "..";
        if !valid {
            return Err(ConfigError::InvalidValue {
                field: format!("targets.{target}.categories"),
                value: format!("{name:?}"),
                hint: "Categories are directory names directly under src".to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("targets.{target}.categories"),
                value: name.clone(),
                hint: "Each category may appear only once".to_string(),
            });
        }
    }
    Ok(())
}

/// A filter key naming a category outside the category list selects nothing.
fn warn_unknown_filter_categories(target: &str, options: &TargetOptions) {
    let known: Vec<&str> = match &options.categories {
        Some(categories) => categories.iter().map(String::as_str).collect(),
        None => DEFAULT_CATEGORY_NAMES.to_vec(),
    };

    let filters = [
        ("includeOnly", options.include_only.as_ref()),
        ("exclude", options.exclude.as_ref()),
    ];
    for (option, filter) in filters {
        let Some(filter) = filter else { continue };
        for (category, _) in filter.iter() {
            if !known.contains(&category.as_str()) {
                tracing::warn!(target_name = target, option, category = %category, "filter names an unknown category");
            }
        }
    }
}
