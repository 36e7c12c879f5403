//! Source resolution: which scripts and components take part in a build.
//!
//! Resolution only inspects directory structure; file contents are read by
//! the assembler.

use crate::category::{
    Category, CategoryKind, COMPONENT_SCRIPT, COMPONENT_TEMPLATE, SCRIPT_EXTENSION,
};
use crate::error::{Error, Result};
use crate::filter::{CategoryFilter, Selection};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One contribution to the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// A plain script from a non-component category.
    Script {
        /// Category the script was found in
        category: String,
        /// `<src>/<category>/<name>.js`
        path: PathBuf,
    },
    /// A component directory.
    Component {
        /// Component directory name
        name: String,
        /// `<src>/<category>/<name>/index.js`
        script: PathBuf,
        /// `<src>/<category>/<name>/template.html`, when present
        template: Option<PathBuf>,
    },
}

impl Unit {
    /// Path of the script whose text this unit contributes.
    pub fn script_path(&self) -> &Path {
        match self {
            Self::Script { path, .. } => path,
            Self::Component { script, .. } => script,
        }
    }

    pub fn template_path(&self) -> Option<&Path> {
        match self {
            Self::Script { .. } => None,
            Self::Component { template, .. } => template.as_deref(),
        }
    }
}

/// Resolve the ordered units under `src`.
///
/// With an inclusion filter, only categories keyed in it are visited (in
/// `categories` order) and an item list restricts and orders the items.
/// Exclusion is applied last, so `"all"` in `exclude` drops a category even
/// if `include_only` names it.
pub fn resolve(
    src: &Path,
    categories: &[Category],
    include_only: Option<&CategoryFilter>,
    exclude: Option<&CategoryFilter>,
) -> Result<Vec<Unit>> {
    if !src.is_dir() {
        return Err(Error::InvalidSource(src.to_path_buf()));
    }

    let mut units = Vec::new();

    for category in categories {
        let included = match include_only {
            Some(filter) => match filter.get(category.name()) {
                Some(selection) => Some(selection),
                None => continue,
            },
            None => None,
        };

        let dir = src.join(category.name());
        if !dir.is_dir() {
            tracing::debug!(category = %category, "category not present, skipping");
            continue;
        }

        let excluded = exclude.and_then(|filter| filter.get(category.name()));
        if excluded.is_some_and(Selection::is_all) {
            tracing::debug!(category = %category, "category excluded");
            continue;
        }

        let before = units.len();
        match category.kind() {
            CategoryKind::ComponentPair => {
                resolve_components(&dir, included, excluded, &mut units)?
            }
            CategoryKind::Plain => {
                resolve_scripts(category, &dir, included, excluded, &mut units)?
            }
        }
        tracing::debug!(category = %category, units = units.len() - before, "resolved category");
    }

    Ok(units)
}

fn resolve_components(
    dir: &Path,
    included: Option<&Selection>,
    excluded: Option<&Selection>,
    units: &mut Vec<Unit>,
) -> Result<()> {
    let candidates = match included {
        Some(Selection::Items(names)) => names.clone(),
        _ => list_entries(dir)?
            .into_iter()
            .filter(|path| path.is_dir())
            .filter_map(|path| file_name(&path))
            .collect(),
    };

    for name in candidates {
        let component_dir = dir.join(&name);
        if !component_dir.is_dir() {
            tracing::warn!(component = %name, dir = %dir.display(), "component directory not found");
            continue;
        }
        if excluded.is_some_and(|s| s.contains(&name)) {
            continue;
        }

        let template = component_dir.join(COMPONENT_TEMPLATE);
        units.push(Unit::Component {
            script: component_dir.join(COMPONENT_SCRIPT),
            template: template.is_file().then_some(template),
            name,
        });
    }
    Ok(())
}

fn resolve_scripts(
    category: &Category,
    dir: &Path,
    included: Option<&Selection>,
    excluded: Option<&Selection>,
    units: &mut Vec<Unit>,
) -> Result<()> {
    let candidates: Vec<PathBuf> = match included {
        Some(Selection::Items(names)) => names
            .iter()
            .map(|name| dir.join(format!("{name}.{SCRIPT_EXTENSION}")))
            .collect(),
        _ => list_entries(dir)?
            .into_iter()
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION) && path.is_file()
            })
            .collect(),
    };

    for path in candidates {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if excluded.is_some_and(|s| s.contains(&stem)) {
            continue;
        }
        units.push(Unit::Script {
            category: category.name().to_string(),
            path,
        });
    }
    Ok(())
}

/// Immediate children of `dir`, sorted by file name.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry
                .map(walkdir::DirEntry::into_path)
                .map_err(|e| Error::io(dir, e.into()))
        })
        .collect()
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
