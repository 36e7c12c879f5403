//! Shared helpers for command implementations.

use crate::error::{Result, ResultExt};
use std::path::{Path, PathBuf};

/// The working directory: `--cwd` resolved against the process directory,
/// or the process directory itself.
pub(crate) fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    match cwd {
        Some(dir) => {
            let dir = current.join(dir);
            dir.canonicalize().with_path(&dir)
        }
        None => Ok(current),
    }
}

/// `path` relative to `base` for display, or `path` unchanged.
pub(crate) fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
