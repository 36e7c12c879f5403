use std::path::{Path, PathBuf};

/// Error types for vuecat operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source root is missing or is not a directory.
    #[error("Invalid source directory: {}", .0.display())]
    InvalidSource(PathBuf),

    /// An option failed validation at the configuration boundary.
    #[error("Invalid value for '{option}': {reason}")]
    InvalidOption {
        /// Option name as it appears in configuration (camelCase)
        option: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// A script that takes part in the build does not exist.
    #[error("Source file not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// The HTML minifier rejected a template.
    #[error("{}\n{message}", .path.display())]
    Minify {
        /// Template that failed to minify
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Placeholder substitution failed for a template.
    #[error("{}\n{source}", .path.display())]
    Process {
        /// Template that failed to process
        path: PathBuf,
        /// Underlying template engine error
        #[source]
        source: minijinja::Error,
    },

    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error stems from configuration rather than from the
    /// files being built.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidSource(_) | Self::InvalidOption { .. })
    }
}

/// Result type alias for vuecat operations.
pub type Result<T> = std::result::Result<T, Error>;
