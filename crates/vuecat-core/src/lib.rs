//! # vuecat-core
//!
//! Build-time aggregation of a convention-organized Vue source tree into a
//! single script.
//!
//! ```text
//! src/
//!   components/<name>/index.js      ─┐
//!   components/<name>/template.html  ├─ resolve → render template → inline at _TEMPLATE
//!   directives/*.js  filters/*.js    │
//!   mixins/*.js  partials/*.js  ...  ┘
//!                                        → join with separator → dest
//! ```
//!
//! The pipeline is synchronous and deterministic: the same tree and the same
//! [`BuildOptions`] always produce byte-identical output.
//!
//! # Example
//!
//! ```rust,no_run
//! use vuecat_core::{build, BuildOptions};
//!
//! # fn main() -> vuecat_core::Result<()> {
//! let report = build(&BuildOptions::new("src/vue", "dist/app.js"))?;
//! println!("wrote {} bytes from {} units", report.bytes, report.units);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod category;
mod error;
pub mod filter;
pub mod options;
pub mod render;
pub mod resolver;

use std::path::PathBuf;

pub use assemble::{assemble, write_output, Assembly, PLACEHOLDER};
pub use category::{default_categories, Category, CategoryKind};
pub use error::{Error, Result};
pub use filter::{CategoryFilter, Selection};
pub use options::{BuildOptions, LINEFEED};
pub use render::{HtmlMinifyOptions, Processing, TemplateRenderer};
pub use resolver::{resolve, Unit};

/// Outcome of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Path written
    pub dest: PathBuf,
    /// Output size in bytes
    pub bytes: u64,
    /// Units that contributed text
    pub units: usize,
    /// Units dropped because they were empty
    pub skipped_empty: usize,
}

/// Resolve the units `options` selects.
pub fn resolve_units(options: &BuildOptions) -> Result<Vec<Unit>> {
    options.validate()?;
    resolve(
        options.src(),
        options.categories(),
        options.include_only(),
        options.exclude(),
    )
}

/// Run the pipeline up to, but not including, the write step.
pub fn render_output(options: &BuildOptions) -> Result<Assembly> {
    let units = resolve_units(options)?;
    tracing::debug!(src = %options.src().display(), units = units.len(), "resolved units");

    let renderer = TemplateRenderer::new(options);
    assemble(&units, &renderer, options.separator())
}

/// Run the whole pipeline and write the output file.
pub fn build(options: &BuildOptions) -> Result<BuildReport> {
    let assembly = render_output(options)?;
    let bytes = write_output(options.dest(), &assembly.text)?;

    Ok(BuildReport {
        dest: options.dest().to_path_buf(),
        bytes,
        units: assembly.included,
        skipped_empty: assembly.skipped_empty,
    })
}
