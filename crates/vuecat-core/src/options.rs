//! Immutable build configuration for one target.

use crate::category::{default_categories, Category};
use crate::error::{Error, Result};
use crate::filter::CategoryFilter;
use crate::render::{HtmlMinifyOptions, Processing};
use std::path::{Path, PathBuf};

/// Platform line feed.
#[cfg(windows)]
pub const LINEFEED: &str = "\r\n";
/// Platform line feed.
#[cfg(not(windows))]
pub const LINEFEED: &str = "\n";

/// Default quote character for template literals.
pub const DEFAULT_QUOTE_CHAR: char = '\'';

/// Default indentation unit for wrapped template lines.
pub const DEFAULT_INDENT: &str = "  ";

/// Everything one build needs, validated up front.
///
/// # Example
///
/// ```rust
/// use vuecat_core::{BuildOptions, CategoryFilter, Selection};
///
/// let options = BuildOptions::new("src/vue", "dist/app.js")
///     .with_quote_char('"')
///     .with_exclude(CategoryFilter::new().with("filters", Selection::All));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    src: PathBuf,
    dest: PathBuf,
    categories: Vec<Category>,
    quote_char: char,
    indent_string: String,
    htmlmin: HtmlMinifyOptions,
    processing: Processing,
    separator: String,
    include_only: Option<CategoryFilter>,
    exclude: Option<CategoryFilter>,
}

impl BuildOptions {
    /// Options with every default applied.
    pub fn new(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            categories: default_categories(),
            quote_char: DEFAULT_QUOTE_CHAR,
            indent_string: DEFAULT_INDENT.to_string(),
            htmlmin: HtmlMinifyOptions::recommended(),
            processing: Processing::None,
            separator: LINEFEED.to_string(),
            include_only: None,
            exclude: None,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    pub fn with_indent_string(mut self, indent: impl Into<String>) -> Self {
        self.indent_string = indent.into();
        self
    }

    pub fn with_htmlmin(mut self, htmlmin: HtmlMinifyOptions) -> Self {
        self.htmlmin = htmlmin;
        self
    }

    pub fn with_processing(mut self, processing: Processing) -> Self {
        self.processing = processing;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_include_only(mut self, filter: CategoryFilter) -> Self {
        self.include_only = Some(filter);
        self
    }

    pub fn with_exclude(mut self, filter: CategoryFilter) -> Self {
        self.exclude = Some(filter);
        self
    }

    /// Resolve relative `src` and `dest` against `cwd`.
    pub fn relative_to(mut self, cwd: &Path) -> Self {
        if self.src.is_relative() {
            self.src = cwd.join(&self.src);
        }
        if self.dest.is_relative() {
            self.dest = cwd.join(&self.dest);
        }
        self
    }

    /// Check option values. Does not touch the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.src.as_os_str().is_empty() {
            return Err(invalid("src", "Source directory is not specified"));
        }
        if self.dest.as_os_str().is_empty() {
            return Err(invalid("dest", "Destination script path is not specified"));
        }
        if matches!(self.quote_char, '\\' | '\n' | '\r') {
            return Err(invalid(
                "quoteChar",
                format!("{:?} cannot delimit a string literal", self.quote_char),
            ));
        }
        if self.indent_string.contains(['\n', '\r']) {
            return Err(invalid("indentString", "must not contain line breaks"));
        }
        if self.categories.is_empty() {
            return Err(invalid("categories", "at least one category is required"));
        }
        Ok(())
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    pub fn indent_string(&self) -> &str {
        &self.indent_string
    }

    pub fn htmlmin(&self) -> &HtmlMinifyOptions {
        &self.htmlmin
    }

    pub fn processing(&self) -> &Processing {
        &self.processing
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn include_only(&self) -> Option<&CategoryFilter> {
        self.include_only.as_ref()
    }

    pub fn exclude(&self) -> Option<&CategoryFilter> {
        self.exclude.as_ref()
    }
}

fn invalid(option: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidOption {
        option,
        reason: reason.into(),
    }
}
