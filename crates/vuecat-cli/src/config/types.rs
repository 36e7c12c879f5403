use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use vuecat_core::{CategoryFilter, HtmlMinifyOptions};

/// Options shared by the top level and every target.
///
/// Every field is optional: unset fields fall through to the next layer
/// (target -> top level -> built-in default). Lowercase aliases accept the
/// keys produced by `VUECAT_` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetOptions {
    /// Quote character for template literals (default `'`)
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "quotechar")]
    pub quote_char: Option<char>,

    /// Indentation unit for wrapped template lines (default two spaces)
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "indentstring")]
    pub indent_string: Option<String>,

    /// HTML minifier toggles; `{}` disables minification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub htmlmin: Option<HtmlMinifyOptions>,

    /// `false`, `true` (empty context) or a substitution context object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessSetting>,

    /// Text placed between units (default: platform line feed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Category -> `"all"` or item names to keep
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "includeonly")]
    pub include_only: Option<CategoryFilter>,

    /// Category -> `"all"` or item names to drop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<CategoryFilter>,

    /// Category directories in concatenation order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl TargetOptions {
    pub(crate) fn is_unset(&self) -> bool {
        *self == TargetOptions::default()
    }

    /// Fill unset fields from `base`. Shallow: a set `htmlmin` or filter
    /// object replaces the base one whole.
    pub fn merged_over(self, base: &TargetOptions) -> TargetOptions {
        TargetOptions {
            quote_char: self.quote_char.or(base.quote_char),
            indent_string: self.indent_string.or_else(|| base.indent_string.clone()),
            htmlmin: self.htmlmin.or(base.htmlmin),
            process: self.process.or_else(|| base.process.clone()),
            separator: self.separator.or_else(|| base.separator.clone()),
            include_only: self.include_only.or_else(|| base.include_only.clone()),
            exclude: self.exclude.or_else(|| base.exclude.clone()),
            categories: self.categories.or_else(|| base.categories.clone()),
        }
    }
}

/// The `process` option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ProcessSetting {
    /// `true` substitutes against an empty context, `false` disables processing
    Enabled(bool),
    /// Substitution context
    Context(Map<String, Value>),
}

/// One named build target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetConfig {
    /// Source root containing the category directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<PathBuf>,

    /// Output script path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,

    /// Target options, merged over the top-level `options`
    #[serde(default, skip_serializing_if = "TargetOptions::is_unset")]
    pub options: TargetOptions,
}
