//! Conversions between CLI arguments, config types and core build options.

use crate::cli::TargetArgs;
use crate::config::{ProcessSetting, TargetConfig, TargetOptions};
use serde_json::{Map, Value};
use std::path::PathBuf;
use vuecat_core::{BuildOptions, Category, CategoryFilter, HtmlMinifyOptions, Processing};

impl From<&TargetArgs> for TargetConfig {
    fn from(args: &TargetArgs) -> Self {
        // `--process` maps to an empty context rather than `true`, so that it
        // merges into a context from the config file instead of replacing it.
        let process = if !args.define.is_empty() || args.process {
            let context: Map<String, Value> = args
                .define
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            Some(ProcessSetting::Context(context))
        } else {
            None
        };

        Self {
            src: args.src.clone(),
            dest: args.dest.clone(),
            options: TargetOptions {
                quote_char: args.quote_char,
                indent_string: args.indent_string.clone(),
                htmlmin: args.no_htmlmin.then(HtmlMinifyOptions::disabled),
                process,
                separator: args.separator.clone(),
                include_only: filter_from_args(&args.include_only),
                exclude: filter_from_args(&args.exclude),
                categories: (!args.categories.is_empty()).then(|| args.categories.clone()),
            },
        }
    }
}

fn filter_from_args(entries: &[(String, vuecat_core::Selection)]) -> Option<CategoryFilter> {
    (!entries.is_empty()).then(|| entries.iter().cloned().collect())
}

impl From<ProcessSetting> for Processing {
    fn from(setting: ProcessSetting) -> Self {
        match setting {
            ProcessSetting::Enabled(false) => Processing::None,
            ProcessSetting::Enabled(true) => Processing::substitute(),
            ProcessSetting::Context(context) => Processing::Context(context),
        }
    }
}

impl TargetOptions {
    /// Build core options, applying built-in defaults for unset fields.
    pub fn into_build_options(self, src: PathBuf, dest: PathBuf) -> BuildOptions {
        let mut options = BuildOptions::new(src, dest);
        if let Some(quote_char) = self.quote_char {
            options = options.with_quote_char(quote_char);
        }
        if let Some(indent) = self.indent_string {
            options = options.with_indent_string(indent);
        }
        if let Some(htmlmin) = self.htmlmin {
            options = options.with_htmlmin(htmlmin);
        }
        if let Some(process) = self.process {
            options = options.with_processing(process.into());
        }
        if let Some(separator) = self.separator {
            options = options.with_separator(separator);
        }
        if let Some(filter) = self.include_only {
            options = options.with_include_only(filter);
        }
        if let Some(filter) = self.exclude {
            options = options.with_exclude(filter);
        }
        if let Some(categories) = self.categories {
            options = options.with_categories(categories.into_iter().map(Category::named).collect());
        }
        options
    }
}
