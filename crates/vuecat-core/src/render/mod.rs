//! Template rendering: process, minify, escape and quote a component template.
//!
//! ```text
//! template.html → Processing → minify_html (if any toggle set) → escape → 'literal'
//! ```

mod escape;
mod minify;
mod process;

use crate::error::{Error, Result};
use crate::options::BuildOptions;
use std::path::Path;

pub use escape::{escape_content, quote_literal};
pub use minify::{minify_html, HtmlMinifyOptions, MinifyError};
pub use process::{Processing, TransformFn};

/// Renders template files into quoted string literals.
#[derive(Debug, Clone)]
pub struct TemplateRenderer<'a> {
    quote_char: char,
    indent_string: &'a str,
    htmlmin: &'a HtmlMinifyOptions,
    processing: &'a Processing,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self {
            quote_char: options.quote_char(),
            indent_string: options.indent_string(),
            htmlmin: options.htmlmin(),
            processing: options.processing(),
        }
    }

    /// Read `path` and render it as a string literal.
    pub fn render(&self, path: &Path) -> Result<String> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.render_str(raw, path)
    }

    /// Render template text already read from `path`.
    pub fn render_str(&self, text: String, path: &Path) -> Result<String> {
        let mut content = self.processing.apply(text, path)?;

        if self.htmlmin.is_enabled() {
            content = minify_html(&content, self.htmlmin).map_err(|e| Error::Minify {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        tracing::debug!(template = %path.display(), bytes = content.len(), "rendered template");
        Ok(quote_literal(&content, self.quote_char, self.indent_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options() -> BuildOptions {
        BuildOptions::new("src", "out.js")
    }

    #[test]
    fn test_render_minified() {
        let options = options();
        let renderer = TemplateRenderer::new(&options);
        let out = renderer
            .render_str("<div>\n  <p>it's</p>\n</div>\n".to_string(), Path::new("t.html"))
            .unwrap();
        assert_eq!(out, r"'<div><p>it\'s</p></div>'");
    }

    #[test]
    fn test_render_unminified_keeps_lines() {
        let options = options()
            .with_htmlmin(HtmlMinifyOptions::disabled())
            .with_quote_char('"');
        let renderer = TemplateRenderer::new(&options);
        let out = renderer
            .render_str("<p>\n  \"hi\"\n</p>".to_string(), Path::new("t.html"))
            .unwrap();
        assert_eq!(out, "\"<p>\\n\" +\n    \"  \\\"hi\\\"\\n\" +\n    \"</p>\"");
    }

    #[test]
    fn test_process_then_minify() {
        let mut context = serde_json::Map::new();
        context.insert("name".to_string(), "World".into());
        let options = options().with_processing(Processing::Context(context));
        let renderer = TemplateRenderer::new(&options);
        let out = renderer
            .render_str("<p>\n  Hello ${ name }\n</p>\n".to_string(), Path::new("t.html"))
            .unwrap();
        assert_eq!(out, "'<p>Hello World</p>'");
    }

    #[test]
    fn test_minify_failure_names_template() {
        let options = options();
        let renderer = TemplateRenderer::new(&options);
        let err = renderer
            .render_str("<div".to_string(), Path::new("components/x/template.html"))
            .unwrap_err();
        match err {
            Error::Minify { path, message } => {
                assert_eq!(path, Path::new("components/x/template.html"));
                assert!(message.contains("<div"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_false_htmlmin_skips_parsing() {
        let htmlmin: HtmlMinifyOptions =
            serde_json::from_str(r#"{"collapseWhitespace": false}"#).unwrap();
        let options = options().with_htmlmin(htmlmin);
        let renderer = TemplateRenderer::new(&options);
        let out = renderer
            .render_str("<div".to_string(), Path::new("t.html"))
            .unwrap();
        assert_eq!(out, "'<div'");
    }

    #[test]
    fn test_render_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.html");
        fs::write(&path, "<p>Hi</p>\n").unwrap();

        let options = options();
        let renderer = TemplateRenderer::new(&options);
        assert_eq!(renderer.render(&path).unwrap(), "'<p>Hi</p>'");
    }
}
