//! Template pre-processing applied before minification.

use crate::error::{Error, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Custom text transform: `(template text, template path) -> text`.
pub type TransformFn = dyn Fn(&str, &Path) -> String + Send + Sync;

/// How template text is processed before minification.
#[derive(Clone, Default)]
pub enum Processing {
    /// Templates are used as written.
    #[default]
    None,
    /// A caller-supplied transform.
    Custom(Arc<TransformFn>),
    /// `${key}` substitution against a context.
    Context(Map<String, Value>),
}

impl Processing {
    pub fn custom<F>(transform: F) -> Self
    where
        F: Fn(&str, &Path) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(transform))
    }

    /// Substitution with an empty context.
    pub fn substitute() -> Self {
        Self::Context(Map::new())
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Apply the processing step to `text` read from `path`.
    pub fn apply(&self, text: String, path: &Path) -> Result<String> {
        match self {
            Self::None => Ok(text),
            Self::Custom(transform) => Ok(transform(&text, path)),
            Self::Context(context) => {
                substitute(&text, context).map_err(|source| Error::Process {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl fmt::Debug for Processing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Context(context) => f.debug_tuple("Context").field(context).finish(),
        }
    }
}

/// Render `text` with `${ expr }` expressions, `<% stmt %>` blocks and
/// `<# comment #>` comments, leaving Vue's `{{ }}` untouched.
fn substitute(text: &str, context: &Map<String, Value>) -> std::result::Result<String, minijinja::Error> {
    let syntax = SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("${", "}")
        .comment_delimiters("<#", "#>")
        .build()?;

    let mut env = Environment::new();
    env.set_syntax(syntax);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.render_str(text, context)
}
