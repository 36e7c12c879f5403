//! Concatenation of resolved units and output writing.

use crate::error::{Error, Result};
use crate::options::LINEFEED;
use crate::render::TemplateRenderer;
use crate::resolver::Unit;
use std::fs;
use std::path::Path;

/// Token in a component script replaced by its rendered template.
pub const PLACEHOLDER: &str = "_TEMPLATE";

/// Concatenated output of a set of units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The output document
    pub text: String,
    /// Units that contributed text
    pub included: usize,
    /// Units dropped because their text was empty
    pub skipped_empty: usize,
}

/// Produce the text of every unit in order, drop empty ones and join the
/// rest with `separator` (line endings normalized to [`LINEFEED`]).
pub fn assemble(units: &[Unit], renderer: &TemplateRenderer<'_>, separator: &str) -> Result<Assembly> {
    let mut parts = Vec::with_capacity(units.len());
    let mut skipped_empty = 0;

    for unit in units {
        let text = unit_text(unit, renderer)?;
        if text.is_empty() {
            tracing::debug!(script = %unit.script_path().display(), "skipping empty unit");
            skipped_empty += 1;
            continue;
        }
        parts.push(text);
    }

    Ok(Assembly {
        included: parts.len(),
        text: parts.join(&normalize_line_endings(separator)),
        skipped_empty,
    })
}

/// Text one unit contributes.
pub fn unit_text(unit: &Unit, renderer: &TemplateRenderer<'_>) -> Result<String> {
    let script = read_source(unit.script_path())?;
    match unit.template_path() {
        Some(template) => {
            let literal = renderer.render(template)?;
            Ok(replace_placeholder(&script, &literal))
        }
        None => Ok(script),
    }
}

/// Replace the first [`PLACEHOLDER`] in `script` with `literal`.
pub fn replace_placeholder(script: &str, literal: &str) -> String {
    script.replacen(PLACEHOLDER, literal, 1)
}

/// Convert `\r\n` and `\n` to the platform line feed.
pub fn normalize_line_endings(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    if LINEFEED == "\n" {
        unix
    } else {
        unix.replace('\n', LINEFEED)
    }
}

/// Write `text` to `dest`, creating parent directories and replacing any
/// existing file. Returns the number of bytes written.
pub fn write_output(dest: &Path, text: &str) -> Result<u64> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(dest, text).map_err(|e| Error::io(dest, e))?;
    Ok(text.len() as u64)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::MissingSource(path.to_path_buf()),
        _ => Error::io(path, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BuildOptions;
    use crate::render::HtmlMinifyOptions;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_placeholder_first_occurrence_only() {
        assert_eq!(
            replace_placeholder("a(_TEMPLATE); b(_TEMPLATE)", "'x'"),
            "a('x'); b(_TEMPLATE)"
        );
    }

    #[test]
    fn test_placeholder_literal_replacement() {
        assert_eq!(replace_placeholder("f(_TEMPLATE)", "'$&$1'"), "f('$&$1')");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("\r\n;\n"), format!("{LINEFEED};{LINEFEED}"));
    }

    #[test]
    fn test_component_without_template_untouched() {
        let temp = TempDir::new().unwrap();
        let script = write(temp.path(), "c/a/index.js", "Vue.component('a', _TEMPLATE)");
        let unit = Unit::Component {
            name: "a".to_string(),
            script,
            template: None,
        };
        let options = BuildOptions::new(temp.path(), "out.js");
        let renderer = TemplateRenderer::new(&options);
        assert_eq!(
            unit_text(&unit, &renderer).unwrap(),
            "Vue.component('a', _TEMPLATE)"
        );
    }

    #[test]
    fn test_assemble_skips_empty_units() {
        let temp = TempDir::new().unwrap();
        let units = vec![
            Unit::Script {
                category: "filters".to_string(),
                path: write(temp.path(), "filters/a.js", "a();"),
            },
            Unit::Script {
                category: "filters".to_string(),
                path: write(temp.path(), "filters/empty.js", ""),
            },
            Unit::Script {
                category: "filters".to_string(),
                path: write(temp.path(), "filters/b.js", "b();"),
            },
        ];
        let options = BuildOptions::new(temp.path(), "out.js");
        let renderer = TemplateRenderer::new(&options);

        let assembly = assemble(&units, &renderer, "\n;\n").unwrap();
        assert_eq!(assembly.text, format!("a();{LINEFEED};{LINEFEED}b();"));
        assert_eq!(assembly.included, 2);
        assert_eq!(assembly.skipped_empty, 1);
    }

    #[test]
    fn test_missing_script_is_error() {
        let temp = TempDir::new().unwrap();
        let unit = Unit::Script {
            category: "filters".to_string(),
            path: temp.path().join("filters/ghost.js"),
        };
        let options = BuildOptions::new(temp.path(), "out.js");
        let renderer = TemplateRenderer::new(&options);
        let err = assemble(&[unit], &renderer, "\n").unwrap_err();
        assert!(matches!(err, Error::MissingSource(p) if p.ends_with("filters/ghost.js")));
    }

    #[test]
    fn test_component_template_inlined() {
        let temp = TempDir::new().unwrap();
        let unit = Unit::Component {
            name: "card".to_string(),
            script: write(temp.path(), "components/card/index.js", "x = _TEMPLATE;"),
            template: Some(write(
                temp.path(),
                "components/card/template.html",
                "<div>\n  <h2>{{ title }}</h2>\n</div>\n",
            )),
        };
        let options = BuildOptions::new(temp.path(), "out.js")
            .with_htmlmin(HtmlMinifyOptions::disabled());
        let renderer = TemplateRenderer::new(&options);
        assert_eq!(
            unit_text(&unit, &renderer).unwrap(),
            "x = '<div>\\n' +\n    '  <h2>{{ title }}</h2>\\n' +\n    '</div>\\n' +\n    '';"
        );
    }

    #[test]
    fn test_write_output_creates_parents_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("dist/js/app.js");
        assert_eq!(write_output(&dest, "first").unwrap(), 5);
        assert_eq!(write_output(&dest, "second!").unwrap(), 7);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "second!");
    }
}
