//! Value parsers for command-line flags.

use vuecat_core::filter::ALL;
use vuecat_core::Selection;

/// Parse a single-character quote.
///
/// # Errors
///
/// Returns an error message unless `s` is exactly one character.
pub fn parse_quote_char(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("Quote must be a single character: '{}'", s)),
    }
}

/// Expand `\n`, `\r`, `\t` and `\\` so separators can be given in a shell.
///
/// Any other backslash sequence is kept as written.
pub fn parse_escapes(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }
    Ok(out)
}

/// Parse a `KEY=VALUE` substitution variable.
pub fn parse_define(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE: '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Variable name cannot be empty: '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse a `CATEGORY=all` or `CATEGORY=a,b` filter entry.
pub fn parse_filter(s: &str) -> Result<(String, Selection), String> {
    let (category, items) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected CATEGORY=all or CATEGORY=a,b: '{}'", s))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(format!("Category name cannot be empty: '{}'", s));
    }

    let items = items.trim();
    let selection = if items == ALL {
        Selection::All
    } else {
        let names: Vec<&str> = items
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(format!("No items given for category '{}'", category));
        }
        Selection::items(names)
    };
    Ok((category.to_string(), selection))
}
