//! String-literal escaping for inlined templates.

/// Escape `content` for embedding between two `quote_char`s.
///
/// Backslashes are escaped first, then the quote character. Every line break
/// (`\n` or `\r\n`) closes the literal with a `\n` escape, continues with `+`
/// on the next source line indented by two `indent_string`s, and reopens the
/// literal:
///
/// ```
/// use vuecat_core::render::escape_content;
///
/// assert_eq!(
///     escape_content("<p>\n  it's</p>", '\'', "  "),
///     "<p>\\n' +\n    '  it\\'s</p>"
/// );
/// ```
pub fn escape_content(content: &str, quote_char: char, indent_string: &str) -> String {
    let mut line_break = String::with_capacity(5 + 2 * indent_string.len());
    line_break.push_str("\\n");
    line_break.push(quote_char);
    line_break.push_str(" +\n");
    line_break.push_str(indent_string);
    line_break.push_str(indent_string);
    line_break.push(quote_char);

    let mut out = String::with_capacity(content.len() + content.len() / 8);
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str(&line_break);
            }
            '\n' => out.push_str(&line_break),
            c if c == quote_char => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape `content` and wrap it in `quote_char`.
pub fn quote_literal(content: &str, quote_char: char, indent_string: &str) -> String {
    let escaped = escape_content(content, quote_char, indent_string);
    let mut literal = String::with_capacity(escaped.len() + 2);
    literal.push(quote_char);
    literal.push_str(&escaped);
    literal.push(quote_char);
    literal
}
