//! Option-driven HTML minifier for component templates.
//!
//! The input is split into a flat token stream (text, comments, markup
//! declarations, start/end tags and raw `<script>`/`<style>` bodies), then
//! re-serialized with the enabled toggles applied. Tags are always
//! re-serialized, which normalizes whitespace between attributes. Malformed
//! markup (an unterminated tag, comment, attribute value or raw-text element)
//! is rejected with a [`MinifyError`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minification toggles. Every toggle defaults to `false`, so an empty JSON
/// object disables minification altogether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HtmlMinifyOptions {
    /// `disabled="disabled"` -> `disabled`
    pub collapse_boolean_attributes: bool,
    /// Collapse whitespace runs in text, trimming around block-level tags
    pub collapse_whitespace: bool,
    /// Drop quotes around attribute values when safe
    pub remove_attribute_quotes: bool,
    /// Drop `<!-- -->` comments (conditional and `<!--!` comments are kept)
    pub remove_comments: bool,
    /// Drop empty `class`, `id`, `style`, `title`, `lang`, `dir` and `on*` attributes
    pub remove_empty_attributes: bool,
    /// Drop attributes whose value equals the HTML default
    pub remove_redundant_attributes: bool,
    /// Drop JavaScript `type` attributes from `<script>`
    pub remove_script_type_attributes: bool,
    /// Drop `type="text/css"` from `<style>` and `<link>`
    pub remove_style_link_type_attributes: bool,
}

impl HtmlMinifyOptions {
    /// The toggles used when a target does not configure `htmlmin`.
    pub fn recommended() -> Self {
        Self {
            collapse_boolean_attributes: true,
            collapse_whitespace: true,
            remove_attribute_quotes: false,
            remove_comments: true,
            remove_empty_attributes: true,
            remove_redundant_attributes: false,
            remove_script_type_attributes: true,
            remove_style_link_type_attributes: true,
        }
    }

    /// No toggles set; templates are inlined as written.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether any toggle is set.
    ///
    /// Key presence is not tracked: `{"collapseWhitespace": false}` counts
    /// as `{}`, so the template is inlined as written and is never parsed.
    /// A malformed template therefore only fails when a toggle is `true`.
    pub fn is_enabled(&self) -> bool {
        *self != Self::disabled()
    }
}

/// The minifier could not parse the template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse Error: {0}")]
pub struct MinifyError(String);

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

const WHITESPACE_PRESERVING_ELEMENTS: &[&str] = &["pre", "textarea"];

const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdi", "bdo", "big", "button", "cite", "code", "del", "dfn",
    "em", "font", "i", "img", "input", "ins", "kbd", "label", "mark", "math", "nobr", "object",
    "q", "rp", "rt", "rtc", "ruby", "s", "samp", "select", "small", "span", "strike", "strong",
    "sub", "sup", "svg", "textarea", "time", "tt", "u", "var", "wbr",
];

const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen", "async", "autofocus", "autoplay", "checked", "compact", "controls",
    "declare", "default", "defaultchecked", "defaultmuted", "defaultselected", "defer",
    "disabled", "enabled", "formnovalidate", "hidden", "indeterminate", "inert", "ismap",
    "itemscope", "loop", "multiple", "muted", "nohref", "noresize", "noshade", "novalidate",
    "nowrap", "open", "pauseonexit", "readonly", "required", "reversed", "scoped", "seamless",
    "selected", "sortable", "truespeed", "typemustmatch", "visible",
];

const EMPTY_REMOVABLE_ATTRIBUTES: &[&str] = &["class", "id", "style", "title", "lang", "dir"];

const SCRIPT_MIME_TYPES: &[&str] = &[
    "",
    "text/javascript",
    "text/ecmascript",
    "text/jscript",
    "application/javascript",
    "application/x-javascript",
    "application/ecmascript",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attr<'a> {
    name: &'a str,
    value: Option<&'a str>,
    quote: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StartTag<'a> {
    name: &'a str,
    attrs: Vec<Attr<'a>>,
    self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Comment(&'a str),
    Markup(&'a str),
    Start(StartTag<'a>),
    End(&'a str),
    Raw(&'a str),
}

/// Minify `input` with the given toggles.
pub fn minify_html(input: &str, options: &HtmlMinifyOptions) -> Result<String, MinifyError> {
    let tokens: Vec<Token<'_>> = tokenize(input)?
        .into_iter()
        .filter(|t| !(options.remove_comments && is_removable_comment(t)))
        .collect();

    let mut out = String::with_capacity(input.len());
    let mut preserve_depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Text(text) if options.collapse_whitespace && preserve_depth == 0 => {
                let prev = i.checked_sub(1).and_then(|p| tokens.get(p));
                let next = tokens.get(i + 1);
                let mut collapsed = collapse_whitespace(text);
                if prev.map_or(true, is_block_boundary) || out.ends_with(' ') {
                    collapsed = collapsed.trim_start_matches(' ').to_string();
                }
                if next.map_or(true, is_block_boundary) {
                    collapsed.truncate(collapsed.trim_end_matches(' ').len());
                }
                out.push_str(&collapsed);
            }
            Token::Text(text) | Token::Comment(text) | Token::Markup(text) | Token::Raw(text) => {
                out.push_str(text)
            }
            Token::Start(tag) => {
                if !tag.self_closing && is_one_of(tag.name, WHITESPACE_PRESERVING_ELEMENTS) {
                    preserve_depth += 1;
                }
                write_start_tag(&mut out, tag, options);
            }
            Token::End(name) => {
                if is_one_of(name, WHITESPACE_PRESERVING_ELEMENTS) {
                    preserve_depth = preserve_depth.saturating_sub(1);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }

    Ok(out)
}

fn tokenize(input: &str) -> Result<Vec<Token<'_>>, MinifyError> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(offset) = input[pos..].find('<') {
        let lt = pos + offset;
        let rest = &input[lt..];

        let (token, end) = if rest.starts_with("<!--") {
            let close = rest[4..]
                .find("-->")
                .ok_or_else(|| parse_error(rest))?;
            let end = lt + 4 + close + 3;
            (Token::Comment(&input[lt..end]), end)
        } else if rest.starts_with("<![CDATA[") {
            let close = rest.find("]]>").ok_or_else(|| parse_error(rest))?;
            let end = lt + close + 3;
            (Token::Markup(&input[lt..end]), end)
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            let close = rest.find('>').ok_or_else(|| parse_error(rest))?;
            let end = lt + close + 1;
            (Token::Markup(&input[lt..end]), end)
        } else if rest.starts_with("</") && rest[2..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            let close = rest.find('>').ok_or_else(|| parse_error(rest))?;
            let name = rest[2..close].trim_end();
            (Token::End(name), lt + close + 1)
        } else if let Some((tag, len)) = parse_start_tag(rest)? {
            (Token::Start(tag), lt + len)
        } else {
            // A bare `<` is text, as in `1 < 2` or `{{ a<b }}`.
            pos = lt + 1;
            continue;
        };

        if text_start < lt {
            tokens.push(Token::Text(&input[text_start..lt]));
        }

        let raw_name = match &token {
            Token::Start(tag) if !tag.self_closing && is_one_of(tag.name, RAW_TEXT_ELEMENTS) => {
                Some(tag.name)
            }
            _ => None,
        };
        tokens.push(token);
        pos = end;

        if let Some(name) = raw_name {
            let close = find_closing_tag(&input[pos..], name)
                .ok_or_else(|| parse_error(&input[lt..]))?;
            if close > 0 {
                tokens.push(Token::Raw(&input[pos..pos + close]));
            }
            pos += close;
        }
        text_start = pos;
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    Ok(tokens)
}

/// Parse a start tag at the beginning of `src`, returning the tag and the
/// number of bytes it spans. `Ok(None)` means the `<` does not open a tag:
/// no letter follows it, or a name would contain a character that names
/// cannot hold (`"`, `'`, `<`, `=`).
fn parse_start_tag(src: &str) -> Result<Option<(StartTag<'_>, usize)>, MinifyError> {
    if !src[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Ok(None);
    }

    let bytes = src.as_bytes();
    let mut i = 1;
    while i < bytes.len() && !is_tag_delimiter(bytes[i]) {
        i += 1;
    }
    let name = &src[1..i];
    if !is_valid_name(name) {
        return Ok(None);
    }
    let mut attrs = Vec::new();

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return Err(parse_error(src)),
            Some(b'>') => {
                return Ok(Some((
                    StartTag {
                        name,
                        attrs,
                        self_closing: false,
                    },
                    i + 1,
                )))
            }
            Some(b'/') if bytes.get(i + 1) == Some(&b'>') => {
                return Ok(Some((
                    StartTag {
                        name,
                        attrs,
                        self_closing: true,
                    },
                    i + 2,
                )))
            }
            Some(b'/') => {
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let name_start = i;
        while i < bytes.len() && !is_tag_delimiter(bytes[i]) && bytes[i] != b'=' {
            i += 1;
        }
        if i == name_start {
            // A stray `=` with no attribute name.
            i += 1;
            continue;
        }
        let attr_name = &src[name_start..i];
        if !is_valid_name(attr_name) {
            return Ok(None);
        }

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if bytes.get(j) != Some(&b'=') {
            attrs.push(Attr {
                name: attr_name,
                value: None,
                quote: None,
            });
            continue;
        }
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }

        match bytes.get(j) {
            None => return Err(parse_error(src)),
            Some(&q) if q == b'"' || q == b'\'' => {
                let close = src[j + 1..]
                    .find(q as char)
                    .ok_or_else(|| parse_error(src))?;
                attrs.push(Attr {
                    name: attr_name,
                    value: Some(&src[j + 1..j + 1 + close]),
                    quote: Some(q as char),
                });
                i = j + 1 + close + 1;
            }
            Some(_) => {
                let value_start = j;
                while j < bytes.len() && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                    j += 1;
                }
                if src[value_start..j].contains(['"', '\'', '<', '=', '`']) {
                    return Ok(None);
                }
                attrs.push(Attr {
                    name: attr_name,
                    value: Some(&src[value_start..j]),
                    quote: None,
                });
                i = j;
            }
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.contains(['"', '\'', '<', '='])
}

fn is_tag_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

/// Byte offset of `</name` (ASCII case-insensitive) within `haystack`.
fn find_closing_tag(haystack: &str, name: &str) -> Option<usize> {
    let needle = format!("</{}", name.to_ascii_lowercase());
    haystack
        .to_ascii_lowercase()
        .match_indices(&needle)
        .map(|(idx, _)| idx)
        .find(|&idx| {
            haystack[idx + needle.len()..]
                .bytes()
                .next()
                .map_or(true, |b| b == b'>' || b.is_ascii_whitespace())
        })
}

fn parse_error(at: &str) -> MinifyError {
    let snippet: String = at.chars().take_while(|c| *c != '\n').take(40).collect();
    MinifyError(snippet)
}

fn is_one_of(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(name))
}

fn is_removable_comment(token: &Token<'_>) -> bool {
    match token {
        Token::Comment(c) => !c.starts_with("<!--[if") && !c.starts_with("<!--!"),
        _ => false,
    }
}

/// Whether whitespace next to `token` may be dropped entirely.
fn is_block_boundary(token: &Token<'_>) -> bool {
    match token {
        Token::Start(tag) => !is_one_of(tag.name, INLINE_ELEMENTS),
        Token::End(name) => !is_one_of(name, INLINE_ELEMENTS),
        Token::Markup(_) | Token::Raw(_) => true,
        Token::Text(_) | Token::Comment(_) => false,
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn write_start_tag(out: &mut String, tag: &StartTag<'_>, options: &HtmlMinifyOptions) {
    out.push('<');
    out.push_str(tag.name);

    for attr in &tag.attrs {
        if should_drop_attribute(tag, attr, options) {
            continue;
        }
        out.push(' ');
        out.push_str(attr.name);

        let value = match attr.value {
            Some(_) if options.collapse_boolean_attributes && is_one_of(attr.name, BOOLEAN_ATTRIBUTES) => {
                continue
            }
            Some(value) => value,
            None => continue,
        };

        out.push('=');
        if options.remove_attribute_quotes && can_remove_quotes(value) {
            out.push_str(value);
        } else {
            let quote = attr
                .quote
                .unwrap_or(if value.contains('"') { '\'' } else { '"' });
            out.push(quote);
            out.push_str(value);
            out.push(quote);
        }
    }

    if tag.self_closing {
        out.push('/');
    }
    out.push('>');
}

fn should_drop_attribute(tag: &StartTag<'_>, attr: &Attr<'_>, options: &HtmlMinifyOptions) -> bool {
    let name = attr.name.to_ascii_lowercase();
    let value = attr.value.map(|v| v.trim().to_ascii_lowercase());

    if options.remove_empty_attributes
        && value.as_deref() == Some("")
        && (is_one_of(&name, EMPTY_REMOVABLE_ATTRIBUTES) || name.starts_with("on"))
    {
        return true;
    }

    let tag_name = tag.name.to_ascii_lowercase();

    if options.remove_script_type_attributes
        && tag_name == "script"
        && name == "type"
        && value.as_deref().map_or(false, |v| SCRIPT_MIME_TYPES.contains(&v))
    {
        return true;
    }

    if options.remove_style_link_type_attributes
        && (tag_name == "style" || tag_name == "link")
        && name == "type"
        && matches!(value.as_deref(), Some("") | Some("text/css"))
    {
        return true;
    }

    options.remove_redundant_attributes && is_redundant(&tag_name, tag, &name, value.as_deref())
}

fn is_redundant(tag_name: &str, tag: &StartTag<'_>, name: &str, value: Option<&str>) -> bool {
    match (tag_name, name, value) {
        ("script", "language", Some("javascript")) => true,
        ("script", "charset", _) => !tag
            .attrs
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case("src")),
        ("form", "method", Some("get")) => true,
        ("input", "type", Some("text")) => true,
        ("area", "shape", Some("rect")) => true,
        ("a", "name", Some(v)) => tag.attrs.iter().any(|a| {
            a.name.eq_ignore_ascii_case("id")
                && a.value.map(|id| id.trim().to_ascii_lowercase()).as_deref() == Some(v)
        }),
        _ => false,
    }
}

fn can_remove_quotes(value: &str) -> bool {
    !value.is_empty()
        && !value.ends_with('/')
        && !value
            .chars()
            .any(|c| matches!(c, ' ' | '\t' | '\n' | '\x0c' | '\r' | '"' | '\'' | '`' | '=' | '<' | '>'))
}
