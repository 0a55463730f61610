use std::sync::LazyLock;

use regex::Regex;

use super::{Frontmatter, FrontmatterValue};

/// Line delimiting the header block.
pub const DELIMITER: &str = "---";

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("number pattern is valid"));

/// A document split into its header record and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Splits `document` into frontmatter and body.
///
/// Without a well-formed `---` header the first `# ` heading becomes the
/// `title` and the whole input is returned as body.
pub fn parse(document: &str) -> ParsedDocument {
    match split_header(document) {
        Some((header, body)) => ParsedDocument {
            frontmatter: parse_header(header),
            body: body.to_string(),
        },
        None => ParsedDocument {
            frontmatter: infer_title(document),
            body: document.to_string(),
        },
    }
}

/// Returns `(header, body)` when the document opens with a delimited header.
fn split_header(document: &str) -> Option<(&str, &str)> {
    let mut lines = document.split_inclusive('\n');
    let first = lines.next()?;
    if strip_eol(first) != DELIMITER {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if strip_eol(line) == DELIMITER {
            let header = document[header_start..offset].trim_end_matches(['\r', '\n']);
            let body = &document[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }
    None
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn infer_title(document: &str) -> Frontmatter {
    let mut fm = Frontmatter::new();
    if let Some(title) = document
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        fm.insert("title", title);
    }
    fm
}

fn parse_header(header: &str) -> Frontmatter {
    let mut fm = Frontmatter::new();
    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fm.insert(key, parse_value(value.trim()));
    }
    fm
}

/// Infers a value: array, quoted string, boolean, number, then raw string.
pub fn parse_value(raw: &str) -> FrontmatterValue {
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return FrontmatterValue::List(parse_list(inner));
    }
    if let Some(text) = unquote(raw) {
        return FrontmatterValue::String(text);
    }
    match raw {
        "true" => return FrontmatterValue::Bool(true),
        "false" => return FrontmatterValue::Bool(false),
        _ => {}
    }
    if NUMBER.is_match(raw)
        && let Ok(n) = raw.parse::<f64>()
    {
        return FrontmatterValue::Number(n);
    }
    FrontmatterValue::String(raw.to_string())
}

fn parse_list(inner: &str) -> Vec<String> {
    split_quoted(inner)
        .into_iter()
        .filter_map(|item| {
            let item = item.trim();
            match unquote(item) {
                Some(text) => Some(text),
                None if item.is_empty() => None,
                None => Some(item.to_string()),
            }
        })
        .collect()
}

/// Splits on commas that are not inside a quoted item.
fn split_quoted(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, ',') => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Returns the decoded contents of a fully quoted string.
fn unquote(s: &str) -> Option<String> {
    if s.len() < 2 {
        return None;
    }
    let quote = s.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let inner = s.strip_prefix(quote)?.strip_suffix(quote)?;
    Some(unescape(inner))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
