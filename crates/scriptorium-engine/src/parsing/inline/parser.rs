use regex::Captures;

use crate::sanitize::safe_url;

use super::{
    cursor::Cursor,
    kinds::{DELIMITERS, InlineKind, PATTERNS},
    types::Inline,
};

/// Nesting beyond this depth is emitted as literal text.
pub const MAX_NESTING: usize = 32;

/// Parses one logical line of text into inline nodes.
///
/// At each position the constructs are tried in priority order: code span,
/// link, strikethrough, highlight, `**bold**`, `__bold__`, `*italic*`,
/// `_italic_`. Emphasis and link text are parsed recursively; code spans are
/// raw zones. When nothing matches, a plain text run is consumed up to the
/// next possible delimiter.
///
/// Output is deterministic and covers the whole input; adjacent text is
/// merged into one `Text` node.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    parse_at_depth(text, 0)
}

fn parse_at_depth(text: &str, depth: usize) -> Vec<Inline> {
    if depth > MAX_NESTING {
        return vec![Inline::Text(text.to_string())];
    }

    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some((node, consumed)) = try_construct(cur.rest(), depth) {
            out.push(node);
            cur.bump_n(consumed);
            continue;
        }
        let run = cur.skip_to_delimiter(DELIMITERS);
        push_text(&mut out, run);
    }

    out
}

/// Appends text, merging with a preceding `Text` node.
fn push_text(out: &mut Vec<Inline>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(Inline::Text(s.to_string()));
    }
}

/// Tries every construct whose opener matches the current byte.
///
/// Returns the node and the number of bytes it spans.
fn try_construct(rest: &str, depth: usize) -> Option<(Inline, usize)> {
    let first = *rest.as_bytes().first()?;
    PATTERNS
        .iter()
        .filter(|(kind, _)| kind.opener() == first)
        .find_map(|(kind, re)| {
            let caps = re.captures(rest)?;
            let len = caps.get(0)?.end();
            Some((build(*kind, &caps, depth), len))
        })
}

fn build(kind: InlineKind, caps: &Captures<'_>, depth: usize) -> Inline {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let nested = || parse_at_depth(group(1), depth + 1);

    match kind {
        InlineKind::Code => Inline::Code(group(1).to_string()),
        InlineKind::Link => Inline::Link {
            href: safe_url(group(2)),
            title: caps.get(3).map(|m| m.as_str().to_string()),
            children: nested(),
        },
        InlineKind::Strikethrough => Inline::Strikethrough(nested()),
        InlineKind::Highlight => Inline::Highlight(nested()),
        InlineKind::BoldAsterisk | InlineKind::BoldUnderscore => Inline::Bold(nested()),
        InlineKind::ItalicAsterisk | InlineKind::ItalicUnderscore => Inline::Italic(nested()),
    }
}
