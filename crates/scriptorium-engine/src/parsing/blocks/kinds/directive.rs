//! Custom quote-prefixed directives: `> BREAKOUT:` and `> CTA:`.

use std::sync::LazyLock;

use regex::Regex;

use super::BlockQuote;

static BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]\(([^)\s]+)\)$").expect("button pattern is valid")
});

/// Quote characters stripped from both ends of a breakout.
const QUOTE_CHARS: [char; 4] = ['"', '\'', '\u{201c}', '\u{201d}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Breakout,
    Cta,
}

impl Directive {
    pub const BREAKOUT: &'static str = "BREAKOUT:";
    pub const CTA: &'static str = "CTA:";

    /// Recognises a directive line, returning its kind and trailing text.
    pub fn parse(line: &str) -> Option<(Directive, &str)> {
        if !BlockQuote::is_quote(line) {
            return None;
        }
        let inner = BlockQuote::strip_one(line).trim_start();
        if let Some(rest) = inner.strip_prefix(Self::BREAKOUT) {
            return Some((Directive::Breakout, rest.trim()));
        }
        inner
            .strip_prefix(Self::CTA)
            .map(|rest| (Directive::Cta, rest.trim()))
    }

    pub fn is_directive(line: &str) -> bool {
        Self::parse(line).is_some()
    }
}

/// Breakout text with one surrounding quote character removed from each end.
pub fn breakout_text(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(QUOTE_CHARS).unwrap_or(text);
    text.strip_suffix(QUOTE_CHARS).unwrap_or(text).trim()
}

/// `[label](url)` on a CTA line. The url is returned unsanitised.
pub fn button(text: &str) -> Option<(&str, &str)> {
    let caps = BUTTON.captures(text.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
