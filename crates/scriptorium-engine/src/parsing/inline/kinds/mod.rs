//! # Inline Kinds
//!
//! The inline grammar as data: every construct owns its opening byte and its
//! anchored pattern. The parser walks [`PATTERNS`] in order and never
//! hardcodes a delimiter itself.
//!
//! Patterns are compiled by the `regex` crate, whose matching is linear in the
//! input, so no construct can trigger catastrophic backtracking.

use std::sync::LazyLock;

use regex::Regex;

/// Bytes that may start an inline construct. Plain text runs stop before these.
pub const DELIMITERS: &[u8] = b"`[*_~=";

/// Inline constructs in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Code,
    Link,
    Strikethrough,
    Highlight,
    BoldAsterisk,
    BoldUnderscore,
    ItalicAsterisk,
    ItalicUnderscore,
}

impl InlineKind {
    /// First byte a match of this kind must start with.
    pub fn opener(self) -> u8 {
        match self {
            InlineKind::Code => b'`',
            InlineKind::Link => b'[',
            InlineKind::Strikethrough => b'~',
            InlineKind::Highlight => b'=',
            InlineKind::BoldAsterisk | InlineKind::ItalicAsterisk => b'*',
            InlineKind::BoldUnderscore | InlineKind::ItalicUnderscore => b'_',
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            InlineKind::Code => r"^`([^`]+)`",
            InlineKind::Link => r#"^\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#,
            InlineKind::Strikethrough => r"^~~(.+?)~~",
            InlineKind::Highlight => r"^==(.+?)==",
            InlineKind::BoldAsterisk => r"^\*\*(.+?)\*\*",
            InlineKind::BoldUnderscore => r"^__(.+?)__",
            InlineKind::ItalicAsterisk => r"^\*([^*]+)\*",
            InlineKind::ItalicUnderscore => r"^_([^_]+)_",
        }
    }
}

const ORDER: [InlineKind; 8] = [
    InlineKind::Code,
    InlineKind::Link,
    InlineKind::Strikethrough,
    InlineKind::Highlight,
    InlineKind::BoldAsterisk,
    InlineKind::BoldUnderscore,
    InlineKind::ItalicAsterisk,
    InlineKind::ItalicUnderscore,
];

/// Compiled patterns, in priority order.
pub static PATTERNS: LazyLock<Vec<(InlineKind, Regex)>> = LazyLock::new(|| {
    ORDER
        .into_iter()
        .map(|kind| {
            let re = Regex::new(kind.pattern()).expect("inline pattern is valid");
            (kind, re)
        })
        .collect()
});
