//! Footnote definitions and references.

use std::sync::LazyLock;

use regex::Regex;

use super::CodeFence;

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\^([^\]]+)\]:\s*(.*)$").expect("footnote definition pattern is valid")
});

/// `[^id]` inside running text.
pub static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\^([^\]]+)\]").expect("footnote reference pattern is valid"));

/// Parses a `[^id]: text` line.
pub fn definition(line: &str) -> Option<(&str, &str)> {
    let caps = DEFINITION.captures(line.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str().trim()))
}

pub fn is_definition(line: &str) -> bool {
    definition(line).is_some()
}

/// Footnote definitions collected ahead of the main pass so forward
/// references resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootnoteTable {
    entries: Vec<(String, String)>,
}

impl FootnoteTable {
    /// Collects definitions outside closed code fences, first definition
    /// winning.
    pub fn collect(lines: &[&str]) -> Self {
        let mut table = Self::default();
        let fenced = CodeFence::fenced_lines(lines);
        for (line, _) in lines.iter().zip(fenced).filter(|(_, fenced)| !fenced) {
            if let Some((id, text)) = definition(line)
                && table.number(id).is_none()
            {
                table.entries.push((id.to_string(), text.to_string()));
            }
        }
        table
    }

    /// 1-based position of `id`, if defined.
    pub fn number(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == id).map(|i| i + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (id, text))| (i + 1, id.as_str(), text.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
