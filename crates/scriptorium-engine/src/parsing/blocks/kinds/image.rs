use std::sync::LazyLock;

use regex::Regex;

static STANDALONE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)$"#).expect("image pattern is valid")
});

/// An image alone on its line: `![alt](src "title")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLine<'a> {
    pub alt: &'a str,
    /// Unsanitised; the builder gates it.
    pub src: &'a str,
    pub title: Option<&'a str>,
}

impl<'a> ImageLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = STANDALONE_IMAGE.captures(line.trim())?;
        Some(Self {
            alt: caps.get(1)?.as_str(),
            src: caps.get(2)?.as_str(),
            title: caps.get(3).map(|m| m.as_str()),
        })
    }
}
