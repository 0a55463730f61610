/// ATX headings, `#` through `######`.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, text)` for a heading line.
    ///
    /// Prefixes are tried longest first so `### x` is never read as a level-1
    /// heading with text `## x`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        (1..=Self::MAX_LEVEL).rev().find_map(|level| {
            let hashes = &"######"[..level as usize];
            let rest = line.strip_prefix(hashes)?;
            let text = rest.strip_prefix([' ', '\t'])?;
            Some((level, text.trim()))
        })
    }

    /// URL fragment for a heading: lowercase alphanumerics joined by `-`.
    pub fn slug(text: &str) -> String {
        let mut slug = String::with_capacity(text.len());
        let mut pending_dash = false;
        for c in text.chars() {
            if c.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.extend(c.to_lowercase());
            } else if c.is_whitespace() || c == '-' || c == '_' {
                pending_dash = true;
            }
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# One", Some((1, "One")))]
    #[case("### Three  ", Some((3, "Three")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("####### Seven", None)]
    #[case("#hashtag", None)]
    #[case(" # indented", None)]
    fn parses_levels(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("  What's new?  ", "whats-new")]
    #[case("snake_case and-dash", "snake-case-and-dash")]
    #[case("Ünïcode Títle", "ünïcode-títle")]
    fn slugs(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(Heading::slug(text), expected);
    }
}
