/// Horizontal rules: three or more of the same `-`, `*` or `_`, no spaces.
pub struct HorizontalRule;

impl HorizontalRule {
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        matches!(first, '-' | '*' | '_') && t.len() >= 3 && chars.all(|c| c == first)
    }
}
