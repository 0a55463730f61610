/// Fenced code block delimiters.
///
/// A fence opens and closes on any line whose trimmed content starts with
/// three backticks. Everything between is a raw zone.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the language tag when `line` is a fence, `Some(None)` for a
    /// bare fence.
    pub fn open(line: &str) -> Option<Option<String>> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        let lang = rest.trim();
        Some((!lang.is_empty()).then(|| lang.to_string()))
    }

    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }

    /// Index of the closing fence for an opener at `open`, if any.
    pub fn find_close(lines: &[&str], open: usize) -> Option<usize> {
        lines
            .iter()
            .enumerate()
            .skip(open + 1)
            .find(|(_, line)| Self::is_fence(line))
            .map(|(i, _)| i)
    }

    /// Marks every line covered by a closed fence, delimiters included. An
    /// opener with no close covers nothing and later lines stay markdown.
    pub fn fenced_lines(lines: &[&str]) -> Vec<bool> {
        let mut fenced = vec![false; lines.len()];
        let mut i = 0;
        while i < lines.len() {
            if Self::is_fence(lines[i])
                && let Some(close) = Self::find_close(lines, i)
            {
                fenced[i..=close].fill(true);
                i = close + 1;
            } else {
                i += 1;
            }
        }
        fenced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(CodeFence::open("```rust"), Some(Some("rust".to_string())));
    }

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::open("  ```  "), Some(None));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("``inline``"), None);
    }

    #[test]
    fn finds_matching_close() {
        let lines = ["```", "code", "```", "after"];
        assert_eq!(CodeFence::find_close(&lines, 0), Some(2));
    }

    #[test]
    fn unterminated_fence_has_no_close() {
        let lines = ["```js", "let x = 1;"];
        assert_eq!(CodeFence::find_close(&lines, 0), None);
    }

    #[test]
    fn fenced_lines_cover_closed_fences_only() {
        let lines = ["a", "```", "b", "```", "```", "c"];
        assert_eq!(
            CodeFence::fenced_lines(&lines),
            vec![false, true, true, true, false, false]
        );
    }
}
