/// Blockquote prefix handling.
///
/// All blockquote syntax knowledge lives here, not in the builder.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Deepest quote nesting that is still parsed structurally. Anything
    /// deeper is kept as paragraph text.
    pub const MAX_DEPTH: usize = 16;

    /// Depth beyond which presentation stops varying the style.
    pub const STYLE_DEPTH_CAP: usize = 3;

    pub fn is_quote(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Removes one level of quoting: the `>` and a single following space.
    pub fn strip_one(line: &str) -> &str {
        let Some(rest) = line.trim_start().strip_prefix(Self::PREFIX) else {
            return line;
        };
        rest.strip_prefix(' ').unwrap_or(rest)
    }

    /// Counts the `>` prefixes on a line: `> > x` and `>> x` are both 2.
    pub fn depth(line: &str) -> usize {
        let mut depth = 0;
        let mut rest = line;
        loop {
            let trimmed = rest.trim_start();
            match trimmed.strip_prefix(Self::PREFIX) {
                Some(r) => {
                    depth += 1;
                    rest = r;
                }
                None => return depth,
            }
        }
    }
}
