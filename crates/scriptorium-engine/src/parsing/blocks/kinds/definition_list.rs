/// Definition lists: a term line followed by one or more `: definition` lines.
pub struct DefinitionList;

impl DefinitionList {
    pub const PREFIX: &'static str = ": ";

    /// Definition text when `line` is a `: ` line.
    pub fn definition(line: &str) -> Option<&str> {
        line.trim_start().strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Whether a definition list starts at `i`: a non-blank term with a
    /// definition on the next line.
    pub fn starts_at(lines: &[&str], i: usize) -> bool {
        let Some(term) = lines.get(i) else {
            return false;
        };
        !term.trim().is_empty()
            && Self::definition(term).is_none()
            && lines
                .get(i + 1)
                .is_some_and(|next| Self::definition(next).is_some())
    }
}
