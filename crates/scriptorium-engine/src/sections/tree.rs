use crate::parsing::blocks::kinds::{CodeFence, Heading};

/// Deepest heading level that opens a section.
pub const MAX_SECTION_LEVEL: u8 = 3;

/// A heading and everything up to the next heading of the same or higher rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the `#` prefix.
    pub heading: String,
    /// 1..=3
    pub level: u8,
    /// Raw markdown between this heading and its first child (or its end).
    pub content: String,
    pub children: Vec<Section>,
}

impl Section {
    /// Heading as written in the source, e.g. `## Services`. This is the key
    /// enhancement rules are looked up by.
    pub fn key(&self) -> String {
        format!("{} {}", "#".repeat(self.level as usize), self.heading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTree {
    /// Content before the first section heading.
    pub preamble: String,
    pub sections: Vec<Section>,
}

/// Groups a body into sections by its H1–H3 headings.
///
/// Headings inside closed code fences are content; an unterminated fence
/// hides nothing, as in block parsing. H4–H6 stay in their section's
/// content. A heading closes every open section of the same or deeper level,
/// so `# A / ### B / ## C` makes both `B` and `C` children of `A`.
pub fn group_sections(body: &str) -> SectionTree {
    let mut tree = SectionTree::default();
    let mut stack: Vec<Section> = vec![];
    let lines: Vec<&str> = body.lines().collect();
    let fenced = CodeFence::fenced_lines(&lines);

    for (line, fenced) in lines.into_iter().zip(fenced) {
        let heading = (!fenced)
            .then(|| Heading::parse(line))
            .flatten()
            .filter(|(level, _)| *level <= MAX_SECTION_LEVEL);

        let Some((level, text)) = heading else {
            let target = match stack.last_mut() {
                Some(section) => &mut section.content,
                None => &mut tree.preamble,
            };
            target.push_str(line);
            target.push('\n');
            continue;
        };

        while stack.last().is_some_and(|open| open.level >= level) {
            close_section(&mut stack, &mut tree.sections);
        }
        stack.push(Section {
            heading: text.to_string(),
            level,
            content: String::new(),
            children: vec![],
        });
    }

    while !stack.is_empty() {
        close_section(&mut stack, &mut tree.sections);
    }
    tree
}

/// Pops the innermost open section into its parent, or into the roots.
fn close_section(stack: &mut Vec<Section>, roots: &mut Vec<Section>) {
    let Some(section) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(section),
        None => roots.push(section),
    }
}
