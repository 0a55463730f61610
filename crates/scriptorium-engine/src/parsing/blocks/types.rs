use crate::parsing::inline::Inline;

/// A structural unit of a rendered document.
///
/// Lists and blockquotes are self-similar: list items hold child items, and a
/// blockquote holds arbitrary blocks including further blockquotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// 1..=6
        level: u8,
        /// Slug for in-page anchors, derived from the heading text.
        anchor: String,
        children: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    CodeBlock {
        language: Option<String>,
        /// Raw lines between the fences, never inline-parsed.
        lines: Vec<String>,
    },
    List(List),
    Blockquote {
        /// 1 for a top-level quote, incremented per nested `>`.
        depth: usize,
        children: Vec<Block>,
    },
    Table(Table),
    HorizontalRule,
    Image {
        alt: String,
        /// Sanitised source.
        src: String,
        title: Option<String>,
        /// The alt text when non-empty.
        caption: Option<String>,
    },
    DefinitionList(Vec<Definition>),
    Custom(CustomBlock),
    /// Collected footnote definitions in first-defined order.
    Footnotes(Vec<Footnote>),
}

/// The marker that introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered(u32),
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered(_))
    }
}

/// A task checkbox (`[ ]` or `[x]`) at the start of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskState {
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    /// First number of an ordered list.
    pub start: Option<u32>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub marker: ListMarker,
    pub task: Option<TaskState>,
    pub content: Vec<Inline>,
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// A nested group is ordered when its first item is.
    pub fn children_ordered(&self) -> bool {
        self.children
            .first()
            .is_some_and(|child| child.marker.is_ordered())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Trimmed source text of the cell.
    pub raw: String,
    pub content: Vec<Inline>,
}

pub type TableRow = Vec<TableCell>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Rows above the separator; empty without one.
    pub header: Vec<TableRow>,
    /// One entry per separator column; empty without a separator row.
    pub alignments: Vec<Alignment>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Alignment for column `index`, left when unspecified.
    pub fn alignment(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }

    /// Widest row, header included.
    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub term: Vec<Inline>,
    pub definitions: Vec<Vec<Inline>>,
}

/// Non-standard blocks introduced by a directive prefix or by page layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomBlock {
    /// `> BREAKOUT: text`, an emphasised pull quote.
    Breakout { content: Vec<Inline> },
    /// `> CTA: title` with optional description and button lines.
    Cta {
        title: String,
        description: Option<Vec<Inline>>,
        button: Option<CtaButton>,
    },
    /// Full-width banner produced by the `cta-banner` page layout.
    CtaBanner {
        title: String,
        description: Option<Vec<Inline>>,
        button: Option<CtaButton>,
        background: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaButton {
    pub label: String,
    /// Sanitised target.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub id: String,
    pub number: usize,
    pub content: Vec<Inline>,
}
