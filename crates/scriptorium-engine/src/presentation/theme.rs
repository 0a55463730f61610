use super::Element;

/// Styling strategy for one presentation variant.
///
/// Themes only name classes; structure and escaping belong to the renderer,
/// so every variant renders the same tree the same way apart from styling.
pub trait Theme {
    /// Prefix shared by every class this theme emits.
    const PREFIX: &'static str;

    /// Whether a paragraph directly after the top-level heading is rendered
    /// as a lead paragraph.
    const LEAD_PARAGRAPH: bool = false;

    fn class(&self, element: Element) -> String {
        base_class(Self::PREFIX, element)
    }
}

/// Class names derived from the element kind alone.
pub fn base_class(prefix: &str, element: Element) -> String {
    match element {
        Element::Heading(level) => format!("{prefix}-heading {prefix}-h{level}"),
        Element::List { ordered, depth } => {
            let kind = if ordered { "ol" } else { "ul" };
            format!("{prefix}-list {prefix}-{kind} {prefix}-list-depth-{depth}")
        }
        Element::ListItem { .. } => format!("{prefix}-list-item"),
        Element::Blockquote { depth } => format!("{prefix}-quote {prefix}-quote-{depth}"),
        Element::Card { columns } => format!("{prefix}-card {prefix}-card-of-{columns}"),
        other => format!("{prefix}-{}", other.name()),
    }
}

/// Public site styling. Nested list bullets cycle through colour bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicTheme;

impl PublicTheme {
    pub const BULLET_BANDS: usize = 3;
}

impl Theme for PublicTheme {
    const PREFIX: &'static str = "post";

    fn class(&self, element: Element) -> String {
        match element {
            Element::ListItem { depth } => format!(
                "{p}-list-item {p}-bullet-band-{band}",
                p = Self::PREFIX,
                band = depth % Self::BULLET_BANDS
            ),
            other => base_class(Self::PREFIX, other),
        }
    }
}

/// Editor preview styling, with a lead paragraph under the title.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorTheme;

impl Theme for EditorTheme {
    const PREFIX: &'static str = "preview";
    const LEAD_PARAGRAPH: bool = true;
}
