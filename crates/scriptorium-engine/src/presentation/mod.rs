//! # Presentation
//!
//! Turns block trees into HTML. Recognition happens once in
//! [`crate::parsing`]; the two variants differ only in the [`Theme`] the
//! renderer is instantiated with.
//!
//! ## Modules
//!
//! - **`theme`**: the `Theme` strategy, `PublicTheme` and `EditorTheme`
//! - **`html`**: `HtmlRenderer<T: Theme>`, escaping via `html-escape`

pub mod html;
pub mod theme;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use html::HtmlRenderer;
pub use theme::{EditorTheme, PublicTheme, Theme};

use crate::parsing::Block;
use crate::sections::PageSection;

/// Anything a theme can style. Depths are 0-based for lists; blockquote
/// depth is already capped for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Heading(u8),
    Paragraph,
    LeadParagraph,
    CodeBlock,
    List { ordered: bool, depth: usize },
    ListItem { depth: usize },
    TaskCheckbox,
    Blockquote { depth: usize },
    Table,
    TableHeader,
    TableCell,
    Rule,
    Figure,
    Image,
    Caption,
    DefinitionList,
    Term,
    Definition,
    Breakout,
    Cta,
    CtaButton,
    CtaBanner,
    Footnotes,
    FootnoteRef,
    Link,
    Code,
    Bold,
    Italic,
    Strikethrough,
    Highlight,
    Section,
    Hero,
    CardGrid,
    Card { columns: u8 },
    CardIcon,
}

impl Element {
    /// Kebab-case name used to build class names.
    pub fn name(self) -> &'static str {
        match self {
            Element::Heading(_) => "heading",
            Element::Paragraph => "paragraph",
            Element::LeadParagraph => "lead",
            Element::CodeBlock => "code-block",
            Element::List { .. } => "list",
            Element::ListItem { .. } => "list-item",
            Element::TaskCheckbox => "task",
            Element::Blockquote { .. } => "quote",
            Element::Table => "table",
            Element::TableHeader => "table-head",
            Element::TableCell => "table-cell",
            Element::Rule => "rule",
            Element::Figure => "figure",
            Element::Image => "image",
            Element::Caption => "caption",
            Element::DefinitionList => "dl",
            Element::Term => "dt",
            Element::Definition => "dd",
            Element::Breakout => "breakout",
            Element::Cta => "cta",
            Element::CtaButton => "cta-button",
            Element::CtaBanner => "cta-banner",
            Element::Footnotes => "footnotes",
            Element::FootnoteRef => "footnote-ref",
            Element::Link => "link",
            Element::Code => "code",
            Element::Bold => "bold",
            Element::Italic => "italic",
            Element::Strikethrough => "strike",
            Element::Highlight => "highlight",
            Element::Section => "section",
            Element::Hero => "hero",
            Element::CardGrid => "card-grid",
            Element::Card { .. } => "card",
            Element::CardIcon => "card-icon",
        }
    }
}

/// Runtime choice of presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Public,
    Editor,
}

impl Variant {
    pub fn render_html(self, blocks: &[Block]) -> String {
        match self {
            Variant::Public => HtmlRenderer::new(PublicTheme).render(blocks),
            Variant::Editor => HtmlRenderer::new(EditorTheme).render(blocks),
        }
    }

    pub fn render_page_html(self, sections: &[PageSection]) -> String {
        match self {
            Variant::Public => HtmlRenderer::new(PublicTheme).render_sections(sections),
            Variant::Editor => HtmlRenderer::new(EditorTheme).render_sections(sections),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant {0:?}, expected \"public\" or \"editor\"")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Variant::Public),
            "editor" => Ok(Variant::Editor),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
