/// A span-level node produced by [`super::parse_inline`].
///
/// Emphasis variants and links wrap further inline nodes, so `**_x_**` is a
/// `Bold` containing an `Italic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text; adjacent runs are always merged.
    Text(String),
    /// A code span. Raw zone: its contents are never parsed.
    Code(String),
    /// A link whose `href` has already been through the URL sanitiser.
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Highlight(Vec<Inline>),
    /// Marker for a footnote defined elsewhere in the document.
    FootnoteRef {
        id: String,
        /// 1-based position in the footnote section.
        number: usize,
    },
}

impl Inline {
    /// Concatenated visible text of `nodes`, markup removed.
    pub fn plain_text(nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            node.push_plain_text(&mut out);
        }
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(s) | Inline::Code(s) => out.push_str(s),
            Inline::Link { children, .. }
            | Inline::Bold(children)
            | Inline::Italic(children)
            | Inline::Strikethrough(children)
            | Inline::Highlight(children) => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
            Inline::FootnoteRef { number, .. } => out.push_str(&format!("[{number}]")),
        }
    }
}
