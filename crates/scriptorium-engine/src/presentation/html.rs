use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::parsing::{
    Block, Inline,
    blocks::{Alignment, CtaButton, CustomBlock, ListItem, Table, kinds::BlockQuote},
};
use crate::sections::PageSection;

use super::{Element, Theme};

/// Renders block trees as HTML fragments styled by `T`.
///
/// Every text node and attribute value is escaped here; URLs in the tree have
/// already been sanitised by the parser.
pub struct HtmlRenderer<T: Theme> {
    theme: T,
}

impl<T: Theme> HtmlRenderer<T> {
    pub fn new(theme: T) -> Self {
        Self { theme }
    }

    pub fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::with_capacity(4096);
        self.blocks(blocks, true, &mut out);
        out
    }

    pub fn render_sections(&self, sections: &[PageSection]) -> String {
        let mut out = String::with_capacity(4096);
        for section in sections {
            self.section(section, &mut out);
        }
        out
    }

    fn class(&self, element: Element) -> String {
        format!(" class=\"{}\"", attr(&self.theme.class(element)))
    }

    fn blocks(&self, blocks: &[Block], top_level: bool, out: &mut String) {
        let mut after_title = false;
        for block in blocks {
            let lead = T::LEAD_PARAGRAPH && top_level && after_title;
            self.block(block, lead, out);
            after_title = matches!(block, Block::Heading { level: 1, .. });
        }
    }

    fn block(&self, block: &Block, lead: bool, out: &mut String) {
        match block {
            Block::Heading {
                level,
                anchor,
                children,
            } => {
                out.push_str(&format!(
                    "<h{level} id=\"{}\"{}>",
                    attr(anchor),
                    self.class(Element::Heading(*level))
                ));
                self.inline(children, out);
                out.push_str(&format!("</h{level}>\n"));
            }
            Block::Paragraph(children) => {
                let element = if lead {
                    Element::LeadParagraph
                } else {
                    Element::Paragraph
                };
                out.push_str(&format!("<p{}>", self.class(element)));
                self.inline(children, out);
                out.push_str("</p>\n");
            }
            Block::CodeBlock { language, lines } => {
                out.push_str(&format!("<pre{}><code", self.class(Element::CodeBlock)));
                if let Some(language) = language {
                    out.push_str(&format!(" class=\"language-{}\"", attr(language)));
                }
                out.push('>');
                out.push_str(&text(&lines.join("\n")));
                out.push_str("</code></pre>\n");
            }
            Block::List(list) => self.list(&list.items, list.ordered, list.start, 0, out),
            Block::Blockquote { depth, children } => {
                let style_depth = (*depth).min(BlockQuote::STYLE_DEPTH_CAP);
                out.push_str(&format!(
                    "<blockquote{}>\n",
                    self.class(Element::Blockquote { depth: style_depth })
                ));
                self.blocks(children, false, out);
                out.push_str("</blockquote>\n");
            }
            Block::Table(table) => self.table(table, out),
            Block::HorizontalRule => out.push_str(&format!("<hr{}>\n", self.class(Element::Rule))),
            Block::Image {
                alt,
                src,
                title,
                caption,
            } => {
                out.push_str(&format!("<figure{}>", self.class(Element::Figure)));
                out.push_str(&format!(
                    "<img{} src=\"{}\" alt=\"{}\"",
                    self.class(Element::Image),
                    attr(src),
                    attr(alt)
                ));
                if let Some(title) = title {
                    out.push_str(&format!(" title=\"{}\"", attr(title)));
                }
                out.push_str(" loading=\"lazy\">");
                if let Some(caption) = caption {
                    out.push_str(&format!(
                        "<figcaption{}>{}</figcaption>",
                        self.class(Element::Caption),
                        text(caption)
                    ));
                }
                out.push_str("</figure>\n");
            }
            Block::DefinitionList(entries) => {
                out.push_str(&format!("<dl{}>\n", self.class(Element::DefinitionList)));
                for entry in entries {
                    out.push_str(&format!("<dt{}>", self.class(Element::Term)));
                    self.inline(&entry.term, out);
                    out.push_str("</dt>\n");
                    for definition in &entry.definitions {
                        out.push_str(&format!("<dd{}>", self.class(Element::Definition)));
                        self.inline(definition, out);
                        out.push_str("</dd>\n");
                    }
                }
                out.push_str("</dl>\n");
            }
            Block::Custom(custom) => self.custom(custom, out),
            Block::Footnotes(notes) => {
                out.push_str(&format!(
                    "<section{}>\n<ol>\n",
                    self.class(Element::Footnotes)
                ));
                for note in notes {
                    out.push_str(&format!("<li id=\"fn-{}\">", note.number));
                    self.inline(&note.content, out);
                    out.push_str("</li>\n");
                }
                out.push_str("</ol>\n</section>\n");
            }
        }
    }

    fn list(
        &self,
        items: &[ListItem],
        ordered: bool,
        start: Option<u32>,
        depth: usize,
        out: &mut String,
    ) {
        let tag = if ordered { "ol" } else { "ul" };
        out.push_str(&format!(
            "<{tag}{}",
            self.class(Element::List { ordered, depth })
        ));
        if let Some(start) = start.filter(|n| ordered && *n != 1) {
            out.push_str(&format!(" start=\"{start}\""));
        }
        out.push_str(">\n");

        for item in items {
            out.push_str(&format!("<li{}>", self.class(Element::ListItem { depth })));
            if let Some(task) = item.task {
                let checked = if task.checked { " checked" } else { "" };
                out.push_str(&format!(
                    "<input type=\"checkbox\"{} disabled{}> ",
                    self.class(Element::TaskCheckbox),
                    checked
                ));
            }
            self.inline(&item.content, out);
            if !item.children.is_empty() {
                out.push('\n');
                self.list(&item.children, item.children_ordered(), None, depth + 1, out);
            }
            out.push_str("</li>\n");
        }

        out.push_str(&format!("</{tag}>\n"));
    }

    fn table(&self, table: &Table, out: &mut String) {
        out.push_str(&format!("<table{}>\n", self.class(Element::Table)));
        if !table.header.is_empty() {
            out.push_str(&format!("<thead{}>\n", self.class(Element::TableHeader)));
            for row in &table.header {
                out.push_str("<tr>");
                for (i, cell) in row.iter().enumerate() {
                    out.push_str(&format!("<th{}>", align_style(table.alignment(i))));
                    self.inline(&cell.content, out);
                    out.push_str("</th>");
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</thead>\n");
        }
        out.push_str("<tbody>\n");
        for row in &table.rows {
            out.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!(
                    "<td{}{}>",
                    self.class(Element::TableCell),
                    align_style(table.alignment(i))
                ));
                self.inline(&cell.content, out);
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }

    fn custom(&self, custom: &CustomBlock, out: &mut String) {
        match custom {
            CustomBlock::Breakout { content } => {
                out.push_str(&format!("<aside{}><p>", self.class(Element::Breakout)));
                self.inline(content, out);
                out.push_str("</p></aside>\n");
            }
            CustomBlock::Cta {
                title,
                description,
                button,
            } => {
                out.push_str(&format!("<section{}>\n", self.class(Element::Cta)));
                self.call_to_action(title, description.as_deref(), button.as_ref(), out);
                out.push_str("</section>\n");
            }
            CustomBlock::CtaBanner {
                title,
                description,
                button,
                background,
            } => {
                out.push_str(&format!("<section{}", self.class(Element::CtaBanner)));
                if let Some(background) = background {
                    out.push_str(&format!(" data-background=\"{}\"", attr(background)));
                }
                out.push_str(">\n");
                self.call_to_action(title, description.as_deref(), button.as_ref(), out);
                out.push_str("</section>\n");
            }
        }
    }

    fn call_to_action(
        &self,
        title: &str,
        description: Option<&[Inline]>,
        button: Option<&CtaButton>,
        out: &mut String,
    ) {
        out.push_str(&format!("<h3>{}</h3>\n", text(title)));
        if let Some(description) = description {
            out.push_str("<p>");
            self.inline(description, out);
            out.push_str("</p>\n");
        }
        if let Some(button) = button {
            out.push_str(&format!(
                "<a{} href=\"{}\">{}</a>\n",
                self.class(Element::CtaButton),
                attr(&button.href),
                text(&button.label)
            ));
        }
    }

    fn section(&self, section: &PageSection, out: &mut String) {
        match section {
            PageSection::Preamble(blocks) => self.blocks(blocks, true, out),
            PageSection::Default {
                heading,
                blocks,
                children,
            } => {
                out.push_str(&format!("<section{}>\n", self.class(Element::Section)));
                self.block(heading, false, out);
                self.blocks(blocks, false, out);
                for child in children {
                    self.section(child, out);
                }
                out.push_str("</section>\n");
            }
            PageSection::Hero {
                title,
                blocks,
                background,
            } => {
                out.push_str(&format!("<header{}", self.class(Element::Hero)));
                if let Some(background) = background {
                    out.push_str(&format!(" data-background=\"{}\"", attr(background)));
                }
                out.push_str(">\n<h1>");
                self.inline(title, out);
                out.push_str("</h1>\n");
                self.blocks(blocks, false, out);
                out.push_str("</header>\n");
            }
            PageSection::CardGrid {
                heading,
                intro,
                columns,
                cards,
            } => {
                out.push_str(&format!("<section{}>\n", self.class(Element::CardGrid)));
                self.block(heading, false, out);
                self.blocks(intro, false, out);
                for card in cards {
                    out.push_str(&format!(
                        "<article{}>\n",
                        self.class(Element::Card { columns: *columns })
                    ));
                    if let Some(icon) = &card.icon {
                        out.push_str(&format!(
                            "<span{} data-icon=\"{}\"></span>\n",
                            self.class(Element::CardIcon),
                            attr(icon)
                        ));
                    }
                    out.push_str("<h3>");
                    self.inline(&card.title, out);
                    out.push_str("</h3>\n");
                    self.blocks(&card.blocks, false, out);
                    out.push_str("</article>\n");
                }
                out.push_str("</section>\n");
            }
            PageSection::CtaSection {
                heading,
                blocks,
                background,
            } => {
                out.push_str(&format!("<section{}", self.class(Element::Cta)));
                if let Some(background) = background {
                    out.push_str(&format!(" data-background=\"{}\"", attr(background)));
                }
                out.push_str(">\n");
                self.block(heading, false, out);
                self.blocks(blocks, false, out);
                out.push_str("</section>\n");
            }
            PageSection::CtaBanner(custom) => self.custom(custom, out),
        }
    }

    fn inline(&self, nodes: &[Inline], out: &mut String) {
        for node in nodes {
            match node {
                Inline::Text(s) => out.push_str(&text(s)),
                Inline::Code(s) => {
                    out.push_str(&format!(
                        "<code{}>{}</code>",
                        self.class(Element::Code),
                        text(s)
                    ));
                }
                Inline::Link {
                    href,
                    title,
                    children,
                } => {
                    out.push_str(&format!(
                        "<a{} href=\"{}\"",
                        self.class(Element::Link),
                        attr(href)
                    ));
                    if let Some(title) = title {
                        out.push_str(&format!(" title=\"{}\"", attr(title)));
                    }
                    if href.starts_with("http://") || href.starts_with("https://") {
                        out.push_str(" rel=\"noopener noreferrer\"");
                    }
                    out.push('>');
                    self.inline(children, out);
                    out.push_str("</a>");
                }
                Inline::Bold(c) => self.wrap("strong", Element::Bold, c, out),
                Inline::Italic(c) => self.wrap("em", Element::Italic, c, out),
                Inline::Strikethrough(c) => self.wrap("del", Element::Strikethrough, c, out),
                Inline::Highlight(c) => self.wrap("mark", Element::Highlight, c, out),
                Inline::FootnoteRef { number, .. } => {
                    out.push_str(&format!(
                        "<sup{}><a href=\"#fn-{number}\">{number}</a></sup>",
                        self.class(Element::FootnoteRef)
                    ));
                }
            }
        }
    }

    fn wrap(&self, tag: &str, element: Element, children: &[Inline], out: &mut String) {
        out.push_str(&format!("<{tag}{}>", self.class(element)));
        self.inline(children, out);
        out.push_str(&format!("</{tag}>"));
    }
}

fn align_style(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "",
        Alignment::Center => " style=\"text-align:center\"",
        Alignment::Right => " style=\"text-align:right\"",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_blocks;
    use crate::presentation::{EditorTheme, PublicTheme};
    use pretty_assertions::assert_eq;

    fn public(md: &str) -> String {
        HtmlRenderer::new(PublicTheme).render(&parse_blocks(md))
    }

    fn editor(md: &str) -> String {
        HtmlRenderer::new(EditorTheme).render(&parse_blocks(md))
    }

    #[test]
    fn escapes_text_and_attributes() {
        let html = public("<script>alert(1)</script> & [x](/a?b=1&c=2)");
        assert!(!html.contains("<script>"), "{html}");
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; "), "{html}");
        assert!(html.contains("href=\"/a?b=1&amp;c=2\""), "{html}");
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            public("## Hi *there*\n\ntext"),
            "<h2 id=\"hi-there\" class=\"post-heading post-h2\">Hi \
             <em class=\"post-italic\">there</em></h2>\n\
             <p class=\"post-paragraph\">text</p>\n"
        );
    }

    #[test]
    fn editor_marks_lead_paragraph_after_title() {
        let html = editor("# Title\n\nFirst.\n\nSecond.");
        assert!(html.contains("<p class=\"preview-lead\">First.</p>"), "{html}");
        assert!(html.contains("<p class=\"preview-paragraph\">Second.</p>"), "{html}");
    }

    #[test]
    fn public_has_no_lead_paragraph() {
        let html = public("# Title\n\nFirst.");
        assert!(html.contains("<p class=\"post-paragraph\">First.</p>"), "{html}");
    }

    #[test]
    fn blockquote_style_depth_is_capped() {
        let html = public("> > > > > deep");
        assert!(html.contains("post-quote-3"), "{html}");
        assert!(!html.contains("post-quote-4"), "{html}");
    }

    #[test]
    fn nested_lists_band_by_depth() {
        let html = public("- a\n  - b\n    1. c");
        assert!(html.contains("post-bullet-band-0"), "{html}");
        assert!(html.contains("post-bullet-band-1"), "{html}");
        assert!(html.contains("<ol class=\"post-list post-ol post-list-depth-2\">"), "{html}");
    }

    #[test]
    fn ordered_list_keeps_start_number() {
        let html = public("3. three\n4. four");
        assert!(html.starts_with("<ol class=\"post-list post-ol post-list-depth-0\" start=\"3\">"), "{html}");
    }

    #[test]
    fn table_alignment_becomes_style() {
        let html = public("| A | B |\n|:--|--:|\n| 1 | 2 |");
        assert!(html.contains("<th>A</th><th style=\"text-align:right\">B</th>"), "{html}");
        assert!(html.contains("style=\"text-align:right\">2</td>"), "{html}");
    }

    #[test]
    fn stacked_header_rows_stay_in_thead() {
        let html = public("| A |\n| B |\n|---|\n| c |");
        assert!(
            html.contains("<tr><th>A</th></tr>\n<tr><th>B</th></tr>\n</thead>"),
            "{html}"
        );
        assert_eq!(html.matches("<td").count(), 1);
    }

    #[test]
    fn task_items_render_checkboxes() {
        let html = public("- [x] done\n- [ ] todo");
        assert!(html.contains("disabled checked>"), "{html}");
        assert_eq!(html.matches("type=\"checkbox\"").count(), 2);
    }

    #[test]
    fn footnotes_link_to_section() {
        let html = public("Claim[^1].\n\n[^1]: Source.");
        assert!(html.contains("<a href=\"#fn-1\">1</a>"), "{html}");
        assert!(html.contains("<li id=\"fn-1\">Source.</li>"), "{html}");
    }

    #[test]
    fn code_block_is_escaped_verbatim() {
        let html = public("```html\n<b>**x**</b>\n```");
        assert!(
            html.contains("<code class=\"language-html\">&lt;b&gt;**x**&lt;/b&gt;</code>"),
            "{html}"
        );
    }

    #[test]
    fn external_links_get_rel() {
        let html = public("[a](https://example.com) [b](/local)");
        assert!(html.contains("href=\"https://example.com\" rel=\"noopener noreferrer\""));
        assert!(html.contains("href=\"/local\">b</a>"));
    }
}
