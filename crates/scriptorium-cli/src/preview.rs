//! Block trees drawn as styled terminal lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use scriptorium_engine::{
    Block, FrontmatterValue, Inline, RenderedPage,
    parsing::blocks::{CustomBlock, ListItem, ListMarker, Table, TableCell},
};

const QUOTE_BAR: &str = "│ ";

pub fn page_lines(page: &RenderedPage) -> Vec<Line<'static>> {
    let mut lines = vec![];
    if !page.frontmatter.is_empty() {
        for (key, value) in page.frontmatter.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value_text(value)),
            ]));
        }
        lines.push(Line::from("─".repeat(40)));
        lines.push(Line::default());
    }
    lines.extend(block_lines(&page.blocks));
    lines
}

fn value_text(value: &FrontmatterValue) -> String {
    match value {
        FrontmatterValue::String(s) => s.clone(),
        FrontmatterValue::Number(n) => n.to_string(),
        FrontmatterValue::Bool(b) => b.to_string(),
        FrontmatterValue::List(items) => items.join(", "),
    }
}

pub fn block_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for block in blocks {
        push_block(block, "", &mut lines);
    }
    lines
}

fn push_block(block: &Block, prefix: &str, lines: &mut Vec<Line<'static>>) {
    let line = |spans: Vec<Span<'static>>| {
        let mut all = vec![Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::DarkGray),
        )];
        all.extend(spans);
        Line::from(all)
    };

    match block {
        Block::Heading {
            level, children, ..
        } => {
            let style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            let mut spans = vec![Span::styled(
                format!("{} ", "#".repeat(*level as usize)),
                style,
            )];
            spans.extend(inline_spans(children, style));
            lines.push(line(spans));
            lines.push(line(vec![]));
        }
        Block::Paragraph(children) => {
            lines.push(line(inline_spans(children, Style::default())));
            lines.push(line(vec![]));
        }
        Block::CodeBlock { language, lines: code } => {
            let style = Style::default().fg(Color::Yellow);
            lines.push(line(vec![Span::styled(
                format!("```{}", language.as_deref().unwrap_or("")),
                style,
            )]));
            for code_line in code {
                lines.push(line(vec![Span::styled(code_line.clone(), style)]));
            }
            lines.push(line(vec![Span::styled("```".to_string(), style)]));
            lines.push(line(vec![]));
        }
        Block::List(list) => {
            push_items(&list.items, 0, prefix, lines);
            lines.push(line(vec![]));
        }
        Block::Blockquote { children, .. } => {
            let nested = format!("{prefix}{QUOTE_BAR}");
            for child in children {
                push_block(child, &nested, lines);
            }
        }
        Block::Table(table) => {
            push_table(table, prefix, lines);
            lines.push(line(vec![]));
        }
        Block::HorizontalRule => {
            lines.push(line(vec![Span::raw("─".repeat(40))]));
            lines.push(line(vec![]));
        }
        Block::Image { alt, src, .. } => {
            lines.push(line(vec![Span::styled(
                format!("[image: {alt}] ({src})"),
                Style::default().fg(Color::Magenta),
            )]));
            lines.push(line(vec![]));
        }
        Block::DefinitionList(entries) => {
            for entry in entries {
                lines.push(line(inline_spans(
                    &entry.term,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for definition in &entry.definitions {
                    let mut spans = vec![Span::raw("    ".to_string())];
                    spans.extend(inline_spans(definition, Style::default()));
                    lines.push(line(spans));
                }
            }
            lines.push(line(vec![]));
        }
        Block::Custom(custom) => {
            push_custom(custom, &line, lines);
            lines.push(line(vec![]));
        }
        Block::Footnotes(notes) => {
            lines.push(line(vec![Span::raw("─".repeat(20))]));
            for note in notes {
                let mut spans = vec![Span::styled(
                    format!("{}. ", note.number),
                    Style::default().fg(Color::DarkGray),
                )];
                spans.extend(inline_spans(&note.content, Style::default()));
                lines.push(line(spans));
            }
        }
    }
}

fn push_items(items: &[ListItem], depth: usize, prefix: &str, lines: &mut Vec<Line<'static>>) {
    for item in items {
        let marker = match item.marker {
            ListMarker::Bullet => "•".to_string(),
            ListMarker::Ordered(n) => format!("{n}."),
        };
        let task = match item.task {
            Some(task) if task.checked => "[x] ",
            Some(_) => "[ ] ",
            None => "",
        };
        let mut spans = vec![
            Span::styled(prefix.to_string(), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}{marker} {task}", "  ".repeat(depth))),
        ];
        spans.extend(inline_spans(&item.content, Style::default()));
        lines.push(Line::from(spans));
        push_items(&item.children, depth + 1, prefix, lines);
    }
}

fn push_table(table: &Table, prefix: &str, lines: &mut Vec<Line<'static>>) {
    let row_line = |cells: &[TableCell], style: Style| {
        let mut spans = vec![Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::DarkGray),
        )];
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.extend(inline_spans(&cell.content, style));
        }
        Line::from(spans)
    };

    for header in &table.header {
        lines.push(row_line(header, Style::default().add_modifier(Modifier::BOLD)));
    }
    for row in &table.rows {
        lines.push(row_line(row, Style::default()));
    }
}

fn push_custom(
    custom: &CustomBlock,
    line: &dyn Fn(Vec<Span<'static>>) -> Line<'static>,
    lines: &mut Vec<Line<'static>>,
) {
    let accent = Style::default().fg(Color::Green);
    match custom {
        CustomBlock::Breakout { content } => {
            let mut spans = vec![Span::styled("❝ ".to_string(), accent)];
            spans.extend(inline_spans(
                content,
                Style::default().add_modifier(Modifier::ITALIC),
            ));
            lines.push(line(spans));
        }
        CustomBlock::Cta {
            title,
            description,
            button,
        }
        | CustomBlock::CtaBanner {
            title,
            description,
            button,
            ..
        } => {
            lines.push(line(vec![Span::styled(
                format!("▶ {title}"),
                accent.add_modifier(Modifier::BOLD),
            )]));
            if let Some(description) = description {
                lines.push(line(inline_spans(description, Style::default())));
            }
            if let Some(button) = button {
                lines.push(line(vec![Span::styled(
                    format!("[ {} ] → {}", button.label, button.href),
                    accent.add_modifier(Modifier::REVERSED),
                )]));
            }
        }
    }
}

fn inline_spans(nodes: &[Inline], base: Style) -> Vec<Span<'static>> {
    let mut spans = vec![];
    for node in nodes {
        match node {
            Inline::Text(text) => spans.push(Span::styled(text.clone(), base)),
            Inline::Code(code) => spans.push(Span::styled(code.clone(), base.fg(Color::Yellow))),
            Inline::Link { children, .. } => spans.extend(inline_spans(
                children,
                base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )),
            Inline::Bold(c) => spans.extend(inline_spans(c, base.add_modifier(Modifier::BOLD))),
            Inline::Italic(c) => spans.extend(inline_spans(c, base.add_modifier(Modifier::ITALIC))),
            Inline::Strikethrough(c) => {
                spans.extend(inline_spans(c, base.add_modifier(Modifier::CROSSED_OUT)))
            }
            Inline::Highlight(c) => {
                spans.extend(inline_spans(c, base.bg(Color::Yellow).fg(Color::Black)))
            }
            Inline::FootnoteRef { number, .. } => spans.push(Span::styled(
                format!("[{number}]"),
                base.fg(Color::DarkGray),
            )),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptorium_engine::parse_blocks;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn headings_keep_their_markers() {
        let lines = block_lines(&parse_blocks("## Hello *world*"));
        assert_eq!(plain(&lines), vec!["## Hello world", ""]);
        assert!(lines[0].spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn nested_lists_indent() {
        let lines = block_lines(&parse_blocks("- a\n  - [x] b\n1. c"));
        assert_eq!(plain(&lines), vec!["• a", "  • [x] b", "1. c", ""]);
    }

    #[test]
    fn quotes_get_a_bar_per_level() {
        let lines = block_lines(&parse_blocks("> outer\n> > inner"));
        let text = plain(&lines);
        assert!(text.contains(&"│ outer".to_string()), "{text:?}");
        assert!(text.contains(&"│ │ inner".to_string()), "{text:?}");
    }

    #[test]
    fn cta_shows_button_target() {
        let lines = block_lines(&parse_blocks("> CTA: Join\n> [Go](/signup)"));
        assert_eq!(plain(&lines), vec!["▶ Join", "[ Go ] → /signup", ""]);
    }

    #[test]
    fn footnote_refs_are_numbered() {
        let lines = block_lines(&parse_blocks("Fact[^a].\n\n[^a]: Source."));
        let text = plain(&lines);
        assert_eq!(text[0], "Fact[1].");
        assert_eq!(text.last().map(String::as_str), Some("1. Source."));
    }
}
