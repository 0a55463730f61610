use crate::parsing::inline::{Inline, parse_inline};
use crate::sanitize::{safe_image_src, safe_url};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{
        BlockQuote, CodeFence, DefinitionList, Directive, FootnoteTable, Heading, ImageLine,
        ListLine,
        directive::{breakout_text, button},
        footnote::REFERENCE,
        list::build_list,
        table::build_table,
    },
    types::{Block, CtaButton, CustomBlock, Definition, Footnote},
};

/// Line-oriented block parser.
///
/// One forward pass with a cursor; each branch consumes one or more lines and
/// the first matching branch wins (see [`LineClass`] for precedence).
/// Blockquote bodies are parsed by a nested builder one level deeper, sharing
/// the document's footnote table.
pub struct BlockBuilder<'t> {
    footnotes: &'t FootnoteTable,
    quote_depth: usize,
    classifier: MarkdownLineClassifier,
}

impl<'t> BlockBuilder<'t> {
    pub fn new(footnotes: &'t FootnoteTable) -> Self {
        Self::at_depth(footnotes, 0)
    }

    fn at_depth(footnotes: &'t FootnoteTable, quote_depth: usize) -> Self {
        Self {
            footnotes,
            quote_depth,
            classifier: MarkdownLineClassifier {
                nested: quote_depth > 0,
                quote_limit_reached: quote_depth >= BlockQuote::MAX_DEPTH,
            },
        }
    }

    pub fn build(&self, lines: &[&str]) -> Vec<Block> {
        let mut out = vec![];
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            match self.classifier.classify(line) {
                LineClass::Blank | LineClass::FootnoteDefinition => {
                    i += 1;
                }
                LineClass::Fence => match CodeFence::find_close(lines, i) {
                    Some(close) => {
                        out.push(Block::CodeBlock {
                            language: CodeFence::open(line).flatten(),
                            lines: lines[i + 1..close].iter().map(|l| l.to_string()).collect(),
                        });
                        i = close + 1;
                    }
                    None => {
                        out.push(Block::Paragraph(self.inline(line.trim())));
                        i += 1;
                    }
                },
                LineClass::Directive(Directive::Breakout) => {
                    let text = Directive::parse(line).map_or("", |(_, t)| t);
                    out.push(Block::Custom(CustomBlock::Breakout {
                        content: self.inline(breakout_text(text)),
                    }));
                    i += 1;
                }
                LineClass::Directive(Directive::Cta) => {
                    i = self.cta(lines, i, &mut out);
                }
                LineClass::Image => {
                    if let Some(image) = ImageLine::parse(line) {
                        out.push(Block::Image {
                            alt: image.alt.to_string(),
                            src: safe_image_src(image.src),
                            title: image.title.map(str::to_string),
                            caption: (!image.alt.is_empty()).then(|| image.alt.to_string()),
                        });
                    }
                    i += 1;
                }
                LineClass::Heading => {
                    if let Some((level, text)) = Heading::parse(line) {
                        let children = parse_inline(text);
                        out.push(Block::Heading {
                            level,
                            anchor: Heading::slug(&Inline::plain_text(&children)),
                            children,
                        });
                    }
                    i += 1;
                }
                _ if DefinitionList::starts_at(lines, i) => {
                    i = self.definition_list(lines, i, &mut out);
                }
                LineClass::ListItem => {
                    let end = self.run_end(lines, i, LineClass::ListItem);
                    let items: Vec<ListLine<'_>> =
                        lines[i..end].iter().filter_map(|l| ListLine::parse(l)).collect();
                    out.push(Block::List(build_list(&items, |t| self.inline(t))));
                    i = end;
                }
                LineClass::Rule => {
                    out.push(Block::HorizontalRule);
                    i += 1;
                }
                LineClass::TableRow => {
                    let end = self.run_end(lines, i, LineClass::TableRow);
                    out.push(Block::Table(build_table(&lines[i..end], |t| self.inline(t))));
                    i = end;
                }
                LineClass::Quote => {
                    let end = self.run_end(lines, i, LineClass::Quote);
                    let inner: Vec<&str> = lines[i..end]
                        .iter()
                        .map(|l| BlockQuote::strip_one(l))
                        .collect();
                    let depth = self.quote_depth + 1;
                    out.push(Block::Blockquote {
                        depth,
                        children: BlockBuilder::at_depth(self.footnotes, depth).build(&inner),
                    });
                    i = end;
                }
                LineClass::Text => {
                    i = self.paragraph(lines, i, &mut out);
                }
            }
        }

        out
    }

    /// End (exclusive) of the run of consecutive lines classified as `class`.
    fn run_end(&self, lines: &[&str], start: usize, class: LineClass) -> usize {
        lines[start..]
            .iter()
            .position(|l| self.classifier.classify(l) != class)
            .map_or(lines.len(), |offset| start + offset)
    }

    fn cta(&self, lines: &[&str], start: usize, out: &mut Vec<Block>) -> usize {
        let title = Directive::parse(lines[start]).map_or("", |(_, t)| t).to_string();
        let mut description = None;
        let mut cta_button = None;
        let mut i = start + 1;

        while i < lines.len() && i <= start + 2 {
            let line = lines[i];
            if !BlockQuote::is_quote(line) || Directive::is_directive(line) {
                break;
            }
            let text = BlockQuote::strip_one(line).trim();
            match button(text) {
                Some((label, href)) if cta_button.is_none() => {
                    cta_button = Some(CtaButton {
                        label: label.to_string(),
                        href: safe_url(href),
                    });
                }
                _ if description.is_none() && cta_button.is_none() => {
                    description = Some(self.inline(text));
                }
                _ => break,
            }
            i += 1;
        }

        out.push(Block::Custom(CustomBlock::Cta {
            title,
            description,
            button: cta_button,
        }));
        i
    }

    fn definition_list(&self, lines: &[&str], start: usize, out: &mut Vec<Block>) -> usize {
        let mut entries = vec![];
        let mut i = start;

        loop {
            let term = self.inline(lines[i].trim());
            i += 1;
            let mut definitions = vec![];
            while let Some(text) = lines.get(i).and_then(|l| DefinitionList::definition(l)) {
                definitions.push(self.inline(text));
                i += 1;
            }
            entries.push(Definition { term, definitions });

            // Blank lines between entries keep the list open.
            let next = i + lines[i..].iter().take_while(|l| l.trim().is_empty()).count();
            if !DefinitionList::starts_at(lines, next) {
                break;
            }
            i = next;
        }

        out.push(Block::DefinitionList(entries));
        i
    }

    /// Joins consecutive lines that open no other construct into one paragraph.
    fn paragraph(&self, lines: &[&str], start: usize, out: &mut Vec<Block>) -> usize {
        let mut parts = vec![lines[start].trim()];
        let mut i = start + 1;
        while i < lines.len()
            && self.classifier.classify(lines[i]) == LineClass::Text
            && !DefinitionList::starts_at(lines, i)
        {
            parts.push(lines[i].trim());
            i += 1;
        }
        out.push(Block::Paragraph(self.inline(&parts.join(" "))));
        i
    }

    /// Inline-parses `text`, turning references to defined footnotes into
    /// markers. Undefined references stay literal.
    fn inline(&self, text: &str) -> Vec<Inline> {
        if self.footnotes.is_empty() {
            return parse_inline(text);
        }

        let mut out = vec![];
        let mut last = 0;
        for caps in REFERENCE.captures_iter(text) {
            let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(number) = self.footnotes.number(id.as_str()) else {
                continue;
            };
            out.extend(parse_inline(&text[last..whole.start()]));
            out.push(Inline::FootnoteRef {
                id: id.as_str().to_string(),
                number,
            });
            last = whole.end();
        }
        out.extend(parse_inline(&text[last..]));
        out
    }
}

/// Footnote section for the end of a document.
pub fn footnote_section(table: &FootnoteTable) -> Option<Block> {
    if table.is_empty() {
        return None;
    }
    let notes = table
        .iter()
        .map(|(number, id, text)| Footnote {
            id: id.to_string(),
            number,
            content: parse_inline(text),
        })
        .collect();
    Some(Block::Footnotes(notes))
}
