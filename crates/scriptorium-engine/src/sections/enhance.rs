use crate::parsing::{
    Block, Inline,
    blocks::{CtaButton, CustomBlock, kinds::Heading, parse_blocks},
    inline::parse_inline,
};

use super::{EnhancementConfig, Layout, Section, SectionRule, group_sections};

/// One child section of a card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: Vec<Inline>,
    pub icon: Option<String>,
    pub blocks: Vec<Block>,
}

/// A composed part of an enhanced page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSection {
    /// Content before the first section heading.
    Preamble(Vec<Block>),
    /// No rule matched: the heading and its content as ordinary blocks.
    Default {
        heading: Block,
        blocks: Vec<Block>,
        children: Vec<PageSection>,
    },
    Hero {
        title: Vec<Inline>,
        blocks: Vec<Block>,
        background: Option<String>,
    },
    CardGrid {
        heading: Block,
        intro: Vec<Block>,
        columns: u8,
        cards: Vec<Card>,
    },
    CtaSection {
        heading: Block,
        blocks: Vec<Block>,
        background: Option<String>,
    },
    /// Always a [`CustomBlock::CtaBanner`].
    CtaBanner(CustomBlock),
}

/// Groups `body` into sections and applies the matching layout rules.
pub fn enhance_page(body: &str, config: &EnhancementConfig) -> Vec<PageSection> {
    let tree = group_sections(body);
    let mut out = vec![];

    if !tree.preamble.trim().is_empty() {
        out.push(PageSection::Preamble(parse_blocks(&tree.preamble)));
    }
    out.extend(tree.sections.iter().map(|s| enhance_section(s, config)));

    log::debug!(
        "enhanced page into {} sections ({} rules configured)",
        out.len(),
        config.sections.len()
    );
    out
}

fn enhance_section(section: &Section, config: &EnhancementConfig) -> PageSection {
    let Some(rule) = config.rule_for(section) else {
        return default_section(section, config);
    };
    log::trace!("section {:?} uses layout {:?}", section.key(), rule.layout);

    match rule.layout {
        Layout::Default => default_section(section, config),
        Layout::Hero => PageSection::Hero {
            title: parse_inline(&section.heading),
            blocks: parse_with_children(section),
            background: rule.background.clone(),
        },
        Layout::CardGrid => card_grid(section, rule),
        Layout::CtaSection => PageSection::CtaSection {
            heading: heading_block(section),
            blocks: parse_with_children(section),
            background: rule.background.clone(),
        },
        Layout::CtaBanner => cta_banner(section, rule),
    }
}

fn default_section(section: &Section, config: &EnhancementConfig) -> PageSection {
    PageSection::Default {
        heading: heading_block(section),
        blocks: parse_blocks(&section.content),
        children: section
            .children
            .iter()
            .map(|child| enhance_section(child, config))
            .collect(),
    }
}

fn card_grid(section: &Section, rule: &SectionRule) -> PageSection {
    let cards = section
        .children
        .iter()
        .map(|child| Card {
            title: parse_inline(&child.heading),
            icon: rule.icons.get(&child.heading).cloned(),
            blocks: parse_with_children(child),
        })
        .collect();

    PageSection::CardGrid {
        heading: heading_block(section),
        intro: parse_blocks(&section.content),
        columns: rule.columns(),
        cards,
    }
}

/// The first paragraph becomes the description and the first paragraph that
/// is only a link becomes the button.
fn cta_banner(section: &Section, rule: &SectionRule) -> PageSection {
    let mut description = None;
    let mut button = None;

    for block in parse_with_children(section) {
        let Block::Paragraph(nodes) = block else {
            continue;
        };
        match nodes.as_slice() {
            [Inline::Link { href, children, .. }] if button.is_none() => {
                button = Some(CtaButton {
                    label: Inline::plain_text(children),
                    href: href.clone(),
                });
            }
            _ if description.is_none() => description = Some(nodes),
            _ => {}
        }
    }

    PageSection::CtaBanner(CustomBlock::CtaBanner {
        title: section.heading.clone(),
        description,
        button,
        background: rule.background.clone(),
    })
}

fn heading_block(section: &Section) -> Block {
    let children = parse_inline(&section.heading);
    Block::Heading {
        level: section.level,
        anchor: Heading::slug(&Inline::plain_text(&children)),
        children,
    }
}

/// A section's own content and all of its descendants, re-assembled as
/// markdown and parsed as one body.
fn parse_with_children(section: &Section) -> Vec<Block> {
    let mut source = section.content.clone();
    append_children(section, &mut source);
    parse_blocks(&source)
}

fn append_children(section: &Section, out: &mut String) {
    for child in &section.children {
        out.push_str(&child.key());
        out.push('\n');
        out.push_str(&child.content);
        append_children(child, out);
    }
}
