//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with JSON format for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, Inline,
    blocks::{CustomBlock, kinds::BlockQuote},
    parse_blocks,
};

#[rstest]
#[case("headings_and_paragraphs")]
#[case("nested_lists")]
#[case("quotes_and_directives")]
#[case("tables_and_definitions")]
#[case("footnotes")]
#[case("code_fences")]
fn fixture_snapshot(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = parse_blocks(&md);
    invariants::check(&blocks);

    let snap = normalize::normalize(&blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_json_snapshot!(name, snap);
    });
}

// Invariant tests

#[test]
fn empty_body_yields_no_blocks() {
    assert!(parse_blocks("").is_empty());
    assert!(parse_blocks("\n\n   \n").is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let md = "# T\n\n- a\n  - b\n\n> q\n\n| x |\n|---|\n| y |\n";
    assert_eq!(parse_blocks(md), parse_blocks(md));
}

#[test]
fn quote_nesting_is_capped() {
    let md = format!("{} deep", "> ".repeat(40));
    let blocks = parse_blocks(&md);
    invariants::check(&blocks);

    let mut depth = 0;
    let mut current = &blocks;
    while let Some(Block::Blockquote { depth: d, children }) = current.first() {
        depth = *d;
        current = children;
    }
    assert_eq!(depth, BlockQuote::MAX_DEPTH);
    match current.first() {
        Some(Block::Paragraph(nodes)) => {
            assert!(Inline::plain_text(nodes).ends_with("deep"));
        }
        other => panic!("expected paragraph at the cap, got {other:?}"),
    }
}

#[test]
fn heading_prefixes_resolve_longest_first() {
    let blocks = parse_blocks("### Three\n# One");
    let levels: Vec<u8> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![3, 1]);
}

#[test]
fn directive_wins_over_plain_quote() {
    let blocks = parse_blocks("> CTA: Only a title");
    assert_eq!(
        blocks,
        vec![Block::Custom(CustomBlock::Cta {
            title: "Only a title".to_string(),
            description: None,
            button: None,
        })]
    );
}

#[test]
fn cta_button_href_is_sanitised() {
    let blocks = parse_blocks("> CTA: Go\n> [Click](javascript:void)");
    match &blocks[0] {
        Block::Custom(CustomBlock::Cta {
            button: Some(button),
            ..
        }) => assert_eq!(button.href, "#"),
        other => panic!("expected CTA with button, got {other:?}"),
    }
}

#[test]
fn footnote_definitions_inside_quotes_are_text() {
    let blocks = parse_blocks("> [^x]: quoted\n");
    match &blocks[..] {
        [Block::Blockquote { children, .. }] => {
            assert_eq!(
                normalize::outline(children),
                "p [^x]: quoted\n".to_string()
            );
        }
        other => panic!("expected a single quote, got {other:?}"),
    }
}

#[test]
fn table_without_separator_has_no_header() {
    let blocks = parse_blocks("| a | b |\n| c | d |");
    match &blocks[0] {
        Block::Table(table) => {
            assert!(table.header.is_empty());
            assert_eq!(table.rows.len(), 2);
            assert_eq!(table.column_count(), 2);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn footnotes_after_unterminated_fence_keep_their_text() {
    let blocks = parse_blocks("```\nClaim [^1] here\n\n[^1]: The source.\n");
    invariants::check(&blocks);

    assert_eq!(
        normalize::outline(&blocks),
        "p ```\np Claim ^1 here\nfootnotes\n  note 1. 1 The source.\n"
    );
}

#[test]
fn table_directly_inside_quote() {
    let blocks = parse_blocks("> | A | B |\n> |:-:|--:|\n> | 1 | 2 |");
    invariants::check(&blocks);

    assert_eq!(
        normalize::outline(&blocks),
        "quote(1)\n  table(CR)\n    th A | B\n    td 1 | 2\n"
    );
}

#[test]
fn text_without_markup_is_preserved() {
    let md = "Plain words with (parens) and 50% off!";
    let blocks = parse_blocks(md);
    assert_eq!(normalize::outline(&blocks), format!("p {md}\n"));
}
