use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use rstest::rstest;
use scriptorium_engine::{
    Block, EnhancementConfig, Inline, RenderOptions, Renderer, Variant,
    frontmatter::{self, Frontmatter, FrontmatterValue},
    parse_blocks, parse_inline,
    parsing::blocks::{Alignment, CustomBlock},
    sanitize_url,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

#[test]
fn frontmatter_round_trips_quoted_values() {
    let fm: Frontmatter = [("meta_description", "A: \"B\"")].into_iter().collect();

    let serialized = frontmatter::serialize(&fm);
    assert!(serialized.contains(r#""A: \"B\"""#), "{serialized}");
    assert_eq!(frontmatter::parse(&serialized).frontmatter, fm);
}

#[test]
fn frontmatter_round_trips_multiline_and_lists() {
    let mut fm = Frontmatter::new();
    fm.insert("summary", "Line1\nLine2");
    fm.insert("secondary_keywords", vec!["alpha", "two, three", "x:y"]);
    fm.insert("draft", true);
    fm.insert("order", 3.0);

    let document = frontmatter::serialize_document(&fm, "Body\n");
    let parsed = frontmatter::parse(&document);

    assert_eq!(parsed.frontmatter, fm);
    assert_eq!(parsed.body, "Body\n");
}

#[test]
fn headerless_document_takes_title_from_heading() {
    let raw = "# My Title\n\nSome text.\n";
    let page = Renderer::default().render_document(raw);

    assert_eq!(page.frontmatter.title(), Some("My Title"));
    assert_eq!(page.body, raw);
}

#[rstest]
#[case("javascript:alert(1)")]
#[case("  JaVaScRiPt:alert(1)")]
#[case("data:text/html,<script>")]
#[case("java%73cript:alert(1)")]
fn script_urls_are_rejected(#[case] input: &str) {
    let result = sanitize_url(Some(input));
    assert!(!result.is_safe);
    assert_eq!(result.url, "#");
}

#[rstest]
#[case("/about")]
#[case("https://example.com")]
#[case("mailto:a@b.com")]
#[case("#section")]
#[case("data:image/png;base64,AAAA")]
fn ordinary_urls_are_kept(#[case] input: &str) {
    let result = sanitize_url(Some(input));
    assert!(result.is_safe);
    assert_eq!(result.url, input);
}

#[test]
fn nested_emphasis_parses_as_a_tree() {
    assert_eq!(
        parse_inline("**bold _and italic_ text**"),
        vec![Inline::Bold(vec![
            text("bold "),
            Inline::Italic(vec![text("and italic")]),
            text(" text"),
        ])]
    );
}

#[test]
fn list_nesting_follows_indentation() {
    let blocks = parse_blocks("- A\n  - A1\n  - A2\n- B");
    let [Block::List(list)] = blocks.as_slice() else {
        panic!("expected a single list, got {blocks:?}");
    };

    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].children.len(), 2);
    assert!(list.items[1].children.is_empty());
}

#[test]
fn table_keeps_header_and_alignment() {
    let blocks = parse_blocks("| A | B |\n|:--|--:|\n| 1 | 2 |");
    let [Block::Table(table)] = blocks.as_slice() else {
        panic!("expected a table, got {blocks:?}");
    };

    let raw = |row: &[scriptorium_engine::parsing::blocks::TableCell]| {
        row.iter().map(|c| c.raw.clone()).collect::<Vec<_>>()
    };
    assert_eq!(
        table.header.iter().map(|row| raw(row)).collect::<Vec<_>>(),
        vec![vec!["A".to_string(), "B".to_string()]]
    );
    assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(raw(&table.rows[0]), vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn rendering_is_idempotent_with_and_without_cache() {
    let raw = fixture("post.md");
    let cached = Renderer::default();
    let uncached = Renderer::new(RenderOptions::default().uncached());

    let first = cached.render_document(&raw);
    let second = cached.render_document(&raw);
    assert_eq!(first, second);
    assert_eq!(*first.blocks, *uncached.render_document(&raw).blocks);
    assert_eq!(*first.blocks, parse_blocks(&first.body));
}

#[test]
fn post_fixture_frontmatter() {
    let page = Renderer::default().render_document(&fixture("post.md"));
    let fm = &page.frontmatter;

    assert_eq!(fm.title(), Some("Shipping the new editor"));
    assert_eq!(fm.slug(), Some("new-editor"));
    assert_eq!(fm.date(), Some("2026-03-14"));
    assert_eq!(fm.tags(), vec!["release".to_string(), "editor".to_string()]);
    assert!(!fm.is_draft());
    assert_eq!(
        fm.get("meta_description"),
        Some(&FrontmatterValue::String("Editor: faster \"previews\"".to_string()))
    );
    assert!(page.body.starts_with("# Shipping the new editor\n"));
}

#[test]
fn post_fixture_block_structure() {
    let page = Renderer::default().render_document(&fixture("post.md"));
    let kinds: Vec<&str> = page
        .blocks
        .iter()
        .map(|block| match block {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::CodeBlock { .. } => "code",
            Block::List(_) => "list",
            Block::Blockquote { .. } => "quote",
            Block::Table(_) => "table",
            Block::HorizontalRule => "rule",
            Block::Image { .. } => "image",
            Block::DefinitionList(_) => "definitions",
            Block::Custom(CustomBlock::Breakout { .. }) => "breakout",
            Block::Custom(CustomBlock::Cta { .. }) => "cta",
            Block::Custom(CustomBlock::CtaBanner { .. }) => "banner",
            Block::Footnotes(_) => "footnotes",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "list",
            "breakout",
            "table",
            "paragraph",
            "image",
            "cta",
            "footnotes",
        ]
    );

    let Block::Image { src, caption, .. } = &page.blocks[7] else {
        unreachable!();
    };
    assert_eq!(src, "#");
    assert_eq!(caption.as_deref(), Some("Diagram of the pipeline"));

    let Block::Custom(CustomBlock::Cta { title, button, .. }) = &page.blocks[8] else {
        unreachable!();
    };
    assert_eq!(title, "Try it today");
    assert_eq!(button.as_ref().map(|b| b.href.as_str()), Some("/admin/editor"));
}

#[rstest]
#[case(Variant::Public, "post")]
#[case(Variant::Editor, "preview")]
fn post_fixture_html_is_safe(#[case] variant: Variant, #[case] prefix: &str) {
    let html = Renderer::new(RenderOptions::default().with_variant(variant))
        .render_html(&fixture("post.md"));

    assert!(!html.contains("javascript:"), "{html}");
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains(&format!("<h1 id=\"shipping-the-new-editor\" class=\"{prefix}-heading {prefix}-h1\">")));
    assert!(html.contains("href=\"/roadmap\" title=\"Roadmap\""), "{html}");
    assert!(html.contains("<a href=\"#fn-1\">1</a>"), "{html}");
    assert!(html.contains("<li id=\"fn-1\">Measured on a 2,000 word post.</li>"), "{html}");
}

#[test]
fn landing_page_uses_configured_layouts() {
    let config: EnhancementConfig = toml::from_str(&fixture("landing.toml")).unwrap();
    let html = Renderer::default().render_page_html(&fixture("landing.md"), &config);

    assert!(html.starts_with("<section class=\"post-section\">\n<h1 id=\"acme\""), "{html}");
    assert!(html.contains("<section class=\"post-card-grid\">"), "{html}");
    assert_eq!(html.matches("class=\"post-card post-card-of-2\"").count(), 2);
    assert!(html.contains("data-icon=\"pencil\""), "{html}");
    assert!(html.contains("data-icon=\"hammer\""), "{html}");
    assert!(
        html.contains("<section class=\"post-cta-banner\" data-background=\"accent\">"),
        "{html}"
    );
    assert!(
        html.contains("href=\"https://example.com/subscribe\">Subscribe</a>"),
        "{html}"
    );
}

#[test]
fn renderer_is_shared_across_threads() {
    let renderer = Arc::new(Renderer::default());
    let raw = Arc::new(fixture("post.md"));
    let expected = renderer.render_html(&raw);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = Arc::clone(&renderer);
            let raw = Arc::clone(&raw);
            thread::spawn(move || renderer.render_html(&raw))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
