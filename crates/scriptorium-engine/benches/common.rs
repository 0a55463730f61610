// Shared generators; each bench file only uses some of them.
#![allow(dead_code)]

pub fn generate_post(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and a [link](/about).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> BREAKOUT: Pull quote\n\n| A | B |\n|:--|--:|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

pub fn generate_sectioned_page(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!("{header_prefix} Subsection Level {current_level}\n\n"));
    content.push_str("Some paragraph content with ==highlighted== and ~~struck~~ text. Footnoted too[^1].\n\n");

    for i in 0..3 {
        let indent = "  ".repeat((current_level - 2).min(3));
        content.push_str(&format!("{indent}- [ ] Item {i} at level {current_level}\n"));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("> Quoted\n> > Deeper quote with `code`\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content.push_str("[^1]: The footnote.\n");
    content
}

pub fn generate_document_with_frontmatter(size: usize) -> String {
    format!(
        "---\ntitle: Benchmark\ntags: [a, b, \"c, d\"]\ndraft: false\n---\n{}",
        generate_post(size)
    )
}
