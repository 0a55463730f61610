//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (prefixes, fences, blank status).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the lines with
//!    a cursor, consuming runs of lines per block. Footnote definitions are
//!    collected before this pass so forward references resolve.
//!
//! ## Modules
//!
//! - **`types`**: The block tree (`Block`, `List`, `Table`, `CustomBlock`, ...)
//! - **`kinds`**: Block-specific recognisers that own their syntax
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder`, the construction pass
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - List nesting is resolved with an explicit stack; quote nesting is capped
//!   at `BlockQuote::MAX_DEPTH`
//! - Every href and image src in the tree has been through the sanitiser

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{
    Alignment, Block, CtaButton, CustomBlock, Definition, Footnote, List, ListItem, ListMarker,
    Table, TableCell, TableRow, TaskState,
};

use kinds::FootnoteTable;

/// Parses a markdown body (frontmatter already removed) into blocks.
///
/// A `Footnotes` block is appended when the body defines any footnotes.
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let lines: Vec<&str> = body.lines().collect();
    let footnotes = FootnoteTable::collect(&lines);

    let mut blocks = BlockBuilder::new(&footnotes).build(&lines);
    if let Some(section) = builder::footnote_section(&footnotes) {
        blocks.push(section);
    }
    log::debug!(
        "parsed {} lines into {} blocks ({} footnotes)",
        lines.len(),
        blocks.len(),
        footnotes.len()
    );
    blocks
}
