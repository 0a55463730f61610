//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, list items, table cells).
//! The output is presentation-agnostic: themes are applied later by
//! [`crate::presentation`], so the public site and the editor preview share
//! one grammar.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Code, Link, emphasis kinds, FootnoteRef)
//! - **`kinds`**: the construct table, one anchored pattern per construct
//! - **`cursor`**: `Cursor` for walking the line
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans are tried first: `` `**x**` `` is a single `Code` node.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::Inline;
