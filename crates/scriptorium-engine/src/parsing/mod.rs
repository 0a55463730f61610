//! # Parsing
//!
//! Markdown body text to a presentation-agnostic block tree.
//!
//! ## Modules
//!
//! - **`blocks`**: line classification and block construction
//! - **`inline`**: span-level constructs inside paragraphs, headings, list
//!   items and table cells
//!
//! Parsing never fails: anything that does not form a construct is kept as
//! text, and every URL has been sanitised by the time it is in the tree.

pub mod blocks;
pub mod inline;

pub use blocks::{Block, parse_blocks};
pub use inline::{Inline, parse_inline};

#[cfg(test)]
mod tests;
