//! # Block Kinds
//!
//! Block-specific recognisers that own their syntax. The classifier and the
//! builder call into these; they never hardcode a prefix or a pattern.

pub mod block_quote;
pub mod code_fence;
pub mod definition_list;
pub mod directive;
pub mod footnote;
pub mod heading;
pub mod image;
pub mod list;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use definition_list::DefinitionList;
pub use directive::Directive;
pub use footnote::FootnoteTable;
pub use heading::Heading;
pub use image::ImageLine;
pub use list::ListLine;
pub use rule::HorizontalRule;
