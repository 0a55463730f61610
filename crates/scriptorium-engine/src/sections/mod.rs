//! # Enhanced Pages
//!
//! Page composition on top of the block parser. A body is grouped into a
//! tree of sections by its H1–H3 headings, and each section is matched by
//! heading text against an [`EnhancementConfig`] that picks a layout (hero,
//! card grid, call to action). Sections without a rule render as ordinary
//! blocks.
//!
//! ## Modules
//!
//! - **`tree`**: `group_sections()` builds the `SectionTree`
//! - **`config`**: serde-loadable `EnhancementConfig` and `SectionRule`
//! - **`enhance`**: `enhance_page()` turns sections into `PageSection`s

pub mod config;
pub mod enhance;
pub mod tree;

pub use config::{EnhancementConfig, Layout, SectionRule};
pub use enhance::{Card, PageSection, enhance_page};
pub use tree::{Section, SectionTree, group_sections};
