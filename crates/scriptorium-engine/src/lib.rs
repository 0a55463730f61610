//! # scriptorium-engine
//!
//! Markdown rendering core: a document goes through the frontmatter split,
//! block and inline parsing (every URL sanitised on the way), and finally a
//! presentation variant. [`Renderer`] runs the whole pipeline with content-hash
//! memoisation in front of both parse stages.
//!
//! The core is pure and synchronous. [`io`] is the only module that touches
//! the filesystem, and nothing in the pipeline depends on it.

pub mod frontmatter;
pub mod io;
pub mod memo;
pub mod models;
pub mod page;
pub mod parsing;
pub mod presentation;
pub mod sanitize;
pub mod sections;

pub use frontmatter::{Frontmatter, FrontmatterValue, ParsedDocument};
pub use io::{IoError, read_file, scan_markdown_files, validate_content_dir};
pub use models::{ContentKind, MarkdownFile};
pub use page::{RenderOptions, RenderedPage, Renderer};
pub use parsing::{Block, Inline, parse_blocks, parse_inline};
pub use presentation::{HtmlRenderer, Variant};
pub use sanitize::{SanitizedUrl, safe_image_src, safe_url, sanitize_url};
pub use sections::{EnhancementConfig, PageSection, enhance_page};
