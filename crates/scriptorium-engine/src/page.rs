//! # Page pipeline
//!
//! [`Renderer`] ties the stages together: frontmatter split, block parsing and
//! presentation, with both parse stages memoised by content hash. It holds no
//! other state, so one renderer can serve every document of a site.

use std::sync::Arc;

use crate::frontmatter::{Frontmatter, FrontmatterCache, cache};
use crate::memo::MemoCache;
use crate::parsing::{Block, Inline, parse_blocks};
use crate::presentation::Variant;
use crate::sections::{EnhancementConfig, enhance_page};

/// Default number of parsed bodies kept.
pub const DEFAULT_BLOCK_CACHE_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub variant: Variant,
    pub frontmatter_cache_capacity: usize,
    pub block_cache_capacity: usize,
    /// With caching off every call re-parses; output is identical either way.
    pub caching: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            frontmatter_cache_capacity: cache::DEFAULT_CAPACITY,
            block_cache_capacity: DEFAULT_BLOCK_CACHE_CAPACITY,
            caching: true,
        }
    }
}

impl RenderOptions {
    pub fn with_variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }

    pub fn uncached(self) -> Self {
        Self {
            caching: false,
            ..self
        }
    }
}

/// One document after the parse stages.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub frontmatter: Frontmatter,
    pub body: String,
    pub blocks: Arc<Vec<Block>>,
}

impl RenderedPage {
    /// Frontmatter title, falling back to the first top-level heading.
    pub fn title(&self) -> Option<String> {
        if let Some(title) = self.frontmatter.title() {
            return Some(title.to_string());
        }
        self.blocks.iter().find_map(|block| match block {
            Block::Heading {
                level: 1, children, ..
            } => Some(Inline::plain_text(children)),
            _ => None,
        })
    }
}

#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    frontmatter: FrontmatterCache,
    blocks: MemoCache<Arc<Vec<Block>>>,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        let (fm_capacity, block_capacity) = if options.caching {
            (
                options.frontmatter_cache_capacity,
                options.block_cache_capacity,
            )
        } else {
            (0, 0)
        };
        log::debug!(
            "renderer: variant {:?}, frontmatter cache {fm_capacity}, block cache {block_capacity}",
            options.variant
        );
        Self {
            options,
            frontmatter: FrontmatterCache::new(fm_capacity),
            blocks: MemoCache::new(block_capacity),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn variant(&self) -> Variant {
        self.options.variant
    }

    /// Splits off the frontmatter and parses the body.
    pub fn render_document(&self, raw: &str) -> RenderedPage {
        let parsed = self.frontmatter.parse(raw);
        let blocks = self.render_body(&parsed.body);
        RenderedPage {
            frontmatter: parsed.frontmatter,
            body: parsed.body,
            blocks,
        }
    }

    /// Block tree of a body without frontmatter, memoised by content.
    pub fn render_body(&self, body: &str) -> Arc<Vec<Block>> {
        self.blocks
            .get_or_insert_with(body, || Arc::new(parse_blocks(body)))
    }

    /// HTML for a full document in this renderer's variant.
    pub fn render_html(&self, raw: &str) -> String {
        let page = self.render_document(raw);
        self.options.variant.render_html(&page.blocks)
    }

    /// HTML for a full document with section layouts applied to its body.
    /// An empty config renders exactly like [`Renderer::render_html`].
    pub fn render_page_html(&self, raw: &str, config: &EnhancementConfig) -> String {
        if config.is_empty() {
            return self.render_html(raw);
        }
        let parsed = self.frontmatter.parse(raw);
        let sections = enhance_page(&parsed.body, config);
        self.options.variant.render_page_html(&sections)
    }

    pub fn clear_caches(&self) {
        self.frontmatter.clear();
        self.blocks.clear();
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
