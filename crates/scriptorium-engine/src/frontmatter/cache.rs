use crate::memo::MemoCache;

use super::{ParsedDocument, parse};

/// Default number of parsed documents kept.
pub const DEFAULT_CAPACITY: usize = 100;

/// Content-hash keyed cache in front of [`parse`].
///
/// Purely a speed-up: with capacity zero, or after [`FrontmatterCache::clear`],
/// results are identical.
#[derive(Debug)]
pub struct FrontmatterCache {
    entries: MemoCache<ParsedDocument>,
}

impl FrontmatterCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: MemoCache::new(capacity),
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn parse(&self, document: &str) -> ParsedDocument {
        self.entries.get_or_insert_with(document, || parse(document))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        log::debug!("clearing frontmatter cache ({} entries)", self.len());
        self.entries.clear();
    }
}

impl Default for FrontmatterCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
