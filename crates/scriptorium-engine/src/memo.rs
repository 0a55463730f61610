//! # Content-hash memoisation
//!
//! A cheap rolling hash over document text and a small bounded cache keyed by
//! it. Both the frontmatter parser and the block renderer sit behind one of
//! these so identical content is never re-parsed on a presentation re-render.
//!
//! The hash is a 32-bit polynomial (multiplier 31, wrapping) over UTF-16 code
//! units. It is not cryptographic: a collision yields a stale render, which is
//! an accepted risk. Keys also carry the byte length to make that rarer.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Computes the 32-bit rolling hash of `s`.
pub fn content_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32)
    })
}

/// Memoisation key: rolling hash plus byte length of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub hash: i32,
    pub len: usize,
}

impl ContentKey {
    pub fn of(s: &str) -> Self {
        Self {
            hash: content_hash(s),
            len: s.len(),
        }
    }
}

#[derive(Debug)]
struct Entries<V> {
    map: HashMap<ContentKey, V>,
    order: VecDeque<ContentKey>,
}

/// Bounded best-effort cache with oldest-first eviction.
///
/// A capacity of zero disables caching entirely. The cache is shared between
/// concurrent render passes; a poisoned lock is recovered rather than
/// propagated since losing entries is harmless.
#[derive(Debug)]
pub struct MemoCache<V> {
    capacity: usize,
    entries: Mutex<Entries<V>>,
}

impl<V: Clone> MemoCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &ContentKey) -> Option<V> {
        if self.capacity == 0 {
            return None;
        }
        let entries = self.lock();
        entries.map.get(key).cloned()
    }

    pub fn insert(&self, key: ContentKey, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if entries.map.insert(key, value).is_some() {
            return;
        }
        entries.order.push_back(key);
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.map.remove(&oldest);
            }
        }
    }

    /// Returns the cached value for `content`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, content: &str, compute: impl FnOnce() -> V) -> V {
        let key = ContentKey::of(content);
        if let Some(hit) = self.get(&key) {
            log::trace!("memo hit for {key:?}");
            return hit;
        }
        log::trace!("memo miss for {key:?}");
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.map.clear();
        entries.order.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries<V>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
