//! LRU cache of rendered rows keyed by stable item id.
//!
//! The terminal redraws every frame, but building styled lines per item is
//! not free. Rows are cached by [`ItemId`], never by position, so inserting
//! or removing items above the window reuses every surviving row.
//!
//! Capacity follows the window: a few windows' worth of rows are retained,
//! so scrolling back a little reuses rows instead of re-rendering them,
//! while memory stays bounded by the viewport rather than the list length.

use crate::model::ItemId;
use lru::LruCache;
use ratatui::text::Line;
use std::num::NonZeroUsize;

/// Windows' worth of rows kept before the least recently used are evicted.
pub const RETAINED_WINDOWS: usize = 4;

/// Cache of rendered rows for one list.
#[derive(Debug)]
pub struct RowCache {
    rows: LruCache<ItemId, Vec<Line<'static>>>,
    width: u16,
}

impl RowCache {
    /// Create an empty cache holding a single row until sized to a window.
    pub fn new() -> Self {
        Self {
            rows: LruCache::new(NonZeroUsize::MIN),
            width: 0,
        }
    }

    /// Drop every row if the render width changed.
    pub fn set_width(&mut self, width: u16) {
        if width != self.width {
            self.rows.clear();
            self.width = width;
        }
    }

    /// Size the cache for a window of `window_len` items.
    ///
    /// Shrinking evicts the least recently used rows.
    pub fn fit_window(&mut self, window_len: usize) {
        let capacity = NonZeroUsize::new(window_len.saturating_mul(RETAINED_WINDOWS))
            .unwrap_or(NonZeroUsize::MIN);
        if capacity != self.rows.cap() {
            self.rows.resize(capacity);
        }
    }

    /// Maximum number of cached items.
    pub fn capacity(&self) -> usize {
        self.rows.cap().get()
    }

    /// Cached rows for `id`, rendering and storing them on a miss.
    ///
    /// Marks `id` as most recently used.
    pub fn get_or_render<F>(&mut self, id: ItemId, render: F) -> &[Line<'static>]
    where
        F: FnOnce() -> Vec<Line<'static>>,
    {
        self.rows.get_or_insert(id, render)
    }

    /// Cached rows for `id`, if present. Does not touch the LRU order.
    pub fn get(&self, id: &ItemId) -> Option<&[Line<'static>]> {
        self.rows.peek(id).map(Vec::as_slice)
    }

    /// Check whether `id` is cached.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.rows.contains(id)
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for RowCache {
    fn default() -> Self {
        Self::new()
    }
}
