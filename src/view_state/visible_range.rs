//! Visible window calculation result

use std::ops::Range;

/// Contiguous block of items that must be materialized for the current
/// scroll position.
///
/// Indices are into the host's item sequence. `end` is exclusive, so the
/// inclusive last index is `end - 1` and "render nothing" is simply an empty
/// range.
///
/// # Invariants
/// - `start <= end`
/// - `end <= item_count`
/// - `render_offset == start as f64 * item_extent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    /// Index of first materialized item (inclusive).
    pub start: usize,
    /// Index one past the last materialized item (exclusive).
    pub end: usize,
    /// Distance from the top of the content to the top of item `start`.
    pub render_offset: f64,
    /// Full logical length of the content (the spacer).
    pub total_extent: f64,
}

impl VisibleWindow {
    /// Window that renders nothing.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        render_offset: 0.0,
        total_extent: 0.0,
    };

    /// Create new visible window.
    ///
    /// # Panics
    /// In debug builds, panics if start > end.
    pub fn new(start: usize, end: usize, render_offset: f64, total_extent: f64) -> Self {
        debug_assert!(start <= end, "window start {start} past end {end}");
        Self {
            start,
            end,
            render_offset,
            total_extent,
        }
    }

    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window renders nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Inclusive index of the last materialized item, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Iterate over materialized item indices.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if a specific item index is materialized.
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

impl Default for VisibleWindow {
    fn default() -> Self {
        Self::EMPTY
    }
}
