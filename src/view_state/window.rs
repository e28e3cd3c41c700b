//! Windowing engine: scroll offset to materialized item range.
//!
//! Given the item count, a fixed per-item extent, the viewport extent, an
//! overscan margin and the current scroll offset, computes the contiguous
//! block of items that must be drawn and the offset at which that block sits
//! inside a spacer of the full content length.
//!
//! Everything here is pure and O(1) in the item count, so it is safe to call
//! on every scroll event.

use super::types::{non_negative, ItemExtent, WindowError};
use super::visible_range::VisibleWindow;

/// Overscan used when none is configured.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Clamp a signed overscan to a count. Negative values become 0.
pub fn clamp_overscan(overscan: i64) -> usize {
    usize::try_from(overscan).unwrap_or(0)
}

/// Fixed-extent list geometry.
///
/// # Invariants
/// - `item_extent` is finite and > 0 (enforced by [`ItemExtent`])
/// - `viewport_extent` is finite-or-infinite but never negative or NaN
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    item_extent: ItemExtent,
    viewport_extent: f64,
    overscan: usize,
}

impl Geometry {
    /// Create validated geometry.
    ///
    /// Fails fast on a non-positive item extent. A negative or NaN viewport
    /// extent (e.g. a stale read mid-resize) is treated as 0.
    pub fn new(item_extent: f64, viewport_extent: f64, overscan: usize) -> Result<Self, WindowError> {
        Ok(Self {
            item_extent: ItemExtent::new(item_extent)?,
            viewport_extent: non_negative(viewport_extent),
            overscan,
        })
    }

    /// Extent of one item.
    pub fn item_extent(&self) -> f64 {
        self.item_extent.get()
    }

    /// Extent of the viewport.
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Extra items materialized on each side of the visible range.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Replace the item extent, validating it.
    pub fn with_item_extent(self, item_extent: f64) -> Result<Self, WindowError> {
        Ok(Self {
            item_extent: ItemExtent::new(item_extent)?,
            ..self
        })
    }

    /// Replace the viewport extent.
    pub fn with_viewport_extent(self, viewport_extent: f64) -> Self {
        Self {
            viewport_extent: non_negative(viewport_extent),
            ..self
        }
    }

    /// Replace the overscan.
    pub fn with_overscan(self, overscan: usize) -> Self {
        Self { overscan, ..self }
    }

    /// Whole items needed to fill the viewport.
    ///
    /// Rounds up: a viewport that ends mid-item still needs that trailing
    /// partial item drawn.
    pub fn visible_count(&self) -> usize {
        // `as` saturates, so an infinite viewport yields usize::MAX.
        (self.viewport_extent / self.item_extent()).ceil() as usize
    }

    /// Full logical length of `item_count` items.
    pub fn total_extent(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_extent()
    }

    /// Largest legal scroll offset: `max(0, total - viewport)`.
    pub fn max_scroll(&self, item_count: usize) -> f64 {
        (self.total_extent(item_count) - self.viewport_extent).max(0.0)
    }

    /// Clamp a host-reported offset into `[0, max_scroll]`.
    ///
    /// Overscroll bounce and stale reads during resize land here; NaN is
    /// treated as the top.
    pub fn clamp_offset(&self, item_count: usize, scroll_offset: f64) -> f64 {
        non_negative(scroll_offset).min(self.max_scroll(item_count))
    }

    /// Compute the window for `item_count` items at `scroll_offset`.
    pub fn window(&self, item_count: usize, scroll_offset: f64) -> VisibleWindow {
        if item_count == 0 {
            return VisibleWindow::EMPTY;
        }

        let extent = self.item_extent();
        let last = item_count - 1;
        let offset = self.clamp_offset(item_count, scroll_offset);

        let raw_start = (offset / extent).floor() as usize;
        let start = raw_start.saturating_sub(self.overscan).min(last);
        let end_inclusive = raw_start
            .saturating_add(self.visible_count())
            .saturating_add(self.overscan)
            .min(last);

        VisibleWindow::new(
            start,
            end_inclusive + 1,
            start as f64 * extent,
            self.total_extent(item_count),
        )
    }
}

/// Compute the materialized window for one scroll snapshot.
///
/// * `item_count` - number of items in the host list
/// * `item_extent` - extent of every item; must be finite and > 0
/// * `viewport_extent` - extent of the viewport; negative is treated as 0
/// * `overscan` - extra items on each side; negative is treated as 0
/// * `scroll_offset` - current offset; clamped into `[0, max_scroll]`
///
/// # Errors
/// Returns [`WindowError::InvalidItemExtent`] when `item_extent <= 0` or is
/// not finite. All other out-of-range inputs are clamped.
pub fn compute_window(
    item_count: usize,
    item_extent: f64,
    viewport_extent: f64,
    overscan: i64,
    scroll_offset: f64,
) -> Result<VisibleWindow, WindowError> {
    let geometry = Geometry::new(item_extent, viewport_extent, clamp_overscan(overscan))?;
    Ok(geometry.window(item_count, scroll_offset))
}
