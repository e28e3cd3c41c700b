//! Virtual scroll controller.
//!
//! Holds the inputs of the windowing engine for one list (item count,
//! geometry, scroll offset) and recomputes the window from them on demand.
//! The window itself is never stored: every call to [`VirtualScroll::window`]
//! derives it from the current snapshot.
//!
//! Mutators re-clamp the stored offset against the new geometry and report
//! whether it moved, so hosts can skip redundant redraws.

use super::scroll::ScrollPosition;
use super::types::WindowError;
use super::visible_range::VisibleWindow;
use super::window::Geometry;
use tracing::debug;

/// Scroll state and geometry for one virtualized list.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualScroll {
    geometry: Geometry,
    item_count: usize,
    offset: f64,
}

impl VirtualScroll {
    /// Create a controller scrolled to the top.
    ///
    /// # Errors
    /// Returns [`WindowError::InvalidItemExtent`] for a non-positive extent.
    pub fn new(
        item_count: usize,
        item_extent: f64,
        viewport_extent: f64,
        overscan: usize,
    ) -> Result<Self, WindowError> {
        Ok(Self {
            geometry: Geometry::new(item_extent, viewport_extent, overscan)?,
            item_count,
            offset: 0.0,
        })
    }

    /// Current geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of items in the list.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current (clamped) scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Full content length.
    pub fn total_extent(&self) -> f64 {
        self.geometry.total_extent(self.item_count)
    }

    /// Largest legal offset.
    pub fn max_scroll(&self) -> f64 {
        self.geometry.max_scroll(self.item_count)
    }

    /// Whether the viewport shows the end of the content.
    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_scroll()
    }

    /// Recompute the materialized window for the current snapshot.
    pub fn window(&self) -> VisibleWindow {
        self.geometry.window(self.item_count, self.offset)
    }

    /// Set the scroll offset as reported by the host. Returns true if the
    /// clamped offset changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let clamped = self.geometry.clamp_offset(self.item_count, offset);
        self.replace_offset(clamped)
    }

    /// Scroll by a signed delta.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.set_scroll_offset(self.offset + delta)
    }

    /// Jump to a semantic position.
    pub fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        let offset = position.resolve(&self.geometry, self.item_count);
        self.replace_offset(offset)
    }

    /// Move the least distance that brings item `index` fully on screen.
    ///
    /// An item taller than the viewport is aligned to its top. Indices past
    /// the end clamp like any other offset.
    pub fn scroll_into_view(&mut self, index: usize) -> bool {
        let extent = self.geometry.item_extent();
        let viewport = self.geometry.viewport_extent();
        let top = index as f64 * extent;
        let bottom = top + extent;

        if top < self.offset {
            self.set_scroll_offset(top)
        } else if bottom > self.offset + viewport {
            self.set_scroll_offset((bottom - viewport).min(top))
        } else {
            false
        }
    }

    /// Scroll up by one viewport.
    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-self.page_extent())
    }

    /// Scroll down by one viewport.
    pub fn page_down(&mut self) -> bool {
        self.scroll_by(self.page_extent())
    }

    /// Update the item count after an insert/remove in the data source.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if item_count != self.item_count {
            debug!(from = self.item_count, to = item_count, "item count changed");
        }
        self.item_count = item_count;
        self.reclamp()
    }

    /// Update the viewport extent after a container resize.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) -> bool {
        self.geometry = self.geometry.with_viewport_extent(viewport_extent);
        self.reclamp()
    }

    /// Update the item extent.
    ///
    /// # Errors
    /// Rejects a non-positive extent and leaves the controller unchanged.
    pub fn set_item_extent(&mut self, item_extent: f64) -> Result<bool, WindowError> {
        self.geometry = self.geometry.with_item_extent(item_extent)?;
        Ok(self.reclamp())
    }

    /// Update the overscan. Never moves the offset.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.geometry = self.geometry.with_overscan(overscan);
    }

    // A page never moves by less than one item so a viewport smaller than an
    // item still makes progress.
    fn page_extent(&self) -> f64 {
        self.geometry
            .viewport_extent()
            .max(self.geometry.item_extent())
    }

    fn reclamp(&mut self) -> bool {
        let clamped = self.geometry.clamp_offset(self.item_count, self.offset);
        self.replace_offset(clamped)
    }

    fn replace_offset(&mut self, offset: f64) -> bool {
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }
}
