//! One virtualized list: items, scroll controller and row cache.

use crate::model::{Item, ItemId};
use crate::view_state::{RowCache, VirtualScroll, VisibleWindow, WindowError};
use ratatui::text::Line;

/// A list of items rendered through the windowing engine.
///
/// The pane owns the backing sequence. Its scroll controller always sees
/// `items.len()` as the item count.
#[derive(Debug)]
pub struct ListPane<T> {
    items: Vec<T>,
    item_height: u16,
    scroll: VirtualScroll,
    cache: RowCache,
    selected: Option<usize>,
}

/// Rows of the currently materialized window.
#[derive(Debug)]
pub struct MaterializedWindow<'a> {
    /// Window the rows belong to.
    pub window: VisibleWindow,
    /// Rendered rows per item, in window order.
    pub rows: Vec<&'a [Line<'static>]>,
}

impl<T: Item> ListPane<T> {
    /// Create a pane scrolled to the top.
    ///
    /// # Errors
    /// Returns [`WindowError::InvalidItemExtent`] for a zero item height.
    pub fn new(
        items: Vec<T>,
        item_height: u16,
        viewport_height: u16,
        overscan: usize,
    ) -> Result<Self, WindowError> {
        let scroll = VirtualScroll::new(
            items.len(),
            f64::from(item_height),
            f64::from(viewport_height),
            overscan,
        )?;

        Ok(Self {
            items,
            item_height,
            scroll,
            cache: RowCache::new(),
            selected: None,
        })
    }

    /// Backing items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows per item.
    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    /// Scroll controller.
    pub fn scroll(&self) -> &VirtualScroll {
        &self.scroll
    }

    /// Mutable scroll controller.
    pub fn scroll_mut(&mut self) -> &mut VirtualScroll {
        &mut self.scroll
    }

    /// Current window.
    pub fn window(&self) -> VisibleWindow {
        self.scroll.window()
    }

    /// Number of cached rendered items.
    pub fn cached_rows(&self) -> usize {
        self.cache.len()
    }

    /// Replace the backing items, keeping the scroll offset where possible.
    /// A selection past the new end is dropped. Returns true if the offset
    /// had to move.
    pub fn replace_items(&mut self, items: Vec<T>) -> bool {
        self.items = items;
        self.selected = self.selected.filter(|index| *index < self.items.len());
        self.scroll.set_item_count(self.items.len())
    }

    // ===== Selection =====

    /// Index of the selected item.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Select the item at `index` and scroll it on screen.
    ///
    /// Returns true if the selection or the offset changed. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let moved = self.scroll.scroll_into_view(index);
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed || moved
    }

    /// Select the item after the current one, or the first item on screen
    /// when nothing is selected.
    pub fn select_next(&mut self) -> bool {
        match self.selected {
            Some(index) => self.select(index.saturating_add(1)),
            None => self.select_first_visible(),
        }
    }

    /// Select the item before the current one, or the first item on screen
    /// when nothing is selected.
    pub fn select_prev(&mut self) -> bool {
        match self.selected {
            Some(index) => index.checked_sub(1).is_some_and(|prev| self.select(prev)),
            None => self.select_first_visible(),
        }
    }

    /// Index of the item drawn at viewport row `row`, if any.
    pub fn item_at_row(&self, row: u16) -> Option<usize> {
        let row = f64::from(row);
        if row >= self.scroll.geometry().viewport_extent() {
            return None;
        }
        let content = self.scroll.offset() + row;
        let index = (content / f64::from(self.item_height)).floor() as usize;
        (index < self.items.len()).then_some(index)
    }

    fn select_first_visible(&mut self) -> bool {
        match self.item_at_row(0) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Render the current window at `width` columns.
    ///
    /// Rows come from the cache when the item id was rendered before;
    /// `render` runs only on a miss. The cache is sized to a few windows,
    /// so rows just scrolled past stay available for a scroll back.
    pub fn materialize<F>(&mut self, width: u16, mut render: F) -> MaterializedWindow<'_>
    where
        F: FnMut(&T, u16, u16) -> Vec<Line<'static>>,
    {
        let window = self.scroll.window();
        let height = self.item_height;
        let items = self.items.get(window.indices()).unwrap_or(&[]);
        let ids: Vec<ItemId> = items.iter().map(Item::id).collect();

        self.cache.set_width(width);
        self.cache.fit_window(window.len());

        for (item, id) in items.iter().zip(&ids) {
            self.cache
                .get_or_render(id.clone(), || render(item, width, height));
        }

        let cache = &self.cache;
        let rows = ids
            .iter()
            .map(|id| cache.get(id).unwrap_or(&[]))
            .collect();

        MaterializedWindow { window, rows }
    }
}
