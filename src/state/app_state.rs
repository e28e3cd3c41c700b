//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns one
//! virtualized list per tab; every transition goes through the list's
//! [`VirtualScroll`] so the offset stays clamped to the current geometry.

use crate::config::ResolvedConfig;
use crate::model::dataset::{
    clamp_item_count, generate_demo_data, generate_product_data, generate_user_data,
};
use crate::model::{DemoItem, ProductItem, RecordItem, UserItem};
use crate::state::list_pane::ListPane;
use crate::view_state::{VirtualScroll, WindowError};
use serde::Deserialize;
use tracing::{info, warn};

// ===== Tab =====

/// The dataset shown in the list area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Plain rows: name, email, role, status.
    Basic,
    /// User cards with an avatar initial.
    Users,
    /// Product cards with price and stock.
    Products,
    /// Records loaded from a JSONL file.
    Records,
}

impl Tab {
    /// Every tab in display order.
    pub const ALL: [Self; 4] = [Self::Basic, Self::Users, Self::Products, Self::Records];

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Users => "Users",
            Self::Products => "Products",
            Self::Records => "Records",
        }
    }

    /// 1-based number used by the `1`-`4` shortcuts.
    pub fn number(self) -> usize {
        match self {
            Self::Basic => 1,
            Self::Users => 2,
            Self::Products => 3,
            Self::Records => 4,
        }
    }

    /// Label shown in the tab bar, prefixed with the shortcut number.
    pub fn label(self) -> String {
        format!("{} {}", self.number(), self.title())
    }

    /// Tab for a 1-based number.
    pub fn from_number(number: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.number() == number)
    }
}

// ===== AppState =====

/// Application state. Pure data, no terminal access.
///
/// # Invariants
///
/// - `active` is always one of [`AppState::tabs`]; `Records` only appears
///   when a record file was loaded.
/// - Every pane's viewport extent equals `viewport_height`.
/// - The three generated panes hold exactly `item_count` items.
#[derive(Debug)]
pub struct AppState {
    basic: ListPane<DemoItem>,
    users: ListPane<UserItem>,
    products: ListPane<ProductItem>,
    records: Option<ListPane<RecordItem>>,

    active: Tab,
    item_count: usize,
    viewport_height: u16,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Build the state from a resolved config and optionally loaded records.
    ///
    /// The viewport starts at zero height; the shell reports the real height
    /// before the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when a configured item height is zero.
    pub fn new(
        config: &ResolvedConfig,
        records: Option<Vec<RecordItem>>,
    ) -> Result<Self, WindowError> {
        let heights = config.item_heights;
        let count = config.item_count;
        let overscan = config.overscan;

        let records = records
            .map(|items| ListPane::new(items, heights.records, 0, overscan))
            .transpose()?;

        let mut active = config.initial_tab;
        if active == Tab::Records && records.is_none() {
            warn!("Records tab requested without a record file; showing basic list");
            active = Tab::Basic;
        }

        info!(count, overscan, tab = ?active, "Building lists");

        Ok(Self {
            basic: ListPane::new(generate_demo_data(count), heights.basic, 0, overscan)?,
            users: ListPane::new(generate_user_data(count), heights.users, 0, overscan)?,
            products: ListPane::new(generate_product_data(count), heights.products, 0, overscan)?,
            records,
            active,
            item_count: count,
            viewport_height: 0,
            help_visible: false,
        })
    }

    /// Tabs available in this session, in display order.
    pub fn tabs(&self) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| *tab != Tab::Records || self.records.is_some())
            .collect()
    }

    /// Currently shown tab.
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Unavailable tabs are ignored. Returns true on change.
    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active || !self.tabs().contains(&tab) {
            return false;
        }
        self.active = tab;
        true
    }

    /// Generated record count shared by the basic, users and products tabs.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Regenerate the generated datasets with `count` items.
    ///
    /// The count is clamped to the runtime range. Scroll offsets are
    /// re-clamped so a shrinking list never leaves the viewport past its end.
    /// Returns true if the count changed.
    pub fn set_item_count(&mut self, count: usize) -> bool {
        let count = clamp_item_count(count);
        if count == self.item_count {
            return false;
        }

        info!(from = self.item_count, to = count, "Regenerating datasets");
        self.item_count = count;
        self.basic.replace_items(generate_demo_data(count));
        self.users.replace_items(generate_user_data(count));
        self.products.replace_items(generate_product_data(count));
        true
    }

    /// Height of the list viewport in rows.
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Resize every list to a new viewport height. Returns true if the
    /// active list's offset moved.
    pub fn set_viewport_height(&mut self, height: u16) -> bool {
        self.viewport_height = height;
        let extent = f64::from(height);

        let basic = self.basic.scroll_mut().set_viewport_extent(extent);
        let users = self.users.scroll_mut().set_viewport_extent(extent);
        let products = self.products.scroll_mut().set_viewport_extent(extent);
        let records = self
            .records
            .as_mut()
            .is_some_and(|pane| pane.scroll_mut().set_viewport_extent(extent));

        match self.active {
            Tab::Basic => basic,
            Tab::Users => users,
            Tab::Products => products,
            Tab::Records => records,
        }
    }

    /// Basic list.
    pub fn basic(&self) -> &ListPane<DemoItem> {
        &self.basic
    }

    /// Mutable basic list (row cache access during rendering).
    pub fn basic_mut(&mut self) -> &mut ListPane<DemoItem> {
        &mut self.basic
    }

    /// User list.
    pub fn users(&self) -> &ListPane<UserItem> {
        &self.users
    }

    /// Mutable user list.
    pub fn users_mut(&mut self) -> &mut ListPane<UserItem> {
        &mut self.users
    }

    /// Product list.
    pub fn products(&self) -> &ListPane<ProductItem> {
        &self.products
    }

    /// Mutable product list.
    pub fn products_mut(&mut self) -> &mut ListPane<ProductItem> {
        &mut self.products
    }

    /// Record list, if a file was loaded.
    pub fn records(&self) -> Option<&ListPane<RecordItem>> {
        self.records.as_ref()
    }

    /// Mutable record list.
    pub fn records_mut(&mut self) -> Option<&mut ListPane<RecordItem>> {
        self.records.as_mut()
    }

    /// Scroll controller of the active tab.
    pub fn active_scroll(&self) -> &VirtualScroll {
        match self.active {
            Tab::Basic => self.basic.scroll(),
            Tab::Users => self.users.scroll(),
            Tab::Products => self.products.scroll(),
            Tab::Records => match &self.records {
                Some(pane) => pane.scroll(),
                None => self.basic.scroll(),
            },
        }
    }

    /// Mutable scroll controller of the active tab.
    pub fn active_scroll_mut(&mut self) -> &mut VirtualScroll {
        match self.active {
            Tab::Basic => self.basic.scroll_mut(),
            Tab::Users => self.users.scroll_mut(),
            Tab::Products => self.products.scroll_mut(),
            Tab::Records => match &mut self.records {
                Some(pane) => pane.scroll_mut(),
                None => self.basic.scroll_mut(),
            },
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
