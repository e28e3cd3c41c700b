//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events:
//! wheel scrolling of the active list, clicks on the tab bar and clicks on
//! product rows.

use crate::state::{AppState, Tab};
use ratatui::layout::{Margin, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Rows moved per wheel notch.
pub const WHEEL_STEP: f64 = 3.0;

/// Result of detecting which tab was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClickResult {
    /// Click was on this tab.
    TabClicked(Tab),
    /// Click was outside any tab.
    NoTab,
}

/// Scroll the active list by one wheel notch. Returns true if it moved.
pub fn handle_mouse_scroll(state: &mut AppState, is_scroll_up: bool) -> bool {
    let delta = if is_scroll_up { -WHEEL_STEP } else { WHEEL_STEP };
    state.active_scroll_mut().scroll_by(delta)
}

/// Detect which tab (if any) was clicked.
///
/// `tab_area` is the bordered tab bar. Tab positions follow the layout of
/// ratatui's `Tabs` widget: one column of padding on each side of a label
/// and a one-column divider between tabs. A click on a label's padding
/// counts as a click on that tab.
pub fn detect_tab_click(click_x: u16, click_y: u16, tab_area: Rect, tabs: &[Tab]) -> TabClickResult {
    let inside = click_x >= tab_area.x
        && click_x < tab_area.x.saturating_add(tab_area.width)
        && click_y >= tab_area.y
        && click_y < tab_area.y.saturating_add(tab_area.height);
    if !inside {
        return TabClickResult::NoTab;
    }

    // Skip the left border.
    let mut x = tab_area.x.saturating_add(1);
    for tab in tabs {
        let label_width = u16::try_from(tab.label().width()).unwrap_or(u16::MAX);
        let end = x.saturating_add(label_width).saturating_add(2);
        if click_x >= x && click_x < end {
            return TabClickResult::TabClicked(*tab);
        }
        // Divider.
        x = end.saturating_add(1);
    }

    TabClickResult::NoTab
}

/// Handle a left click. Switches tabs when the click lands on one.
///
/// Returns true if the active tab changed.
pub fn handle_mouse_click(state: &mut AppState, click_x: u16, click_y: u16, tab_area: Rect) -> bool {
    match detect_tab_click(click_x, click_y, tab_area, &state.tabs()) {
        TabClickResult::TabClicked(tab) => state.set_active_tab(tab),
        TabClickResult::NoTab => false,
    }
}

/// Handle a left click on the list area. Selects the product under the
/// cursor on the products tab.
///
/// `list_area` is the bordered list. Returns true if the selection changed.
pub fn handle_list_click(
    state: &mut AppState,
    click_x: u16,
    click_y: u16,
    list_area: Rect,
) -> bool {
    if state.active_tab() != Tab::Products {
        return false;
    }

    let inner = list_area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    if !inner.contains(Position::new(click_x, click_y)) {
        return false;
    }

    let pane = state.products_mut();
    match pane.item_at_row(click_y - inner.y) {
        Some(index) => pane.select(index),
        None => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
