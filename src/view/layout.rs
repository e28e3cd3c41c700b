//! Screen layout: tab bar on top, list in the middle, status line below.

use super::constants::{LIST_BORDER_ROWS, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::list::render_list;
use super::status::render_status_bar;
use super::styles::Palette;
use super::tabs::render_tab_bar;
use crate::state::{AppState, Tab};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Tab bar, including its border.
    pub tabs: Rect,
    /// Bordered list area.
    pub list: Rect,
    /// One-row status line.
    pub status: Rect,
}

impl AppLayout {
    /// Split a frame area.
    pub fn new(area: Rect) -> Self {
        let [tabs, list, status] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        Self { tabs, list, status }
    }

    /// Rows available to list items inside the border.
    pub fn list_viewport_height(&self) -> u16 {
        self.list.height.saturating_sub(LIST_BORDER_ROWS)
    }
}

/// Viewport height, in rows, of the list for a terminal of `area`.
pub fn list_viewport_height(area: Rect) -> u16 {
    AppLayout::new(area).list_viewport_height()
}

/// Render the whole screen and return the areas used.
pub fn render_layout(frame: &mut Frame, state: &mut AppState, palette: &Palette) -> AppLayout {
    let layout = AppLayout::new(frame.area());
    let active = state.active_tab();

    render_tab_bar(frame, layout.tabs, &state.tabs(), active, palette);
    render_status_bar(frame, layout.status, state.active_scroll(), palette);

    let title = active.title();
    match active {
        Tab::Basic => render_list(frame, layout.list, state.basic_mut(), title, palette),
        Tab::Users => render_list(frame, layout.list, state.users_mut(), title, palette),
        Tab::Products => render_list(frame, layout.list, state.products_mut(), title, palette),
        Tab::Records => {
            if let Some(pane) = state.records_mut() {
                render_list(frame, layout.list, pane, title, palette);
            }
        }
    }

    if state.help_visible {
        render_help_overlay(frame, palette);
    }

    layout
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
