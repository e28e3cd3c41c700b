//! Tab navigation keyboard action handler.
//!
//! Pure functions that switch the active dataset tab. Next/previous wrap
//! around the available tabs; direct selection ignores numbers that don't
//! name an available tab.

use crate::model::KeyAction;
use crate::state::{AppState, Tab};

/// Handle a tab navigation keyboard action.
///
/// Returns true if the active tab changed.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction) -> bool {
    match action {
        KeyAction::NextTab => state.set_active_tab(neighbour(state, 1)),
        KeyAction::PrevTab => state.set_active_tab(neighbour(state, -1)),
        KeyAction::SelectTab(number) => match Tab::from_number(number) {
            Some(tab) => state.set_active_tab(tab),
            None => false,
        },
        _ => false,
    }
}

fn neighbour(state: &AppState, step: isize) -> Tab {
    let tabs = state.tabs();
    let current = tabs
        .iter()
        .position(|tab| *tab == state.active_tab())
        .unwrap_or(0);
    let index = (current as isize + step).rem_euclid(tabs.len() as isize) as usize;
    tabs.get(index).copied().unwrap_or(Tab::Basic)
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
