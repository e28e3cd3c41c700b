//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that move the active list in response to scroll actions.
//! Every movement goes through the list's [`VirtualScroll`], which clamps
//! the offset into `[0, max_scroll]`.
//!
//! [`VirtualScroll`]: crate::view_state::VirtualScroll

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::ScrollPosition;

/// Rows moved by a single line scroll.
pub const LINE_STEP: f64 = 1.0;

/// Handle a scroll keyboard action on the active list.
///
/// Returns true if the scroll offset changed. Non-scroll actions are no-ops.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) -> bool {
    let scroll = state.active_scroll_mut();

    match action {
        KeyAction::ScrollUp => scroll.scroll_by(-LINE_STEP),
        KeyAction::ScrollDown => scroll.scroll_by(LINE_STEP),
        KeyAction::PageUp => scroll.page_up(),
        KeyAction::PageDown => scroll.page_down(),
        KeyAction::ScrollToTop => scroll.scroll_to(ScrollPosition::Top),
        KeyAction::ScrollToBottom => scroll.scroll_to(ScrollPosition::Bottom),
        _ => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
