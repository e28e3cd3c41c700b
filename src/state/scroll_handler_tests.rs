//! Tests for scroll handler.
//!
//! Tests verify scroll action dispatching on the active list:
//! - ScrollUp/ScrollDown move by one row
//! - PageUp/PageDown move by the viewport height
//! - ScrollToTop/ScrollToBottom jump to the bounds
//! - Actions only touch the active tab's list

use super::*;
use crate::config::ResolvedConfig;
use crate::state::Tab;

/// 1,000 generated items, 20-row viewport, default item heights.
fn create_test_state(count: usize) -> AppState {
    let config = ResolvedConfig {
        item_count: count,
        ..ResolvedConfig::default()
    };
    let mut state = AppState::new(&config, None).expect("default heights are valid");
    state.set_viewport_height(20);
    state
}

#[test]
fn scroll_down_moves_one_row() {
    let mut state = create_test_state(1_000);

    assert!(handle_scroll_action(&mut state, KeyAction::ScrollDown));
    assert_eq!(state.active_scroll().offset(), 1.0);
}

#[test]
fn scroll_up_at_top_is_a_no_op() {
    let mut state = create_test_state(1_000);

    assert!(!handle_scroll_action(&mut state, KeyAction::ScrollUp));
    assert_eq!(state.active_scroll().offset(), 0.0);
}

#[test]
fn page_down_moves_by_viewport() {
    let mut state = create_test_state(1_000);

    handle_scroll_action(&mut state, KeyAction::PageDown);
    handle_scroll_action(&mut state, KeyAction::PageDown);

    assert_eq!(state.active_scroll().offset(), 40.0);
}

#[test]
fn page_up_clamps_at_top() {
    let mut state = create_test_state(1_000);
    handle_scroll_action(&mut state, KeyAction::ScrollDown);
    handle_scroll_action(&mut state, KeyAction::ScrollDown);

    handle_scroll_action(&mut state, KeyAction::PageUp);

    assert_eq!(state.active_scroll().offset(), 0.0);
}

#[test]
fn scroll_to_bottom_reaches_max_scroll() {
    let mut state = create_test_state(1_000);

    assert!(handle_scroll_action(&mut state, KeyAction::ScrollToBottom));

    // 1,000 one-row items in a 20-row viewport.
    assert_eq!(state.active_scroll().offset(), 980.0);
    assert!(state.active_scroll().is_at_bottom());
    assert_eq!(state.active_scroll().window().last_index(), Some(999));
}

#[test]
fn scroll_down_at_bottom_is_a_no_op() {
    let mut state = create_test_state(1_000);
    handle_scroll_action(&mut state, KeyAction::ScrollToBottom);

    assert!(!handle_scroll_action(&mut state, KeyAction::ScrollDown));
    assert!(!handle_scroll_action(&mut state, KeyAction::PageDown));
}

#[test]
fn scroll_to_top_after_scrolling() {
    let mut state = create_test_state(1_000);
    handle_scroll_action(&mut state, KeyAction::PageDown);

    assert!(handle_scroll_action(&mut state, KeyAction::ScrollToTop));
    assert_eq!(state.active_scroll().offset(), 0.0);
}

#[test]
fn scrolling_targets_only_active_tab() {
    let mut state = create_test_state(1_000);
    state.set_active_tab(Tab::Products);

    handle_scroll_action(&mut state, KeyAction::PageDown);

    assert_eq!(state.products().scroll().offset(), 20.0);
    assert_eq!(state.basic().scroll().offset(), 0.0);
    assert_eq!(state.users().scroll().offset(), 0.0);
}

#[test]
fn products_bottom_accounts_for_item_height() {
    let mut state = create_test_state(1_000);
    state.set_active_tab(Tab::Products);

    handle_scroll_action(&mut state, KeyAction::ScrollToBottom);

    // 1,000 three-row items in a 20-row viewport.
    assert_eq!(state.active_scroll().offset(), 2_980.0);
}

#[test]
fn non_scroll_actions_are_ignored() {
    let mut state = create_test_state(1_000);

    assert!(!handle_scroll_action(&mut state, KeyAction::NextTab));
    assert!(!handle_scroll_action(&mut state, KeyAction::Help));
    assert_eq!(state.active_scroll().offset(), 0.0);
}

#[test]
fn empty_list_never_scrolls() {
    let mut state = create_test_state(0);

    assert!(!handle_scroll_action(&mut state, KeyAction::PageDown));
    assert!(!handle_scroll_action(&mut state, KeyAction::ScrollToBottom));
    assert!(state.active_scroll().window().is_empty());
}
