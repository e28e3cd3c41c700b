//! Tests for mouse event handling.

use super::*;
use crate::config::ResolvedConfig;

// ===== Test Helpers =====

const TABS: [Tab; 3] = [Tab::Basic, Tab::Users, Tab::Products];

fn create_test_state() -> AppState {
    let config = ResolvedConfig {
        item_count: 1_000,
        ..ResolvedConfig::default()
    };
    let mut state = AppState::new(&config, None).expect("valid config");
    state.set_viewport_height(20);
    state
}

// Tab bar at (0, 0), 60 wide, 3 tall. Labels are "1 Basic" (7),
// "2 Users" (7) and "3 Products" (10):
//   x=1..10  " 1 Basic "
//   x=10     divider
//   x=11..20 " 2 Users "
//   x=20     divider
//   x=21..33 " 3 Products "
fn tab_area() -> Rect {
    Rect::new(0, 0, 60, 3)
}

// ===== detect_tab_click Tests =====

#[test]
fn detect_tab_click_returns_no_tab_when_click_outside_bounds() {
    assert_eq!(
        detect_tab_click(25, 5, tab_area(), &TABS),
        TabClickResult::NoTab,
        "Click below tab area should return NoTab"
    );
}

#[test]
fn detect_tab_click_returns_no_tab_on_left_border() {
    assert_eq!(
        detect_tab_click(0, 1, tab_area(), &TABS),
        TabClickResult::NoTab
    );
}

#[test]
fn detect_tab_click_finds_each_label() {
    assert_eq!(
        detect_tab_click(3, 1, tab_area(), &TABS),
        TabClickResult::TabClicked(Tab::Basic)
    );
    assert_eq!(
        detect_tab_click(14, 1, tab_area(), &TABS),
        TabClickResult::TabClicked(Tab::Users)
    );
    assert_eq!(
        detect_tab_click(30, 1, tab_area(), &TABS),
        TabClickResult::TabClicked(Tab::Products)
    );
}

#[test]
fn detect_tab_click_padding_belongs_to_tab() {
    assert_eq!(
        detect_tab_click(1, 1, tab_area(), &TABS),
        TabClickResult::TabClicked(Tab::Basic)
    );
    assert_eq!(
        detect_tab_click(19, 1, tab_area(), &TABS),
        TabClickResult::TabClicked(Tab::Users)
    );
}

#[test]
fn detect_tab_click_divider_is_no_tab() {
    assert_eq!(
        detect_tab_click(10, 1, tab_area(), &TABS),
        TabClickResult::NoTab
    );
}

#[test]
fn detect_tab_click_past_last_tab_is_no_tab() {
    assert_eq!(
        detect_tab_click(45, 1, tab_area(), &TABS),
        TabClickResult::NoTab
    );
}

#[test]
fn detect_tab_click_respects_area_offset() {
    let area = Rect::new(10, 4, 60, 3);
    assert_eq!(
        detect_tab_click(5, 5, area, &TABS),
        TabClickResult::NoTab
    );
    assert_eq!(
        detect_tab_click(13, 5, area, &TABS),
        TabClickResult::TabClicked(Tab::Basic)
    );
}

#[test]
fn detect_tab_click_handles_zero_width_area() {
    assert_eq!(
        detect_tab_click(0, 0, Rect::new(0, 0, 0, 1), &TABS),
        TabClickResult::NoTab
    );
}

// ===== handle_mouse_click Tests =====

#[test]
fn click_on_tab_switches_active_tab() {
    let mut state = create_test_state();

    assert!(handle_mouse_click(&mut state, 14, 1, tab_area()));
    assert_eq!(state.active_tab(), Tab::Users);
}

#[test]
fn click_on_records_label_without_records_is_no_tab() {
    let mut state = create_test_state();

    // Where a fourth tab would start.
    assert!(!handle_mouse_click(&mut state, 36, 1, tab_area()));
    assert_eq!(state.active_tab(), Tab::Basic);
}

// ===== handle_mouse_scroll Tests =====

#[test]
fn wheel_down_scrolls_three_rows() {
    let mut state = create_test_state();

    assert!(handle_mouse_scroll(&mut state, false));
    assert_eq!(state.active_scroll().offset(), 3.0);
}

#[test]
fn wheel_up_at_top_does_nothing() {
    let mut state = create_test_state();

    assert!(!handle_mouse_scroll(&mut state, true));
    assert_eq!(state.active_scroll().offset(), 0.0);
}

#[test]
fn wheel_up_clamps_to_top() {
    let mut state = create_test_state();
    state.active_scroll_mut().set_scroll_offset(2.0);

    assert!(handle_mouse_scroll(&mut state, true));
    assert_eq!(state.active_scroll().offset(), 0.0);
}

// ===== handle_list_click Tests =====

// List at (0, 3), 60 wide, 22 tall: a 20-row viewport starting at y=4.
fn list_area() -> Rect {
    Rect::new(0, 3, 60, 22)
}

fn products_state() -> AppState {
    let mut state = create_test_state();
    state.set_active_tab(Tab::Products);
    state
}

#[test]
fn click_on_product_row_selects_it() {
    let mut state = products_state();

    // Viewport row 7 is the second line of product index 2 (rows 6..9).
    assert!(handle_list_click(&mut state, 10, 11, list_area()));
    assert_eq!(state.products().selected(), Some(2));

    // Same product again: nothing changes.
    assert!(!handle_list_click(&mut state, 20, 12, list_area()));
}

#[test]
fn click_follows_scroll_offset() {
    let mut state = products_state();
    state.active_scroll_mut().set_scroll_offset(300.0);

    assert!(handle_list_click(&mut state, 10, 4, list_area()));
    assert_eq!(state.products().selected(), Some(100));
}

#[test]
fn click_on_list_border_selects_nothing() {
    let mut state = products_state();

    assert!(!handle_list_click(&mut state, 10, 3, list_area()));
    assert!(!handle_list_click(&mut state, 0, 10, list_area()));
    assert!(!handle_list_click(&mut state, 10, 24, list_area()));
    assert_eq!(state.products().selected(), None);
}

#[test]
fn click_on_list_outside_products_tab_is_ignored() {
    let mut state = create_test_state();

    assert!(!handle_list_click(&mut state, 10, 11, list_area()));
    assert_eq!(state.products().selected(), None);
}
