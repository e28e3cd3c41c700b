//! Tests for AppState construction and transitions.

use super::*;
use crate::config::ItemHeights;
use crate::model::ItemId;

fn config(count: usize) -> ResolvedConfig {
    ResolvedConfig {
        item_count: count,
        ..ResolvedConfig::default()
    }
}

fn record(id: &str) -> RecordItem {
    RecordItem {
        id: ItemId::from(id),
        label: id.to_uppercase(),
        fields: serde_json::Map::new(),
    }
}

// ===== Tab =====

#[test]
fn tab_numbers_round_trip() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_number(tab.number()), Some(tab));
    }
    assert_eq!(Tab::from_number(0), None);
    assert_eq!(Tab::from_number(5), None);
}

#[test]
fn tab_label_includes_shortcut() {
    assert_eq!(Tab::Products.label(), "3 Products");
}

#[test]
fn tab_deserializes_lowercase() {
    #[derive(Deserialize)]
    struct Wrapper {
        tab: Tab,
    }

    let parsed: Wrapper = toml::from_str("tab = \"users\"").expect("valid tab");
    assert_eq!(parsed.tab, Tab::Users);
    assert!(toml::from_str::<Wrapper>("tab = \"Users\"").is_err());
}

// ===== Construction =====

#[test]
fn new_generates_every_dataset() {
    let state = AppState::new(&config(500), None).expect("valid config");

    assert_eq!(state.item_count(), 500);
    assert_eq!(state.basic().len(), 500);
    assert_eq!(state.users().len(), 500);
    assert_eq!(state.products().len(), 500);
    assert!(state.records().is_none());
    assert_eq!(state.active_tab(), Tab::Basic);
    assert!(!state.help_visible);
}

#[test]
fn new_uses_configured_item_heights() {
    let config = ResolvedConfig {
        item_heights: ItemHeights {
            basic: 2,
            users: 4,
            products: 6,
            records: 1,
        },
        ..config(100)
    };
    let state = AppState::new(&config, None).expect("valid config");

    assert_eq!(state.basic().item_height(), 2);
    assert_eq!(state.users().scroll().total_extent(), 400.0);
    assert_eq!(state.products().scroll().geometry().item_extent(), 6.0);
}

#[test]
fn new_rejects_zero_item_height() {
    let config = ResolvedConfig {
        item_heights: ItemHeights {
            users: 0,
            ..ItemHeights::default()
        },
        ..config(100)
    };

    let result = AppState::new(&config, None);
    assert!(matches!(result, Err(WindowError::InvalidItemExtent(_))));
}

#[test]
fn new_allows_empty_generated_lists() {
    let state = AppState::new(&config(0), None).expect("valid config");

    assert_eq!(state.basic().len(), 0);
    assert!(state.active_scroll().window().is_empty());
}

#[test]
fn records_tab_falls_back_without_records() {
    let config = ResolvedConfig {
        initial_tab: Tab::Records,
        ..config(100)
    };
    let state = AppState::new(&config, None).expect("valid config");

    assert_eq!(state.active_tab(), Tab::Basic);
    assert_eq!(state.tabs(), vec![Tab::Basic, Tab::Users, Tab::Products]);
}

#[test]
fn records_tab_starts_active_when_loaded() {
    let config = ResolvedConfig {
        initial_tab: Tab::Records,
        ..config(100)
    };
    let state =
        AppState::new(&config, Some(vec![record("a"), record("b")])).expect("valid config");

    assert_eq!(state.active_tab(), Tab::Records);
    assert_eq!(state.tabs().len(), 4);
    assert_eq!(state.active_scroll().item_count(), 2);
}

// ===== Item count =====

#[test]
fn set_item_count_regenerates_generated_lists_only() {
    let mut state = AppState::new(&config(1_000), Some(vec![record("a")])).expect("valid");

    assert!(state.set_item_count(100));

    assert_eq!(state.basic().len(), 100);
    assert_eq!(state.users().scroll().item_count(), 100);
    assert_eq!(state.records().map(ListPane::len), Some(1));
}

#[test]
fn set_item_count_clamps_into_runtime_range() {
    let mut state = AppState::new(&config(1_000), None).expect("valid");

    state.set_item_count(5);
    assert_eq!(state.item_count(), 100);

    state.set_item_count(10_000_000);
    assert_eq!(state.item_count(), 100_000);
}

#[test]
fn set_item_count_same_value_reports_no_change() {
    let mut state = AppState::new(&config(1_000), None).expect("valid");

    assert!(!state.set_item_count(1_000));
}

// ===== Viewport =====

#[test]
fn set_viewport_height_updates_every_list() {
    let mut state = AppState::new(&config(1_000), Some(vec![record("a")])).expect("valid");

    state.set_viewport_height(24);

    assert_eq!(state.viewport_height(), 24);
    assert_eq!(state.basic().scroll().geometry().viewport_extent(), 24.0);
    assert_eq!(state.users().scroll().geometry().viewport_extent(), 24.0);
    assert_eq!(state.products().scroll().geometry().viewport_extent(), 24.0);
    assert_eq!(
        state
            .records()
            .map(|pane| pane.scroll().geometry().viewport_extent()),
        Some(24.0)
    );
}

#[test]
fn growing_viewport_at_bottom_pulls_offset_back() {
    let mut state = AppState::new(&config(100), None).expect("valid");
    state.set_viewport_height(10);
    state.active_scroll_mut().set_scroll_offset(90.0);

    assert!(state.set_viewport_height(30));
    assert_eq!(state.active_scroll().offset(), 70.0);
}

#[test]
fn shrinking_viewport_keeps_offset() {
    let mut state = AppState::new(&config(100), None).expect("valid");
    state.set_viewport_height(30);
    state.active_scroll_mut().set_scroll_offset(40.0);

    assert!(!state.set_viewport_height(10));
    assert_eq!(state.active_scroll().offset(), 40.0);
}

// ===== Active list routing =====

#[test]
fn active_scroll_follows_active_tab() {
    let mut state = AppState::new(&config(100), None).expect("valid");
    state.set_viewport_height(10);
    state.set_active_tab(Tab::Users);

    state.active_scroll_mut().set_scroll_offset(12.0);

    assert_eq!(state.users().scroll().offset(), 12.0);
    assert_eq!(state.basic().scroll().offset(), 0.0);
}
