//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod count_handler;
pub mod item_handler;
pub mod list_pane;
pub mod mouse_handler;
pub mod scroll_handler;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::{AppState, Tab};
pub use count_handler::handle_count_action;
pub use item_handler::handle_item_action;
pub use list_pane::{ListPane, MaterializedWindow};
pub use mouse_handler::{
    handle_list_click, handle_mouse_click, handle_mouse_scroll, TabClickResult,
};
pub use scroll_handler::handle_scroll_action;
pub use tab_handler::handle_tab_action;
