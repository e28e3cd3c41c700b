//! Domain model types (pure).
//!
//! All types in this module are plain data; nothing here touches the terminal.

pub mod dataset;
pub mod error;
pub mod item;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, InputError, RecordError};
pub use item::{DemoItem, Item, ItemId, ProductItem, RecordItem, Status, UserItem};
pub use key_action::KeyAction;
