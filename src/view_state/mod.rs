//! View-state layer - windowing, scrolling and row retention
//!
//! This module holds the virtualization core. Nothing in here draws to the
//! terminal; the `view` layer consumes these values.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemExtent) and WindowError
//! - `window`: Geometry and `compute_window` - the windowing engine
//! - `visible_range`: VisibleWindow - result of a window computation
//! - `scroll`: ScrollPosition - semantic scroll position enum
//! - `virtual_scroll`: VirtualScroll - per-list scroll controller
//! - `row_cache`: RowCache - rendered rows keyed by item id

pub mod row_cache;
pub mod scroll;
pub mod types;
pub mod virtual_scroll;
pub mod visible_range;
pub mod window;

pub use row_cache::RowCache;
pub use scroll::ScrollPosition;
pub use types::{ItemExtent, WindowError};
pub use virtual_scroll::VirtualScroll;
pub use visible_range::VisibleWindow;
pub use window::{clamp_overscan, compute_window, Geometry, DEFAULT_OVERSCAN};
