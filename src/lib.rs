//! vscroll
//!
//! Fixed-extent list virtualization with a terminal demo.
//!
//! Only the items that intersect the viewport, plus a small overscan band,
//! are ever materialized, so a list of a hundred thousand items costs no
//! more per frame than a list of a hundred. The pure windowing engine lives
//! in [`view_state`]; [`state`] and [`view`] are the demo built on top of it.
//!
//! ```
//! use vscroll::view_state::compute_window;
//!
//! // 10,000 items of 50px in a 500px viewport, scrolled to 5,000px.
//! let window = compute_window(10_000, 50.0, 500.0, 3, 5_000.0).expect("valid extent");
//! assert_eq!(window.indices(), 97..114);
//! assert_eq!(window.render_offset, 4_850.0);
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
