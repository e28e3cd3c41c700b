//! Semantic scroll position

use super::types::non_negative;
use super::window::Geometry;

/// Semantic scroll position within a list.
///
/// A sum type that preserves scroll intent across geometry changes:
/// - `Top`: Always shows from offset 0
/// - `Bottom`: Always shows the last items in the viewport
/// - `AtOffset`: Specific absolute offset
/// - `AtItem`: Keep a specific item at the top of the viewport
/// - `Fraction`: Proportional position (for scrollbar)
///
/// # Clamping Behavior
/// Every variant resolves into `[0, max(0, total_extent - viewport_extent)]`,
/// so no resolution ever produces a blank viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollPosition {
    /// View from the very top.
    #[default]
    Top,

    /// View from the very bottom.
    Bottom,

    /// Specific offset from the top. Clamped on resolution.
    AtOffset(f64),

    /// Keep the item with this index at the top of the viewport.
    /// Indices past the end clamp to the last item.
    AtItem(usize),

    /// Fractional position (0.0 = top, 1.0 = bottom). Clamped to [0.0, 1.0].
    Fraction(f64),
}

impl ScrollPosition {
    /// Resolve to an absolute offset for `item_count` items laid out with
    /// `geometry`.
    pub fn resolve(&self, geometry: &Geometry, item_count: usize) -> f64 {
        let max_scroll = geometry.max_scroll(item_count);

        let raw = match *self {
            Self::Top => 0.0,
            Self::Bottom => max_scroll,
            Self::AtOffset(offset) => offset,
            Self::AtItem(index) => match item_count.checked_sub(1) {
                Some(last) => index.min(last) as f64 * geometry.item_extent(),
                None => 0.0,
            },
            Self::Fraction(fraction) => non_negative(fraction).min(1.0) * max_scroll,
        };

        geometry.clamp_offset(item_count, raw)
    }
}
