//! Record count keyboard action handler.
//!
//! `+` and `-` double or halve the generated record count, within the
//! runtime bounds, so every count in the range is a few keystrokes away.
//! The record tab is never regenerated.

use crate::model::dataset::clamp_item_count;
use crate::model::KeyAction;
use crate::state::AppState;

/// Factor applied per step.
pub const COUNT_STEP_FACTOR: usize = 2;

/// Handle a record count action. Returns true if the count changed.
pub fn handle_count_action(state: &mut AppState, action: KeyAction) -> bool {
    let current = state.item_count();
    let next = match action {
        KeyAction::IncreaseCount => {
            clamp_item_count(current.saturating_mul(COUNT_STEP_FACTOR)).max(current)
        }
        // A count below the runtime minimum (e.g. `--count 0`) never grows
        // on a decrease.
        KeyAction::DecreaseCount => clamp_item_count(current / COUNT_STEP_FACTOR).min(current),
        _ => return false,
    };

    if next == current {
        return false;
    }
    state.set_item_count(next)
}
