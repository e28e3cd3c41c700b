//! Product row keyboard action handler.
//!
//! The products tab keeps a row cursor. `n` and `p` move it, keeping the
//! selected product on screen; `e` and `d` request an edit or a delete of
//! the selected product. Requests are logged, the demo has no backend to
//! send them to.

use crate::model::{KeyAction, ProductItem};
use crate::state::{AppState, Tab};
use tracing::{debug, info};

/// Handle a product row action. Returns true if the screen changed.
///
/// Ignored outside the products tab.
pub fn handle_item_action(state: &mut AppState, action: KeyAction) -> bool {
    if state.active_tab() != Tab::Products {
        return false;
    }

    let pane = state.products_mut();
    match action {
        KeyAction::SelectNext => pane.select_next(),
        KeyAction::SelectPrev => pane.select_prev(),
        KeyAction::EditItem | KeyAction::DeleteItem => {
            match pane.selected_item() {
                Some(product) => log_request(action, product),
                None => debug!(?action, "No product selected"),
            }
            false
        }
        _ => false,
    }
}

fn log_request(action: KeyAction, product: &ProductItem) {
    let verb = if action == KeyAction::DeleteItem {
        "Delete"
    } else {
        "Edit"
    };
    info!(
        id = product.id,
        name = %product.name,
        price = product.price,
        stock = product.stock,
        "{verb} product requested"
    );
}
