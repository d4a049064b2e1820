//! Handler für den Hierarchie-Baum.

use crate::app::notifications::Notification;
use crate::app::AppState;

/// Klick auf einen Baum-Knoten: Baum-Selektion ändern und melden.
pub fn choose_node(
    state: &mut AppState,
    item_id: u64,
    additive: bool,
    outbox: &mut Vec<Notification>,
) {
    let ids = state.ui.items_tree.choose(item_id, additive);
    outbox.push(Notification::TreeSelectionChanged { ids });
}
