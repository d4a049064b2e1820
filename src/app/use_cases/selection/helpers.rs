//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::AppState;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    state.ui.update_current_item_state();
}

/// Ersetzt die Selektion durch die gegebenen Items.
///
/// Unbekannte IDs werden übersprungen. Gesperrte Items sind erlaubt,
/// da die Auswahl explizit (z.B. über den Hierarchie-Baum) erfolgt.
pub fn set_selection(state: &mut AppState, ids: &[u64]) {
    let live: Vec<u64> = ids
        .iter()
        .copied()
        .filter(|id| {
            let exists = state.scene.contains(*id);
            if !exists {
                log::debug!("Selektion übersprungen: Item {} existiert nicht", id);
            }
            exists
        })
        .collect();

    state.selection.set_selections(live, true);
    state.ui.update_current_item_state();
}
