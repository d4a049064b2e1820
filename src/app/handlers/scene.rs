//! Handler für Szenen-Struktur: Laden, Speichern, Items und Layer.

use crate::app::notifications::Notification;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ItemKind, SceneGraph};

/// Ersetzt die Szene und meldet `SceneLoaded`.
pub fn load(state: &mut AppState, scene: SceneGraph, outbox: &mut Vec<Notification>) {
    use_cases::scene::load_scene(state, scene);
    state.ui.status_message = Some(format!("Szene '{}' geladen", state.scene.name));
    outbox.push(Notification::SceneLoaded);
}

/// Speichert den Datenstand der Szene.
pub fn save(state: &mut AppState) {
    state.flush_selected_items();
    state.save_current_scene();
    state.dirty = false;
}

/// Legt ein Item im aktuellen Composite an und meldet `ItemAdded`.
pub fn add_item(
    state: &mut AppState,
    kind: ItemKind,
    stage_pos: glam::Vec2,
    outbox: &mut Vec<Notification>,
) -> anyhow::Result<()> {
    if !state.scene_loaded {
        log::debug!("Item anlegen ignoriert: keine Szene geladen");
        return Ok(());
    }
    let id = use_cases::scene::add_item(state, kind, stage_pos)?;
    outbox.push(Notification::ItemAdded { id });
    Ok(())
}

/// Entfernt die selektierten Items und meldet jedes entfernte Item.
pub fn delete_selected(state: &mut AppState, outbox: &mut Vec<Notification>) {
    let removed = use_cases::scene::delete_selected(state);
    outbox.extend(removed.into_iter().map(|id| Notification::ItemRemoved { id }));
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Sperrt oder entsperrt einen Layer.
pub fn set_layer_locked(state: &mut AppState, layer: &str, locked: bool) {
    use_cases::scene::set_layer_locked(state, layer, locked);
}
