//! Use-Cases für Szenen-Struktur: Laden, Items anlegen/löschen, Composite-Navigation.

use crate::app::state::FlowAction;
use crate::app::AppState;
use crate::core::{ItemKind, ItemTransform, SceneGraph, DEFAULT_LAYER};

/// Standardgröße neu angelegter Items in Stage-Einheiten.
const NEW_ITEM_SIZE: glam::Vec2 = glam::Vec2::new(64.0, 64.0);

/// Ersetzt die Szene und setzt alle sitzungsbezogenen Zustände zurück.
pub fn load_scene(state: &mut AppState, scene: SceneGraph) {
    log::info!(
        "Szene '{}' geladen: {} Items",
        scene.name,
        scene.item_count()
    );

    state.current_composite = scene.root_id();
    state.scene = scene;
    state.scene_loaded = true;
    state.selection.clear();
    state.flow.clear();
    state.dirty = false;
    state.is_item_touched = false;
    state.is_resizing = false;
    state.view.camera_pan_on = false;
    state.view.marquee = None;
    state.ui.close_context_menu();

    super::camera::center_on_composite(state);
    state.ui.update_current_item_state();
}

/// Legt ein neues Item im aktuellen Composite an und gibt dessen ID zurück.
pub fn add_item(
    state: &mut AppState,
    kind: ItemKind,
    stage_pos: glam::Vec2,
) -> anyhow::Result<u64> {
    let prefix = match kind {
        ItemKind::Sprite => "sprite",
        ItemKind::Label => "label",
        ItemKind::Composite => "group",
    };
    let name = format!("{}{}", prefix, state.scene.item_count() + 1);

    let id = state.scene.add_item(
        state.current_composite,
        name,
        kind,
        ItemTransform::new(stage_pos, NEW_ITEM_SIZE),
        DEFAULT_LAYER,
    )?;

    state.selection.set_selection(id, true);
    state.ui.update_current_item_state();
    log::info!("Item {} ({:?}) angelegt", id, kind);
    Ok(id)
}

/// Entfernt alle selektierten Items samt Nachfahren und gibt die entfernten IDs zurück.
pub fn delete_selected(state: &mut AppState) -> Vec<u64> {
    let mut removed = Vec::new();
    for id in state.selection.id_list() {
        removed.extend(state.scene.remove_item(id));
    }
    for id in &removed {
        state.selection.release(*id);
    }

    // Ein gelöschtes Composite kann nicht mehr betreten bleiben
    if !state.scene.contains(state.current_composite) {
        state.current_composite = state.scene.root_id();
        state.flow.clear();
    }

    if !removed.is_empty() {
        state.dirty = true;
        log::info!("{} Items gelöscht", removed.len());
    }
    state.ui.update_current_item_state();
    removed
}

/// Verlässt das aktuelle Composite. Gibt `false` zurück, wenn bereits auf Root-Ebene.
pub fn exit_composite(state: &mut AppState) -> bool {
    let target = match state.flow.pop() {
        Some(FlowAction::EnterComposite { from, .. }) if state.scene.contains(from) => Some(from),
        _ => state
            .scene
            .get_by_unique_id(state.current_composite)
            .and_then(|item| item.parent),
    };

    let Some(target) = target else {
        return false;
    };

    state.current_composite = target;
    state.selection.clear();
    state.ui.update_current_item_state();
    true
}

/// Sperrt oder entsperrt einen Layer; gesperrte Items verlassen die Selektion.
pub fn set_layer_locked(state: &mut AppState, layer: &str, locked: bool) {
    if !state.scene.set_layer_locked(layer, locked) {
        log::warn!("Layer '{}' existiert nicht", layer);
        return;
    }

    if locked {
        for id in state.selection.id_list() {
            if state.scene.is_locked_by_layer(id) {
                state.selection.release(id);
            }
        }
    }
    state.ui.update_current_item_state();
}
