//! Keyboard-Shortcuts für den Viewport.

use crate::app::{AppIntent, AppState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_s, key_n, key_delete, key_escape, key_backspace, space_released) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Delete),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Backspace),
                i.key_released(egui::Key::Space),
            )
        });

    if modifiers.command && key_s {
        events.push(AppIntent::SaveRequested);
    }

    if modifiers.command && key_n {
        events.push(AppIntent::NewSceneRequested);
    }

    if key_delete && !state.selection.is_empty() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_escape {
        if state.ui.context_menu.is_some() {
            events.push(AppIntent::ContextMenuClosed);
        } else {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    if space_released && state.view.camera_pan_on {
        events.push(AppIntent::PanKeyReleased);
    }

    if key_backspace && state.current_composite != state.scene.root_id() {
        events.push(AppIntent::ExitCompositeRequested);
    }

    events
}
