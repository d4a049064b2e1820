//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};
use crate::core::ItemKind;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Scene").clicked() {
                    events.push(AppIntent::NewSceneRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.scene_loaded, egui::Button::new("Save (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let center = state.view.camera.position;
                for (label, kind) in [
                    ("Add Sprite", ItemKind::Sprite),
                    ("Add Label", ItemKind::Label),
                    ("Add Composite", ItemKind::Composite),
                ] {
                    if ui
                        .add_enabled(state.scene_loaded, egui::Button::new(label))
                        .clicked()
                    {
                        events.push(AppIntent::AddItemRequested {
                            kind,
                            stage_pos: center,
                        });
                        ui.close();
                    }
                }

                ui.separator();

                if ui
                    .add_enabled(!state.selection.is_empty(), egui::Button::new("Delete (Del)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                if ui.button("Clear Selection (Esc)").clicked() {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }

                let nested = state.current_composite != state.scene.root_id();
                if ui
                    .add_enabled(nested, egui::Button::new("Exit Composite (Backspace)"))
                    .clicked()
                {
                    events.push(AppIntent::ExitCompositeRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
