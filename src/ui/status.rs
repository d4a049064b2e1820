//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.scene_loaded {
                ui.label(format!(
                    "Scene: {} | Items: {}",
                    state.scene.name,
                    state.item_count()
                ));
                if state.current_composite != state.scene.root_id() {
                    let name = state
                        .scene
                        .get_by_unique_id(state.current_composite)
                        .map(|item| item.name.as_str())
                        .unwrap_or("?");
                    ui.separator();
                    ui.label(format!("Composite: {}", name));
                }
            } else {
                ui.label("No scene loaded");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();
            ui.label(format!("Selected: {}", state.selection.len()));

            if state.dirty {
                ui.separator();
                ui.label("●");
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Saves: {}", state.scene.save_count()));
            });
        });
    });
}
