//! Kontextmenü an der Release-Position (Selektion oder leerer Bereich).

use crate::app::state::MenuVariant;
use crate::app::{AppIntent, AppState};
use crate::core::ItemKind;

/// Zeigt das offene Kontextmenü und gibt die gewählten Aktionen zurück.
pub fn render_context_menu(
    ctx: &egui::Context,
    viewport: egui::Rect,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(request) = state.ui.context_menu else {
        return events;
    };

    let size = glam::Vec2::new(viewport.width(), viewport.height());
    let local = state.view.camera.world_to_screen(request.position, size);
    let anchor = viewport.min + egui::vec2(local.x, local.y);

    let area = egui::Area::new(egui::Id::new("stage_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| match request.variant {
                MenuVariant::Selection => {
                    ui.label(format!("{} selektiert", state.selection.len()));
                    ui.separator();
                    if ui.button("Delete").clicked() {
                        events.push(AppIntent::DeleteSelectedRequested);
                    }
                    if ui.button("Clear Selection").clicked() {
                        events.push(AppIntent::ClearSelectionRequested);
                    }
                }
                MenuVariant::EmptyArea => {
                    for (label, kind) in [
                        ("Add Sprite here", ItemKind::Sprite),
                        ("Add Label here", ItemKind::Label),
                        ("Add Composite here", ItemKind::Composite),
                    ] {
                        if ui.button(label).clicked() {
                            events.push(AppIntent::AddItemRequested {
                                kind,
                                stage_pos: request.position,
                            });
                        }
                    }
                    if state.current_composite != state.scene.root_id() {
                        ui.separator();
                        if ui.button("Exit Composite").clicked() {
                            events.push(AppIntent::ExitCompositeRequested);
                        }
                    }
                }
            });
        });

    if !events.is_empty() || area.response.clicked_elsewhere() {
        events.push(AppIntent::ContextMenuClosed);
    }

    events
}
