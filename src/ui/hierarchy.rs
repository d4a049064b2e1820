//! Hierarchie-Panel (linke Seitenleiste) mit dem Items-Baum und den Layern.

use crate::app::state::TreeNode;
use crate::app::{AppIntent, AppState};

/// Rendert den Hierarchie-Baum und die Layer-Liste.
pub fn render_hierarchy_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("hierarchy_panel")
        .default_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Hierarchie");
            ui.separator();

            let additive = ui.input(|i| i.modifiers.command || i.modifiers.shift);
            egui::ScrollArea::vertical()
                .id_salt("items_tree")
                .max_height(ui.available_height() * 0.6)
                .show(ui, |ui| {
                    for root in state.ui.items_tree.roots() {
                        render_node(ui, root, state, additive, &mut events);
                    }
                });

            ui.separator();
            ui.heading("Layer");
            for layer in state.scene.layers() {
                ui.horizontal(|ui| {
                    let icon = if layer.locked { "🔒" } else { "🔓" };
                    if ui.button(icon).clicked() {
                        events.push(AppIntent::ToggleLayerLockRequested {
                            layer: layer.name.clone(),
                        });
                    }
                    ui.label(&layer.name);
                });
            }
        });

    events
}

fn render_node(
    ui: &mut egui::Ui,
    node: &TreeNode,
    state: &AppState,
    additive: bool,
    events: &mut Vec<AppIntent>,
) {
    let selected = state.ui.items_tree.is_selected(node.payload);

    if node.children.is_empty() {
        if ui.selectable_label(selected, &node.label).clicked() {
            events.push(AppIntent::TreeNodeClicked {
                item_id: node.payload,
                additive,
            });
        }
        return;
    }

    let id = ui.make_persistent_id(("tree_node", node.payload));
    egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, true)
        .show_header(ui, |ui| {
            if ui.selectable_label(selected, &node.label).clicked() {
                events.push(AppIntent::TreeNodeClicked {
                    item_id: node.payload,
                    additive,
                });
            }
        })
        .body(|ui| {
            for child in &node.children {
                render_node(ui, child, state, additive, events);
            }
        });
}
