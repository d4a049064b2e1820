//! Properties-Panel (rechte Seitenleiste) mit den Daten der Selektion.

use crate::app::{AppIntent, AppState};
use crate::core::{ItemKind, SceneItem};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(200.0)
        .min_width(160.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let selected = state.selection.id_list();
            match selected.as_slice() {
                [] => {
                    ui.label("Keine Selektion");
                }
                [id] => render_single_item(ui, state, *id),
                many => {
                    ui.label(format!("{} Items selektiert", many.len()));
                }
            }

            ui.separator();
            render_grid_selector(ui, state, &mut events);
        });

    events
}

fn render_single_item(ui: &mut egui::Ui, state: &AppState, id: u64) {
    let Some(item) = state.scene.get_by_unique_id(id) else {
        ui.label(format!("Item {} existiert nicht mehr", id));
        return;
    };

    let kind = match item.kind {
        ItemKind::Sprite => "Sprite",
        ItemKind::Label => "Label",
        ItemKind::Composite => "Composite",
    };
    ui.label(format!("Name: {}", item.name));
    ui.label(format!("ID: {} ({})", item.id, kind));
    ui.label(format!("Layer: {}", item.layer));
    for line in transform_lines(item) {
        ui.label(line);
    }
    ui.label(format!(
        "Größe: {:.0} × {:.0}",
        item.transform.size.x, item.transform.size.y
    ));
}

/// Position und Rotation aus der Live-Transformation (nicht aus dem Snapshot).
fn transform_lines(item: &SceneItem) -> [String; 2] {
    [
        format!(
            "Position: ({:.1}, {:.1})",
            item.transform.position.x, item.transform.position.y
        ),
        format!("Rotation: {:.1}°", item.transform.rotation),
    ]
}

fn render_grid_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Raster");
    let mut grid = state.grid_size();
    if ui
        .add(egui::DragValue::new(&mut grid).range(1..=256).suffix(" px"))
        .changed()
    {
        events.push(AppIntent::SetGridSizeRequested { size: grid });
    }
}
