//! Flaches Painting der Stage: Items, Selektions-Rechtecke und optionales Raster.

use crate::app::AppState;
use crate::core::SceneItem;

fn color_from(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Zeichnet die Items des aktuellen Composites in das Viewport-Rechteck.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    if !state.scene_loaded {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No scene loaded. Use File → New Scene",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
        return;
    }

    if state.options.show_grid {
        paint_grid(painter, rect, state);
    }

    let size = glam::Vec2::new(rect.width(), rect.height());
    let camera = &state.view.camera;
    let item_rect = |item: &SceneItem| {
        let min = camera.world_to_screen(item.transform.position, size);
        let max = camera.world_to_screen(item.transform.position + item.transform.size, size);
        egui::Rect::from_two_pos(
            rect.min + egui::vec2(min.x, min.y),
            rect.min + egui::vec2(max.x, max.y),
        )
    };

    let children = state.scene.children_of(state.current_composite);
    let items = children
        .iter()
        .filter_map(|id| state.scene.get_by_unique_id(*id))
        .filter(|item| state.scene.layer(&item.layer).is_none_or(|l| l.visible));

    for item in items {
        let fill = if state.scene.is_locked_by_layer(item.id) {
            color_from(state.options.item_color_locked)
        } else {
            color_from(state.options.item_color_default)
        };
        let screen = item_rect(item);
        painter.rect_filled(screen, 2.0, fill);
        painter.text(
            screen.left_top() + egui::vec2(3.0, 2.0),
            egui::Align2::LEFT_TOP,
            format!("{} {:.0}°", item.name, item.transform.rotation),
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
    }

    let stroke = egui::Stroke::new(1.5, color_from(state.options.selection_rect_color));
    let padding = state.options.selection_rect_padding_px;
    for id in state.selection.ids() {
        let visible = state.selection.rect(id).is_some_and(|r| r.visible);
        let Some(item) = state.scene.get_by_unique_id(id).filter(|_| visible) else {
            continue;
        };
        painter.rect_stroke(
            item_rect(item).expand(padding),
            0.0,
            stroke,
            egui::StrokeKind::Outside,
        );
    }
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let camera = &state.view.camera;
    let spacing = state.grid_size().max(1) as f32 * camera.zoom;
    // Zu dichte Raster werden nicht gezeichnet
    if spacing < 6.0 {
        return;
    }

    let size = glam::Vec2::new(rect.width(), rect.height());
    let origin = camera.world_to_screen(glam::Vec2::ZERO, size);
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(40));

    let mut x = origin.x.rem_euclid(spacing);
    while x < rect.width() {
        painter.vline(rect.min.x + x, rect.y_range(), stroke);
        x += spacing;
    }
    let mut y = origin.y.rem_euclid(spacing);
    while y < rect.height() {
        painter.hline(rect.x_range(), rect.min.y + y, stroke);
        y += spacing;
    }
}
