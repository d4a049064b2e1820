//! Overlay der Rechteck-Selektion im leeren Bereich.

use crate::app::state::Marquee;
use crate::core::Camera2D;

/// Zeichnet das Selektions-Rechteck, solange es aufgezogen wird.
pub(super) fn draw_marquee_overlay(
    marquee: Option<&Marquee>,
    ui: &egui::Ui,
    rect: egui::Rect,
    camera: &Camera2D,
) {
    let Some(marquee) = marquee else {
        return;
    };

    let size = glam::Vec2::new(rect.width(), rect.height());
    let to_screen = |world: glam::Vec2| {
        let local = camera.world_to_screen(world, size);
        rect.min + egui::vec2(local.x, local.y)
    };

    let stroke = egui::Stroke::new(1.5, ui.visuals().selection.stroke.color);
    let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.15);
    let screen_rect =
        egui::Rect::from_two_pos(to_screen(marquee.start), to_screen(marquee.current))
            .intersect(rect);

    let painter = ui.painter();
    painter.rect_filled(screen_rect, 0.0, fill);
    painter.rect_stroke(screen_rect, 0.0, stroke, egui::StrokeKind::Inside);
}
