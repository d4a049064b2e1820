//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Stage-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Mausrad-Zoom: positive Beträge zoomen heraus, negative hinein.
pub fn zoom_by_scroll(state: &mut AppState, amount: f32, focus_world: Option<glam::Vec2>) {
    if amount == 0.0 {
        return;
    }
    let step = state.options.camera_scroll_zoom_step;
    let factor = if amount > 0.0 { 1.0 / step } else { step };
    zoom_towards(state, factor, focus_world);
}

/// Zentriert die Kamera auf die Items des aktuellen Composites.
///
/// Keine Operation, wenn das Composite leer ist.
pub fn center_on_composite(state: &mut AppState) {
    let children = state.scene.children_of(state.current_composite);
    let mut positions = children
        .iter()
        .filter_map(|id| state.scene.get_by_unique_id(*id))
        .map(|item| item.transform.position);

    let Some(first) = positions.next() else {
        return;
    };
    let (min, max) = positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

    let center = (min + max) * 0.5;
    state.view.camera.look_at(center);

    log::info!(
        "Szenen-Bounds: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zentrum: ({:.1}, {:.1})",
        min.x,
        min.y,
        max.x,
        max.y,
        center.x,
        center.y
    );
}
