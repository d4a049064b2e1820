//! Handler für Zeiger-Interaktion auf der Stage (delegiert an den Input-Koordinator).

use glam::Vec2;

use crate::app::input::{InputCoordinator, InputModifiers, PointerButton};
use crate::app::AppState;

/// Press auf ein Item.
pub fn press_item(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    item_id: u64,
    stage_pos: Vec2,
    button: PointerButton,
    modifiers: InputModifiers,
) {
    coordinator.on_press(state, item_id, stage_pos, button, modifiers);
}

/// Drag-Sample auf einem Item.
pub fn drag_item(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    item_id: u64,
    stage_pos: Vec2,
    primary_down: bool,
    modifiers: InputModifiers,
) {
    coordinator.on_drag(state, item_id, stage_pos, primary_down, modifiers);
}

/// Release auf einem Item.
pub fn release_item(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    item_id: u64,
    stage_pos: Vec2,
    button: PointerButton,
    modifiers: InputModifiers,
) {
    coordinator.on_release(state, item_id, stage_pos, button, modifiers);
}

/// Doppelklick auf ein Item.
pub fn double_click_item(coordinator: &mut InputCoordinator, state: &mut AppState, item_id: u64) {
    coordinator.on_double_click(state, item_id);
}

/// Pan-Taste losgelassen.
pub fn release_pan_key(coordinator: &mut InputCoordinator, state: &mut AppState) {
    coordinator.on_pan_key_released(state);
}

/// Mausrad über der Stage.
pub fn scroll(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    amount: f32,
    modifiers: InputModifiers,
    focus_world: Option<Vec2>,
) {
    coordinator.on_scroll(state, amount, modifiers, focus_world);
}

/// Press im leeren Bereich.
pub fn press_empty_space(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    stage_pos: Vec2,
    button: PointerButton,
    modifiers: InputModifiers,
) {
    coordinator.on_empty_space_press(state, stage_pos, button, modifiers);
}

/// Drag im leeren Bereich.
pub fn drag_empty_space(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    stage_pos: Vec2,
    delta_world: Vec2,
) {
    coordinator.on_empty_space_drag(state, stage_pos, delta_world);
}

/// Release im leeren Bereich.
pub fn release_empty_space(
    coordinator: &mut InputCoordinator,
    state: &mut AppState,
    stage_pos: Vec2,
    button: PointerButton,
    modifiers: InputModifiers,
) {
    coordinator.on_empty_space_release(state, stage_pos, button, modifiers);
}
