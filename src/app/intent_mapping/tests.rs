use crate::app::input::{InputModifiers, PointerButton};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{SceneGraph, DEFAULT_LAYER};

use super::map_intent_to_commands;

#[test]
fn save_requested_maps_to_save_scene() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveScene));
}

#[test]
fn new_scene_requested_loads_demo_scene() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::NewSceneRequested);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::LoadScene { scene } => assert_eq!(scene.item_count(), 6),
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn single_release_maps_to_release_only() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ItemReleased {
            item_id: 4,
            stage_pos: glam::Vec2::ZERO,
            button: PointerButton::Primary,
            modifiers: InputModifiers::default(),
            tap_count: 1,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ReleaseItem { item_id: 4, .. }));
}

#[test]
fn double_tap_release_maps_to_release_then_double_click() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ItemReleased {
            item_id: 4,
            stage_pos: glam::Vec2::ZERO,
            button: PointerButton::Primary,
            modifiers: InputModifiers::default(),
            tap_count: 2,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ReleaseItem { item_id: 4, .. }));
    assert!(matches!(commands[1], AppCommand::DoubleClickItem { item_id: 4 }));
}

#[test]
fn toggle_layer_lock_inverts_current_lock_state() {
    let mut state = AppState::new();
    state.scene = SceneGraph::demo();

    let unlock = map_intent_to_commands(
        &state,
        AppIntent::ToggleLayerLockRequested {
            layer: "Background".to_string(),
        },
    );
    let lock = map_intent_to_commands(
        &state,
        AppIntent::ToggleLayerLockRequested {
            layer: DEFAULT_LAYER.to_string(),
        },
    );

    assert!(matches!(
        &unlock[0],
        AppCommand::SetLayerLocked { locked: false, .. }
    ));
    assert!(matches!(
        &lock[0],
        AppCommand::SetLayerLocked { locked: true, .. }
    ));
}

#[test]
fn toggle_unknown_layer_maps_to_no_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ToggleLayerLockRequested {
            layer: "Nope".to_string(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn tree_node_click_maps_to_choose_tree_node() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TreeNodeClicked {
            item_id: 7,
            additive: true,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::ChooseTreeNode {
            item_id: 7,
            additive: true
        }
    ));
}

#[test]
fn pan_key_released_maps_to_release_pan_key() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PanKeyReleased);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ReleasePanKey));
}
