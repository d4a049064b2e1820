//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SceneGraph;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewSceneRequested => vec![AppCommand::LoadScene {
            scene: Box::new(SceneGraph::demo()),
        }],
        AppIntent::SaveRequested => vec![AppCommand::SaveScene],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::ItemPressed {
            item_id,
            stage_pos,
            button,
            modifiers,
        } => vec![AppCommand::PressItem {
            item_id,
            stage_pos,
            button,
            modifiers,
        }],
        AppIntent::ItemDragged {
            item_id,
            stage_pos,
            primary_down,
            modifiers,
        } => vec![AppCommand::DragItem {
            item_id,
            stage_pos,
            primary_down,
            modifiers,
        }],
        AppIntent::ItemReleased {
            item_id,
            stage_pos,
            button,
            modifiers,
            tap_count,
        } => {
            let mut commands = vec![AppCommand::ReleaseItem {
                item_id,
                stage_pos,
                button,
                modifiers,
            }];
            // Der Doppelklick folgt dem Release, der ihn abschließt
            if tap_count == 2 {
                commands.push(AppCommand::DoubleClickItem { item_id });
            }
            commands
        }
        AppIntent::EmptySpacePressed {
            stage_pos,
            button,
            modifiers,
        } => vec![AppCommand::PressEmptySpace {
            stage_pos,
            button,
            modifiers,
        }],
        AppIntent::EmptySpaceDragged {
            stage_pos,
            delta_world,
        } => vec![AppCommand::DragEmptySpace {
            stage_pos,
            delta_world,
        }],
        AppIntent::EmptySpaceReleased {
            stage_pos,
            button,
            modifiers,
        } => vec![AppCommand::ReleaseEmptySpace {
            stage_pos,
            button,
            modifiers,
        }],
        AppIntent::PanKeyReleased => vec![AppCommand::ReleasePanKey],
        AppIntent::Scrolled {
            amount,
            modifiers,
            focus_world,
        } => vec![AppCommand::Scroll {
            amount,
            modifiers,
            focus_world,
        }],

        AppIntent::TreeNodeClicked { item_id, additive } => {
            vec![AppCommand::ChooseTreeNode { item_id, additive }]
        }
        AppIntent::AddItemRequested { kind, stage_pos } => {
            vec![AppCommand::AddItem { kind, stage_pos }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedItems],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ExitCompositeRequested => vec![AppCommand::ExitComposite],
        AppIntent::ToggleLayerLockRequested { layer } => {
            let Some(current) = state.scene.layer(&layer) else {
                log::debug!("Layer '{}' unbekannt, Sperr-Umschaltung ignoriert", layer);
                return Vec::new();
            };
            let locked = !current.locked;
            vec![AppCommand::SetLayerLocked { layer, locked }]
        }
        AppIntent::SetGridSizeRequested { size } => vec![AppCommand::SetGridSize { size }],
        AppIntent::ContextMenuClosed => vec![AppCommand::CloseContextMenu],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
    }
}

#[cfg(test)]
mod tests;
