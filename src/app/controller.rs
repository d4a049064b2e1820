//! Application Controller für zentrale Event-Verarbeitung.

use super::input::InputCoordinator;
use super::mediators::{SelectionMediator, TreeSyncMediator};
use super::notifications::{Mediator, Notification, NotificationBus};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events, Input-Koordinator und Mediatoren auf den AppState.
pub struct AppController {
    coordinator: InputCoordinator,
    bus: NotificationBus,
}

impl AppController {
    /// Erstellt einen neuen Controller mit Baum- und Selektions-Mediator.
    pub fn new() -> Self {
        let mut bus = NotificationBus::new();
        bus.register(Box::new(TreeSyncMediator));
        bus.register(Box::new(SelectionMediator));
        Self {
            coordinator: InputCoordinator::new(),
            bus,
        }
    }

    /// Registriert einen zusätzlichen Mediator (nach den Standard-Mediatoren).
    pub fn register_mediator(&mut self, mediator: Box<dyn Mediator>) {
        self.bus.register(mediator);
    }

    /// Lesezugriff auf den Notification-Bus
    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    /// Lesezugriff auf den Input-Koordinator
    pub fn coordinator(&self) -> &InputCoordinator {
        &self.coordinator
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und stellt danach
    /// alle erzeugten Benachrichtigungen zu.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let mut outbox: Vec<Notification> = Vec::new();
        let coordinator = &mut self.coordinator;

        match command {
            // === Szene ===
            AppCommand::LoadScene { scene } => handlers::scene::load(state, *scene, &mut outbox),
            AppCommand::SaveScene => handlers::scene::save(state),
            AppCommand::AddItem { kind, stage_pos } => {
                handlers::scene::add_item(state, kind, stage_pos, &mut outbox)?
            }
            AppCommand::DeleteSelectedItems => handlers::scene::delete_selected(state, &mut outbox),
            AppCommand::ClearSelection => handlers::scene::clear_selection(state),
            AppCommand::SetLayerLocked { layer, locked } => {
                handlers::scene::set_layer_locked(state, &layer, locked)
            }

            // === Zeiger-Interaktion ===
            AppCommand::PressItem {
                item_id,
                stage_pos,
                button,
                modifiers,
            } => handlers::interaction::press_item(
                coordinator,
                state,
                item_id,
                stage_pos,
                button,
                modifiers,
            ),
            AppCommand::DragItem {
                item_id,
                stage_pos,
                primary_down,
                modifiers,
            } => handlers::interaction::drag_item(
                coordinator,
                state,
                item_id,
                stage_pos,
                primary_down,
                modifiers,
            ),
            AppCommand::ReleaseItem {
                item_id,
                stage_pos,
                button,
                modifiers,
            } => handlers::interaction::release_item(
                coordinator,
                state,
                item_id,
                stage_pos,
                button,
                modifiers,
            ),
            AppCommand::DoubleClickItem { item_id } => {
                handlers::interaction::double_click_item(coordinator, state, item_id)
            }
            AppCommand::ReleasePanKey => handlers::interaction::release_pan_key(coordinator, state),
            AppCommand::Scroll {
                amount,
                modifiers,
                focus_world,
            } => handlers::interaction::scroll(coordinator, state, amount, modifiers, focus_world),
            AppCommand::PressEmptySpace {
                stage_pos,
                button,
                modifiers,
            } => handlers::interaction::press_empty_space(
                coordinator,
                state,
                stage_pos,
                button,
                modifiers,
            ),
            AppCommand::DragEmptySpace {
                stage_pos,
                delta_world,
            } => handlers::interaction::drag_empty_space(coordinator, state, stage_pos, delta_world),
            AppCommand::ReleaseEmptySpace {
                stage_pos,
                button,
                modifiers,
            } => handlers::interaction::release_empty_space(
                coordinator,
                state,
                stage_pos,
                button,
                modifiers,
            ),

            // === Hierarchie-Baum & Navigation ===
            AppCommand::ChooseTreeNode { item_id, additive } => {
                handlers::tree::choose_node(state, item_id, additive, &mut outbox)
            }
            AppCommand::ExitComposite => handlers::navigation::exit_composite(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetGridSize { size } => handlers::view::set_grid_size(state, size),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::CloseContextMenu => handlers::dialog::close_context_menu(state),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        if !outbox.is_empty() {
            self.bus.dispatch(outbox, state);
        }

        Ok(())
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
