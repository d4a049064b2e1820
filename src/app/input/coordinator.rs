//! Input-Koordinator: übersetzt Zeiger-Events auf Items und leeren Bereich
//! in Selektion, Drag, Rotation, Pan und Composite-Navigation.

use glam::Vec2;

use super::{GestureState, InputModifiers, PointerButton};
use crate::app::state::{FlowAction, Marquee, MenuVariant};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::snap_to_grid;

/// Hält den Gesten-Zustand zwischen Press, Drag und Release.
#[derive(Debug, Default)]
pub struct InputCoordinator {
    gesture: GestureState,
    /// Pan-Geste im leeren Bereich läuft (zwischen Press und Release)
    panning: bool,
}

impl InputCoordinator {
    /// Erstellt einen Koordinator ohne aktive Geste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Gesten-Zustand
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Pan-Taste losgelassen: beendet den Pan-Modus, sofern keine Pan-Geste läuft.
    pub fn on_pan_key_released(&mut self, state: &mut AppState) {
        if self.panning || !state.view.camera_pan_on {
            return;
        }
        state.view.camera_pan_on = false;
        log::debug!("Pan-Modus beendet (Pan-Taste losgelassen)");
    }

    /// Press auf ein Item. Gibt `true` zurück, wenn das Item jetzt gehalten wird.
    pub fn on_press(
        &mut self,
        state: &mut AppState,
        item_id: u64,
        stage_pos: Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    ) -> bool {
        let Some(item) = state.scene.get_mut(item_id) else {
            log::debug!("Press ignoriert: Item {} existiert nicht", item_id);
            return false;
        };
        item.refresh_data();

        let was_selected = state.selection.is_selected(item_id);
        self.gesture = GestureState::pressed(item_id, was_selected, stage_pos);
        log::debug!("Press auf Item {} ({:?})", item_id, button);

        if modifiers.shift {
            // Abwählen erst beim Release, falls nicht gezogen wurde
            if !was_selected {
                state.selection.set_selection(item_id, false);
            }
        } else if state.scene.is_locked_by_layer(item_id) {
            state.selection.clear();
        } else {
            state.selection.set_selection(item_id, true);
        }

        if state.view.camera_pan_on {
            return false;
        }

        for id in state.selection.id_list() {
            let Some(origin) = state
                .scene
                .get_by_unique_id(id)
                .map(|item| item.transform.position)
            else {
                continue;
            };
            if let Some(rect) = state.selection.rect_mut(id) {
                rect.touch_diff = stage_pos - origin;
            }
        }

        state.is_item_touched = true;
        state.ui.update_current_item_state();
        true
    }

    /// Drag-Sample für das gehaltene Item.
    pub fn on_drag(
        &mut self,
        state: &mut AppState,
        item_id: u64,
        stage_pos: Vec2,
        primary_down: bool,
        modifiers: InputModifiers,
    ) {
        if self.gesture.advance(item_id, stage_pos) {
            log::debug!(
                "Drag gestartet, Achse {:?}",
                self.gesture.reduced_move_axis()
            );
        }

        if state.is_item_touched && !state.is_resizing && primary_down {
            state.dirty = true;
            let grid = state.grid_size();

            let target = match (modifiers.command, self.gesture.drag_start_position()) {
                (true, Some(anchor)) => {
                    let mask = self
                        .gesture
                        .reduced_move_axis()
                        .map(|axis| axis.mask())
                        .unwrap_or(Vec2::ONE);
                    anchor + mask * (stage_pos - anchor)
                }
                _ => snap_to_grid(stage_pos, grid),
            };

            for id in state.selection.id_list() {
                let Some(rect) = state.selection.rect_mut(id) else {
                    continue;
                };
                rect.touch_diff = snap_to_grid(rect.touch_diff, grid);
                rect.visible = false;
                let diff = rect.touch_diff;

                match state.scene.get_mut(id) {
                    Some(item) => item.transform.position = target - diff,
                    None => log::debug!("Drag übersprungen: Item {} existiert nicht mehr", id),
                }
            }
        }

        state.ui.update_current_item_state();
    }

    /// Release über einem Item.
    pub fn on_release(
        &mut self,
        state: &mut AppState,
        item_id: u64,
        stage_pos: Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    ) {
        if self.gesture.was_selected_at_press() && !self.gesture.is_dragging() && modifiers.shift
        {
            state.selection.release(item_id);
        }

        state.flush_selected_items();
        self.gesture = GestureState::Idle;

        if state.view.camera_pan_on {
            return;
        }

        if button == PointerButton::Secondary {
            state.show_context_menu(stage_pos, MenuVariant::Selection);
        }

        state.selection.show_all();
        if state.dirty {
            state.save_current_scene();
        }
        state.dirty = false;
        state.is_item_touched = false;
        state.ui.update_current_item_state();
    }

    /// Doppelklick auf ein Item: betritt es, falls es ein Composite ist.
    pub fn on_double_click(&mut self, state: &mut AppState, item_id: u64) -> bool {
        self.gesture = GestureState::Idle;

        let from = state.current_composite;
        if !state.enter_into_composite(item_id) {
            return false;
        }

        state
            .flow
            .set_pending(FlowAction::EnterComposite { from, to: item_id });
        state.flow.apply_pending();
        use_cases::camera::center_on_composite(state);
        state.ui.update_current_item_state();
        log::info!("Composite {} betreten", item_id);
        true
    }

    /// Mausrad: rotiert gehaltene Items oder zoomt mit Alt. Meldet das Event nie als behandelt.
    pub fn on_scroll(
        &mut self,
        state: &mut AppState,
        amount: f32,
        modifiers: InputModifiers,
        focus_world: Option<Vec2>,
    ) -> bool {
        if amount == 0.0 {
            return false;
        }

        if state.is_item_touched {
            let degrees = state.options.rotation_step(modifiers.shift) * amount.signum();
            for id in state.selection.id_list() {
                if let Some(item) = state.scene.get_mut(id) {
                    item.rotate_by(degrees);
                }
            }
            state.dirty = true;
            state.ui.update_current_item_state();
        } else if modifiers.alt {
            use_cases::camera::zoom_by_scroll(state, amount, focus_world);
        }

        false
    }

    /// Press in den leeren Bereich: Pan starten oder Rechteck-Selektion beginnen.
    pub fn on_empty_space_press(
        &mut self,
        state: &mut AppState,
        stage_pos: Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    ) {
        self.gesture = GestureState::Idle;

        if modifiers.pan_key || button == PointerButton::Middle {
            state.view.camera_pan_on = true;
            self.panning = true;
            return;
        }

        if button == PointerButton::Primary {
            if !modifiers.shift {
                use_cases::selection::clear_selection(state);
            }
            state.view.marquee = Some(Marquee {
                start: stage_pos,
                current: stage_pos,
            });
        }
    }

    /// Drag im leeren Bereich: Kamera schwenken oder Rechteck aufziehen.
    pub fn on_empty_space_drag(&mut self, state: &mut AppState, stage_pos: Vec2, delta_world: Vec2) {
        if state.view.camera_pan_on {
            use_cases::camera::pan(state, -delta_world);
            return;
        }

        if let Some(marquee) = state.view.marquee.as_mut() {
            marquee.current = stage_pos;
        }
    }

    /// Release im leeren Bereich.
    pub fn on_empty_space_release(
        &mut self,
        state: &mut AppState,
        stage_pos: Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    ) {
        self.panning = false;

        if button == PointerButton::Secondary {
            state.view.marquee = None;
            use_cases::selection::clear_selection(state);
            if state.show_context_menu(stage_pos, MenuVariant::EmptyArea) {
                return;
            }
        }

        if state.view.camera_pan_on {
            state.view.camera_pan_on = modifiers.pan_key;
            return;
        }

        if let Some(marquee) = state.view.marquee.take() {
            use_cases::selection::select_items_in_rect(state, marquee.start, stage_pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::scene::load_scene;
    use crate::core::SceneGraph;
    use approx::assert_relative_eq;

    const NONE: InputModifiers = InputModifiers {
        shift: false,
        alt: false,
        command: false,
        pan_key: false,
    };

    fn setup() -> (InputCoordinator, AppState) {
        let mut state = AppState::new();
        load_scene(&mut state, SceneGraph::demo());
        (InputCoordinator::new(), state)
    }

    fn id_of(state: &AppState, name: &str) -> u64 {
        state
            .scene
            .items()
            .find(|item| item.name == name)
            .map(|item| item.id)
            .expect("Item sollte existieren")
    }

    fn position_of(state: &AppState, id: u64) -> Vec2 {
        state
            .scene
            .get_by_unique_id(id)
            .expect("Item sollte existieren")
            .transform
            .position
    }

    #[test]
    fn press_selects_item_and_records_touch_offset() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");

        let handled = coordinator.on_press(
            &mut state,
            hero,
            Vec2::new(-90.0, 5.0),
            PointerButton::Primary,
            NONE,
        );

        assert!(handled);
        assert!(state.is_item_touched);
        assert_eq!(state.selection.id_list(), vec![hero]);
        let rect = state.selection.rect(hero).expect("Rechteck sollte existieren");
        assert_eq!(rect.touch_diff, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn press_on_locked_item_clears_selection() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        let sky = id_of(&state, "sky");
        state.selection.set_selection(hero, true);

        coordinator.on_press(&mut state, sky, Vec2::ZERO, PointerButton::Primary, NONE);

        assert!(state.selection.is_empty());
    }

    #[test]
    fn press_while_panning_is_not_handled() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        state.view.camera_pan_on = true;

        let handled =
            coordinator.on_press(&mut state, hero, Vec2::ZERO, PointerButton::Primary, NONE);

        assert!(!handled);
        assert!(!state.is_item_touched);
        assert!(state.selection.is_selected(hero));
    }

    #[test]
    fn shift_click_toggles_off_only_without_drag() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        let title = id_of(&state, "title");
        state.selection.set_selections([hero, title], true);
        let shift = InputModifiers::shift();

        coordinator.on_press(&mut state, hero, Vec2::ZERO, PointerButton::Primary, shift);
        assert_eq!(state.selection.len(), 2);
        coordinator.on_release(&mut state, hero, Vec2::ZERO, PointerButton::Primary, shift);
        assert_eq!(state.selection.id_list(), vec![title]);

        coordinator.on_press(&mut state, title, Vec2::ZERO, PointerButton::Primary, shift);
        coordinator.on_drag(&mut state, title, Vec2::new(5.0, 0.0), true, shift);
        coordinator.on_release(&mut state, title, Vec2::new(5.0, 0.0), PointerButton::Primary, shift);
        assert!(state.selection.is_selected(title));
    }

    #[test]
    fn drag_snaps_target_to_grid_and_hides_rects() {
        let (mut coordinator, mut state) = setup();
        state.options.grid_size = 10;
        let hero = id_of(&state, "hero");

        coordinator.on_press(
            &mut state,
            hero,
            Vec2::new(-95.0, 3.0),
            PointerButton::Primary,
            NONE,
        );
        coordinator.on_drag(&mut state, hero, Vec2::new(17.0, 23.0), true, NONE);

        // touch_diff (5, 3) → (0, 0); Ziel floor((17, 23) / 10) * 10
        assert_eq!(position_of(&state, hero), Vec2::new(10.0, 20.0));
        assert!(state.dirty);
        let rect = state.selection.rect(hero).expect("Rechteck sollte existieren");
        assert!(!rect.visible);
    }

    #[test]
    fn drag_without_primary_button_only_refreshes_panel() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        coordinator.on_press(&mut state, hero, Vec2::new(-100.0, 0.0), PointerButton::Primary, NONE);
        let revision = state.ui.item_state_revision;

        coordinator.on_drag(&mut state, hero, Vec2::new(50.0, 50.0), false, NONE);

        assert_eq!(position_of(&state, hero), Vec2::new(-100.0, 0.0));
        assert!(!state.dirty);
        assert_eq!(state.ui.item_state_revision, revision + 1);
    }

    #[test]
    fn command_drag_moves_along_first_dominant_axis() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        let ctrl = InputModifiers::command();

        coordinator.on_press(&mut state, hero, Vec2::new(-100.0, 0.0), PointerButton::Primary, ctrl);
        coordinator.on_drag(&mut state, hero, Vec2::new(-70.0, 4.0), true, ctrl);
        assert_eq!(position_of(&state, hero), Vec2::new(-70.0, 0.0));

        // Achse bleibt horizontal, auch wenn jetzt vertikal dominiert
        coordinator.on_drag(&mut state, hero, Vec2::new(-90.0, 80.0), true, ctrl);
        assert_eq!(position_of(&state, hero), Vec2::new(-90.0, 0.0));
    }

    #[test]
    fn release_after_drag_saves_and_clears_flags() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");

        coordinator.on_press(&mut state, hero, Vec2::new(-100.0, 0.0), PointerButton::Primary, NONE);
        coordinator.on_drag(&mut state, hero, Vec2::new(0.0, 0.0), true, NONE);
        coordinator.on_release(&mut state, hero, Vec2::new(0.0, 0.0), PointerButton::Primary, NONE);

        assert_eq!(state.scene.save_count(), 1);
        assert!(!state.dirty);
        assert!(!state.is_item_touched);
        assert_eq!(*coordinator.gesture(), GestureState::Idle);
        let saved = state.scene.saved_data(hero).expect("Daten sollten gespeichert sein");
        assert_eq!(saved.position, Vec2::new(0.0, 0.0));
        assert!(state.selection.rect(hero).is_some_and(|rect| rect.visible));
    }

    #[test]
    fn secondary_release_opens_selection_menu() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");

        coordinator.on_press(&mut state, hero, Vec2::ZERO, PointerButton::Secondary, NONE);
        coordinator.on_release(&mut state, hero, Vec2::new(3.0, 4.0), PointerButton::Secondary, NONE);

        let menu = state.ui.context_menu.expect("Kontextmenü sollte offen sein");
        assert_eq!(menu.variant, MenuVariant::Selection);
        assert_eq!(menu.position, Vec2::new(3.0, 4.0));
        assert_eq!(state.scene.save_count(), 0);
    }

    #[test]
    fn scroll_rotates_touched_selection() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        coordinator.on_press(&mut state, hero, Vec2::ZERO, PointerButton::Primary, NONE);

        assert!(!coordinator.on_scroll(&mut state, -2.0, NONE, None));
        assert!(!coordinator.on_scroll(&mut state, 1.0, InputModifiers::shift(), None));

        let rotation = state
            .scene
            .get_by_unique_id(hero)
            .expect("Item sollte existieren")
            .transform
            .rotation;
        assert_relative_eq!(rotation, 29.0);
        assert!(state.dirty);
    }

    #[test]
    fn scroll_with_alt_zooms_when_nothing_is_touched() {
        let (mut coordinator, mut state) = setup();
        let zoom = state.view.camera.zoom;

        coordinator.on_scroll(&mut state, 1.0, NONE, None);
        assert_relative_eq!(state.view.camera.zoom, zoom);

        coordinator.on_scroll(&mut state, 1.0, InputModifiers::alt(), None);
        assert!(state.view.camera.zoom < zoom);
    }

    #[test]
    fn double_click_on_composite_enters_it() {
        let (mut coordinator, mut state) = setup();
        let house = id_of(&state, "house");
        let hero = id_of(&state, "hero");

        assert!(!coordinator.on_double_click(&mut state, hero));
        assert!(coordinator.on_double_click(&mut state, house));

        assert_eq!(state.current_composite, house);
        assert_eq!(
            state.flow.entries(),
            &[FlowAction::EnterComposite {
                from: state.scene.root_id(),
                to: house
            }]
        );
    }

    #[test]
    fn empty_space_marquee_selects_unlocked_items() {
        let (mut coordinator, mut state) = setup();

        coordinator.on_empty_space_press(
            &mut state,
            Vec2::new(-400.0, -300.0),
            PointerButton::Primary,
            NONE,
        );
        coordinator.on_empty_space_drag(&mut state, Vec2::new(0.0, 10.0), Vec2::ZERO);
        coordinator.on_empty_space_release(
            &mut state,
            Vec2::new(0.0, 10.0),
            PointerButton::Primary,
            NONE,
        );

        let hero = id_of(&state, "hero");
        let title = id_of(&state, "title");
        assert_eq!(state.selection.id_list(), vec![hero, title]);
        assert!(state.view.marquee.is_none());
    }

    #[test]
    fn pan_stays_on_while_pan_key_is_held() {
        let (mut coordinator, mut state) = setup();
        let space = InputModifiers {
            pan_key: true,
            ..NONE
        };
        let start = state.view.camera.position;

        coordinator.on_empty_space_press(&mut state, Vec2::ZERO, PointerButton::Primary, space);
        coordinator.on_empty_space_drag(&mut state, Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(state.view.camera.position, start - Vec2::new(10.0, 0.0));

        coordinator.on_empty_space_release(&mut state, Vec2::ZERO, PointerButton::Primary, space);
        assert!(state.view.camera_pan_on);
        coordinator.on_empty_space_release(&mut state, Vec2::ZERO, PointerButton::Primary, NONE);
        assert!(!state.view.camera_pan_on);
    }

    #[test]
    fn pan_key_release_ends_pan_mode_after_gesture() {
        let (mut coordinator, mut state) = setup();
        let space = InputModifiers {
            pan_key: true,
            ..NONE
        };

        coordinator.on_empty_space_press(&mut state, Vec2::ZERO, PointerButton::Primary, space);
        coordinator.on_pan_key_released(&mut state);
        assert!(state.view.camera_pan_on, "laufende Pan-Geste bleibt aktiv");

        coordinator.on_empty_space_release(&mut state, Vec2::ZERO, PointerButton::Primary, space);
        assert!(state.view.camera_pan_on);
        coordinator.on_pan_key_released(&mut state);
        assert!(!state.view.camera_pan_on);
    }

    #[test]
    fn drag_while_resizing_only_refreshes_panel() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        coordinator.on_press(&mut state, hero, Vec2::new(-100.0, 0.0), PointerButton::Primary, NONE);
        state.is_resizing = true;
        let revision = state.ui.item_state_revision;

        coordinator.on_drag(&mut state, hero, Vec2::new(40.0, 40.0), true, NONE);

        assert_eq!(position_of(&state, hero), Vec2::new(-100.0, 0.0));
        assert!(!state.dirty);
        assert_eq!(state.ui.item_state_revision, revision + 1);
    }

    #[test]
    fn drag_without_touched_item_only_refreshes_panel() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        state.view.camera_pan_on = true;
        let handled = coordinator.on_press(
            &mut state,
            hero,
            Vec2::new(-100.0, 0.0),
            PointerButton::Primary,
            NONE,
        );
        assert!(!handled);
        let revision = state.ui.item_state_revision;

        coordinator.on_drag(&mut state, hero, Vec2::new(40.0, 40.0), true, NONE);

        assert_eq!(position_of(&state, hero), Vec2::new(-100.0, 0.0));
        assert!(!state.dirty);
        assert_eq!(state.ui.item_state_revision, revision + 1);
    }

    #[test]
    fn empty_space_secondary_release_opens_empty_area_menu() {
        let (mut coordinator, mut state) = setup();
        let hero = id_of(&state, "hero");
        state.selection.set_selection(hero, true);

        coordinator.on_empty_space_release(&mut state, Vec2::ONE, PointerButton::Secondary, NONE);

        assert!(state.selection.is_empty());
        let menu = state.ui.context_menu.expect("Kontextmenü sollte offen sein");
        assert_eq!(menu.variant, MenuVariant::EmptyArea);
    }
}
