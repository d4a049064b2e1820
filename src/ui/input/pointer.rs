//! Press/Drag/Release: Routing auf Item oder leeren Bereich.

use super::{map_button, screen_pos_to_world, ActivePointer, InputState, PointerTarget, ViewportContext};
use crate::app::input::PointerButton;
use crate::app::AppIntent;

const BUTTONS: [egui::PointerButton; 3] = [
    egui::PointerButton::Primary,
    egui::PointerButton::Secondary,
    egui::PointerButton::Middle,
];

impl InputState {
    /// Startet eine Geste, wenn im Viewport eine Taste gedrückt wurde.
    /// Gibt `true` zurück, wenn die Geste in diesem Frame begonnen hat.
    pub(crate) fn handle_press(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) -> bool {
        if self.active.is_some() || !ctx.response.contains_pointer() {
            return false;
        }

        let Some(button) = ctx.ui.input(|i| {
            BUTTONS
                .into_iter()
                .find(|b| i.pointer.button_pressed(*b))
                .and_then(map_button)
        }) else {
            return false;
        };
        let Some(pointer_pos) = ctx.ui.input(|i| i.pointer.interact_pos()) else {
            return false;
        };

        let state = ctx.state;
        let stage_pos =
            screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, &state.view.camera);

        // Pan-Gesten laufen immer über den leeren Bereich, auch über Items
        let panning = ctx.modifiers.pan_key || button == PointerButton::Middle;
        let hit = if panning {
            None
        } else {
            state.scene.item_at(state.current_composite, stage_pos)
        };

        let target = match hit {
            Some(item_id) => {
                events.push(AppIntent::ItemPressed {
                    item_id,
                    stage_pos,
                    button,
                    modifiers: ctx.modifiers,
                });
                PointerTarget::Item(item_id)
            }
            None => {
                events.push(AppIntent::EmptySpacePressed {
                    stage_pos,
                    button,
                    modifiers: ctx.modifiers,
                });
                PointerTarget::EmptySpace
            }
        };

        self.active = Some(ActivePointer { target, button });
        true
    }

    /// Meldet Zeigerbewegungen der laufenden Geste.
    pub(crate) fn handle_drag(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let Some(active) = self.active else {
            return;
        };

        let (delta, pointer_pos, primary_down) = ctx.ui.input(|i| {
            (
                i.pointer.delta(),
                i.pointer.latest_pos(),
                i.pointer.primary_down(),
            )
        });
        if delta == egui::Vec2::ZERO {
            return;
        }
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        let camera = &ctx.state.view.camera;
        let stage_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, camera);

        match active.target {
            PointerTarget::Item(item_id) => events.push(AppIntent::ItemDragged {
                item_id,
                stage_pos,
                primary_down,
                modifiers: ctx.modifiers,
            }),
            PointerTarget::EmptySpace => events.push(AppIntent::EmptySpaceDragged {
                stage_pos,
                delta_world: camera.screen_delta_to_world(glam::Vec2::new(delta.x, delta.y)),
            }),
        }
    }

    /// Beendet die Geste beim Loslassen der auslösenden Taste.
    pub(crate) fn handle_release(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let Some(active) = self.active else {
            return;
        };

        let egui_button = match active.button {
            PointerButton::Primary => egui::PointerButton::Primary,
            PointerButton::Secondary => egui::PointerButton::Secondary,
            PointerButton::Middle => egui::PointerButton::Middle,
        };
        let (released, double, pointer_pos) = ctx.ui.input(|i| {
            (
                i.pointer.button_released(egui_button),
                i.pointer.button_double_clicked(egui_button),
                i.pointer.latest_pos(),
            )
        });
        if !released {
            return;
        }
        self.active = None;

        let Some(pointer_pos) = pointer_pos else {
            return;
        };
        let stage_pos = screen_pos_to_world(
            pointer_pos,
            ctx.response,
            ctx.viewport_size,
            &ctx.state.view.camera,
        );

        match active.target {
            PointerTarget::Item(item_id) => events.push(AppIntent::ItemReleased {
                item_id,
                stage_pos,
                button: active.button,
                modifiers: ctx.modifiers,
                tap_count: if double { 2 } else { 1 },
            }),
            PointerTarget::EmptySpace => events.push(AppIntent::EmptySpaceReleased {
                stage_pos,
                button: active.button,
                modifiers: ctx.modifiers,
            }),
        }
    }
}
