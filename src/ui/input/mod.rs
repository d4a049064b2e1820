//! Viewport-Input-Handling: Maus-Events und Mausrad → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `pointer`: Press/Drag/Release auf Items und im leeren Bereich
//! - `scroll`: Mausrad (Rotation bzw. Alt-Zoom, entschieden im Koordinator)

mod pointer;
mod scroll;

use super::drag::draw_marquee_overlay;
use super::keyboard;
use crate::app::input::{InputModifiers, PointerButton};
use crate::app::{AppIntent, AppState};
use crate::core::Camera2D;

/// Ziel der laufenden Zeiger-Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerTarget {
    Item(u64),
    EmptySpace,
}

/// Laufende Zeiger-Geste zwischen Press und Release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePointer {
    pub target: PointerTarget,
    pub button: PointerButton,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub state: &'a AppState,
    pub modifiers: InputModifiers,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    pub(crate) active: Option<ActivePointer>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let viewport_size = [response.rect.width(), response.rect.height()];
        let modifiers = ui.input(|i| InputModifiers {
            shift: i.modifiers.shift,
            alt: i.modifiers.alt,
            command: i.modifiers.command,
            pan_key: i.key_down(egui::Key::Space),
        });

        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            state,
            modifiers,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui, state));

        if state.scene_loaded {
            // Das Zeiger-Delta im Press-Frame stammt noch von vor dem Drücken
            if !self.handle_press(&ctx, &mut events) {
                self.handle_drag(&ctx, &mut events);
            }
            self.handle_release(&ctx, &mut events);
            self.handle_scroll(&ctx, &mut events);
        }

        draw_marquee_overlay(
            state.view.marquee.as_ref(),
            ui,
            response.rect,
            &state.view.camera,
        );

        events
    }
}

/// Rechnet eine Bildschirmposition in Stage-Koordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

/// Übersetzt eine egui-Maustaste.
pub(crate) fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}
