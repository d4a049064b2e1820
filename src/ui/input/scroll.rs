//! Mausrad über dem Viewport.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet eine Mausrad-Raste; positive Beträge entsprechen Scrollen nach unten.
    pub(crate) fn handle_scroll(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.contains_pointer() {
            return;
        }

        let scroll = ctx.ui.input(|i| i.raw_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let focus_world = ctx.response.hover_pos().map(|pos| {
            screen_pos_to_world(pos, ctx.response, ctx.viewport_size, &ctx.state.view.camera)
        });
        events.push(AppIntent::Scrolled {
            amount: -scroll.signum(),
            modifiers: ctx.modifiers,
            focus_world,
        });
    }
}
