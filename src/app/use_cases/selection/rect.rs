//! Use-Case: Rechteck-Selektion im leeren Bereich.

use crate::AppState;

/// Selektiert alle ungesperrten Items des aktuellen Composites im Rechteck (inkl. Rand).
///
/// Die Treffer werden zur bestehenden Selektion hinzugefügt.
pub fn select_items_in_rect(state: &mut AppState, corner_a: glam::Vec2, corner_b: glam::Vec2) {
    let hits = state
        .scene
        .items_within_rect(state.current_composite, corner_a, corner_b);
    log::debug!("Rechteck-Selektion: {} Treffer", hits.len());

    state.selection.set_selections(hits, false);
    state.ui.update_current_item_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemKind, ItemTransform, SceneGraph, DEFAULT_LAYER};

    fn with_row_of_items() -> (AppState, Vec<u64>) {
        let mut scene = SceneGraph::new("row");
        let root = scene.root_id();
        let ids = (0..3)
            .map(|i| {
                scene
                    .add_item(
                        root,
                        format!("item{i}"),
                        ItemKind::Sprite,
                        ItemTransform::new(
                            glam::Vec2::new(i as f32 * 10.0, 0.0),
                            glam::Vec2::ONE,
                        ),
                        DEFAULT_LAYER,
                    )
                    .expect("Item sollte angelegt werden")
            })
            .collect();

        let mut state = AppState::new();
        state.current_composite = scene.root_id();
        state.scene = scene;
        (state, ids)
    }

    #[test]
    fn select_items_in_rect_selects_items_inside_bounds() {
        let (mut state, ids) = with_row_of_items();

        select_items_in_rect(
            &mut state,
            glam::Vec2::new(15.0, 1.0),
            glam::Vec2::new(-1.0, -1.0),
        );

        assert!(state.selection.is_selected(ids[0]));
        assert!(state.selection.is_selected(ids[1]));
        assert!(!state.selection.is_selected(ids[2]));
    }

    #[test]
    fn select_items_in_rect_keeps_previous_selection() {
        let (mut state, ids) = with_row_of_items();
        state.selection.set_selection(ids[2], true);

        select_items_in_rect(&mut state, glam::Vec2::new(-1.0, -1.0), glam::Vec2::new(1.0, 1.0));

        assert_eq!(state.selection.id_list(), vec![ids[2], ids[0]]);
    }
}
