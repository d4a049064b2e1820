use glam::Vec2;
use indexmap::IndexMap;

/// Selektions-Rechteck eines selektierten Items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    /// Abstand Zeiger → Item-Ursprung beim letzten Press
    pub touch_diff: Vec2,
    /// Während eines Drags ausgeblendet
    pub visible: bool,
}

impl Default for SelectionRect {
    fn default() -> Self {
        Self {
            touch_diff: Vec2::ZERO,
            visible: true,
        }
    }
}

/// Auswahlbezogener Anwendungszustand.
///
/// Ein Selektions-Rechteck existiert genau dann, wenn das Item selektiert ist.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    rects: IndexMap<u64, SelectionRect>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            rects: IndexMap::new(),
        }
    }

    /// Gibt zurück, ob das Item selektiert ist.
    pub fn is_selected(&self, id: u64) -> bool {
        self.rects.contains_key(&id)
    }

    /// Anzahl selektierter Items
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Selektierte IDs in Selektionsreihenfolge
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.rects.keys().copied()
    }

    /// Selektierte IDs als Vec (für Schleifen mit mutablem State-Zugriff)
    pub fn id_list(&self) -> Vec<u64> {
        self.rects.keys().copied().collect()
    }

    /// Selektions-Rechteck eines Items
    pub fn rect(&self, id: u64) -> Option<&SelectionRect> {
        self.rects.get(&id)
    }

    /// Mutables Selektions-Rechteck eines Items
    pub fn rect_mut(&mut self, id: u64) -> Option<&mut SelectionRect> {
        self.rects.get_mut(&id)
    }

    /// Selektiert ein Item; mit `remove_others` wird die übrige Selektion verworfen.
    pub fn set_selection(&mut self, id: u64, remove_others: bool) {
        if remove_others {
            self.rects.retain(|selected, _| *selected == id);
        }
        self.rects.entry(id).or_default();
    }

    /// Selektiert mehrere Items auf einmal.
    pub fn set_selections(&mut self, ids: impl IntoIterator<Item = u64>, remove_others: bool) {
        if remove_others {
            self.rects.clear();
        }
        for id in ids {
            self.rects.entry(id).or_default();
        }
    }

    /// Hebt die Selektion eines Items auf. Gibt zurück, ob es selektiert war.
    pub fn release(&mut self, id: u64) -> bool {
        self.rects.shift_remove(&id).is_some()
    }

    /// Hebt die komplette Selektion auf.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Blendet alle Selektions-Rechtecke wieder ein.
    pub fn show_all(&mut self) {
        for rect in self.rects.values_mut() {
            rect.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_selection_with_remove_others_keeps_only_item() {
        let mut selection = SelectionState::new();
        selection.set_selections([1, 2, 3], true);

        selection.set_selection(2, true);

        assert_eq!(selection.id_list(), vec![2]);
    }

    #[test]
    fn set_selection_keeps_existing_rect_state() {
        let mut selection = SelectionState::new();
        selection.set_selection(1, false);
        if let Some(rect) = selection.rect_mut(1) {
            rect.touch_diff = Vec2::new(4.0, 5.0);
        }

        selection.set_selection(1, true);

        assert_eq!(
            selection.rect(1).map(|r| r.touch_diff),
            Some(Vec2::new(4.0, 5.0))
        );
    }

    #[test]
    fn release_preserves_order_of_remaining_items() {
        let mut selection = SelectionState::new();
        selection.set_selections([5, 6, 7], false);

        assert!(selection.release(6));
        assert!(!selection.release(6));
        assert_eq!(selection.id_list(), vec![5, 7]);
    }
}
