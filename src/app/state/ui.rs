use super::ItemsTree;
use glam::Vec2;

/// Variante des Kontextmenüs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    /// Rechtsklick auf ein Item: Befehle für die aktuelle Selektion
    Selection,
    /// Rechtsklick in den leeren Bereich
    EmptyArea,
}

/// Angefordertes Kontextmenü an einer Stage-Position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuRequest {
    /// Position in Stage-Koordinaten
    pub position: Vec2,
    /// Menü-Variante
    pub variant: MenuVariant,
}

/// UI-bezogener Anwendungszustand (Panels, Menüs, Hierarchie-Baum)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Wird bei jeder Aufforderung zum Aktualisieren des Properties-Panels erhöht
    pub item_state_revision: u64,
    /// Offenes Kontextmenü
    pub context_menu: Option<ContextMenuRequest>,
    /// Hierarchie-Baum
    pub items_tree: ItemsTree,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert das Properties-Panel zur Aktualisierung der Item-Daten auf.
    pub fn update_current_item_state(&mut self) {
        self.item_state_revision += 1;
    }

    /// Öffnet ein Kontextmenü an einer Stage-Position.
    pub fn open_context_menu(&mut self, position: Vec2, variant: MenuVariant) {
        self.context_menu = Some(ContextMenuRequest { position, variant });
    }

    /// Schließt ein offenes Kontextmenü.
    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }
}
