use crate::app::CommandLog;
use crate::core::SceneGraph;
use crate::shared::EditorOptions;
use glam::Vec2;

use super::{FlowHistory, MenuVariant, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung (Editor-Session)
pub struct AppState {
    /// Aktuell geladene Szene
    pub scene: SceneGraph,
    /// Ob eine Szene geladen wurde (sonst nur leerer Platzhalter)
    pub scene_loaded: bool,
    /// Aktuell betretenes Composite (Root = Szene selbst)
    pub current_composite: u64,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Navigationsverlauf (Composite betreten/verlassen)
    pub flow: FlowHistory,
    /// Laufzeit-Optionen (Raster, Rotation, Kamera, Farben)
    pub options: EditorOptions,
    /// Ungespeicherte Änderungen durch Drag oder Rotation
    pub dirty: bool,
    /// Ein Item wird gerade mit der Maus gehalten
    pub is_item_touched: bool,
    /// Eine Resize-Geste läuft (blockiert Drag)
    pub is_resizing: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        let scene = SceneGraph::default();
        let current_composite = scene.root_id();
        Self {
            scene,
            scene_loaded: false,
            current_composite,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            flow: FlowHistory::new(),
            options: EditorOptions::default(),
            dirty: false,
            is_item_touched: false,
            is_resizing: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Items zurück (für UI-Anzeige)
    pub fn item_count(&self) -> usize {
        self.scene.item_count()
    }

    /// Aktuelle Rastergröße
    pub fn grid_size(&self) -> u32 {
        self.options.grid_size
    }

    /// Speichert den Datenstand der aktuellen Szene.
    pub fn save_current_scene(&mut self) {
        if !self.scene_loaded {
            log::debug!("Speichern übersprungen: keine Szene geladen");
            return;
        }
        self.scene.save_snapshot();
    }

    /// Öffnet ein Kontextmenü. Gibt `false` zurück, wenn kein Menü angezeigt werden kann.
    pub fn show_context_menu(&mut self, position: Vec2, variant: MenuVariant) -> bool {
        if !self.scene_loaded {
            return false;
        }
        self.ui.open_context_menu(position, variant);
        true
    }

    /// Übernimmt die Live-Transforms aller selektierten Items in deren Daten-Snapshot.
    pub fn flush_selected_items(&mut self) {
        for id in self.selection.id_list() {
            match self.scene.get_mut(id) {
                Some(item) => item.refresh_data(),
                None => log::debug!("Flush übersprungen: Item {} existiert nicht mehr", id),
            }
        }
    }

    /// Betritt ein Composite. Gibt `false` zurück, wenn das Item kein Composite ist.
    pub fn enter_into_composite(&mut self, id: u64) -> bool {
        let is_composite = self
            .scene
            .get_by_unique_id(id)
            .is_some_and(|item| item.is_composite());
        if !is_composite || id == self.current_composite {
            return false;
        }

        self.current_composite = id;
        self.selection.clear();
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
