use crate::app::input::{InputModifiers, PointerButton};
use crate::core::{ItemKind, SceneGraph};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Szene ersetzen und `SceneLoaded` melden
    LoadScene { scene: Box<SceneGraph> },
    /// Aktuelle Szene speichern
    SaveScene,
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    /// Input-Coordinator: Press auf Item
    PressItem {
        item_id: u64,
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Input-Coordinator: Drag-Sample auf Item
    DragItem {
        item_id: u64,
        stage_pos: glam::Vec2,
        primary_down: bool,
        modifiers: InputModifiers,
    },
    /// Input-Coordinator: Release auf Item
    ReleaseItem {
        item_id: u64,
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Input-Coordinator: Doppelklick auf Item
    DoubleClickItem { item_id: u64 },
    /// Input-Coordinator: Press im leeren Bereich
    PressEmptySpace {
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Input-Coordinator: Drag im leeren Bereich
    DragEmptySpace {
        stage_pos: glam::Vec2,
        delta_world: glam::Vec2,
    },
    /// Input-Coordinator: Release im leeren Bereich
    ReleaseEmptySpace {
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Input-Coordinator: Pan-Taste losgelassen
    ReleasePanKey,
    /// Input-Coordinator: Mausrad
    Scroll {
        amount: f32,
        modifiers: InputModifiers,
        focus_world: Option<glam::Vec2>,
    },

    /// Baum-Selektion ändern und `TreeSelectionChanged` melden
    ChooseTreeNode { item_id: u64, additive: bool },

    /// Item anlegen und `ItemAdded` melden
    AddItem {
        kind: ItemKind,
        stage_pos: glam::Vec2,
    },
    /// Selektierte Items entfernen
    DeleteSelectedItems,
    /// Selektion aufheben
    ClearSelection,
    /// Zum vorherigen Composite zurückkehren
    ExitComposite,
    /// Layer sperren/entsperren
    SetLayerLocked { layer: String, locked: bool },
    /// Rastergröße setzen
    SetGridSize { size: u32 },
    /// Kontextmenü schließen
    CloseContextMenu,
    /// Laufzeit-Optionen als TOML speichern
    SaveOptions,

    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
}
