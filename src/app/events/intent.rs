use crate::app::input::{InputModifiers, PointerButton};
use crate::core::ItemKind;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue (Beispiel-)Szene laden
    NewSceneRequested,
    /// Aktuelle Szene speichern
    SaveRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Zeiger auf einem Item gedrückt
    ItemPressed {
        item_id: u64,
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Zeiger nach Press auf einem Item bewegt
    ItemDragged {
        item_id: u64,
        stage_pos: glam::Vec2,
        primary_down: bool,
        modifiers: InputModifiers,
    },
    /// Zeiger über einem Item losgelassen (`tap_count` = 2 bei Doppelklick)
    ItemReleased {
        item_id: u64,
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
        tap_count: u32,
    },
    /// Zeiger im leeren Bereich gedrückt
    EmptySpacePressed {
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Zeiger im leeren Bereich gezogen (Pan oder Rechteck-Selektion)
    EmptySpaceDragged {
        stage_pos: glam::Vec2,
        delta_world: glam::Vec2,
    },
    /// Zeiger im leeren Bereich losgelassen
    EmptySpaceReleased {
        stage_pos: glam::Vec2,
        button: PointerButton,
        modifiers: InputModifiers,
    },
    /// Pan-Taste (Leertaste) losgelassen
    PanKeyReleased,
    /// Mausrad (Rotation bei gehaltenem Item, Alt = Zoom)
    Scrolled {
        amount: f32,
        modifiers: InputModifiers,
        focus_world: Option<glam::Vec2>,
    },

    /// Knoten im Hierarchie-Baum angeklickt
    TreeNodeClicked { item_id: u64, additive: bool },

    /// Neues Item im aktuellen Composite anlegen
    AddItemRequested {
        kind: ItemKind,
        stage_pos: glam::Vec2,
    },
    /// Selektierte Items löschen
    DeleteSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Aktuelles Composite verlassen (Zurück-Navigation)
    ExitCompositeRequested,
    /// Sperre eines Layers umschalten
    ToggleLayerLockRequested { layer: String },
    /// Rastergröße ändern
    SetGridSizeRequested { size: u32 },
    /// Kontextmenü wurde geschlossen
    ContextMenuClosed,
    /// Laufzeit-Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
}
