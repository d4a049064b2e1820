//! Typisierte Benachrichtigungen zwischen Application-Layer und Mediatoren.

mod bus;

pub use bus::{Mediator, NotificationBus};

/// Benachrichtigung über Änderungen an Szene, Baum oder Selektion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Eine Szene wurde geladen
    SceneLoaded,
    /// Ein Item wurde in die Szene eingefügt
    ItemAdded { id: u64 },
    /// Ein Item wurde aus der Szene entfernt
    ItemRemoved { id: u64 },
    /// Die Knoten-Auswahl im Hierarchie-Baum hat sich geändert
    TreeSelectionChanged { ids: Vec<u64> },
    /// Globale Aufforderung, die Selektion zu ersetzen
    SetSelection { ids: Vec<u64> },
}

/// Art einer Benachrichtigung (für Interessen-Listen der Mediatoren)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    SceneLoaded,
    ItemAdded,
    ItemRemoved,
    TreeSelectionChanged,
    SetSelection,
}

impl Notification {
    /// Art dieser Benachrichtigung
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::SceneLoaded => NotificationKind::SceneLoaded,
            Self::ItemAdded { .. } => NotificationKind::ItemAdded,
            Self::ItemRemoved { .. } => NotificationKind::ItemRemoved,
            Self::TreeSelectionChanged { .. } => NotificationKind::TreeSelectionChanged,
            Self::SetSelection { .. } => NotificationKind::SetSelection,
        }
    }
}
