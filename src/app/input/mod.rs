//! Zeiger-Eingabe der Stage: Gesten-Zustand und Input-Koordinator.

mod coordinator;
mod gesture;

pub use coordinator::InputCoordinator;
pub use gesture::{DragAxis, GestureState};

/// Zustand der Modifier-Tasten zum Zeitpunkt eines Events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputModifiers {
    /// Shift: additive Selektion, schnelle Rotation
    pub shift: bool,
    /// Alt: Mausrad-Zoom
    pub alt: bool,
    /// Ctrl bzw. Cmd: achsenbeschränktes Ziehen
    pub command: bool,
    /// Leertaste: Kamera-Pan
    pub pan_key: bool,
}

impl InputModifiers {
    /// Modifier-Satz nur mit Shift.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Modifier-Satz nur mit Ctrl/Cmd.
    pub fn command() -> Self {
        Self {
            command: true,
            ..Self::default()
        }
    }

    /// Modifier-Satz nur mit Alt.
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }
}

/// Maustaste eines Press/Release-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}
