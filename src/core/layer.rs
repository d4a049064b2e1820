//! Layer der Szene (Sperre und Sichtbarkeit).

/// Name des Layers, auf dem neue Items standardmäßig landen.
pub const DEFAULT_LAYER: &str = "Default";

/// Ein Layer der Szene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Eindeutiger Layer-Name
    pub name: String,
    /// Gesperrte Layer sind per Klick und Rechteck nicht selektierbar
    pub locked: bool,
    /// Sichtbarkeit im Viewport
    pub visible: bool,
}

impl Layer {
    /// Erstellt einen sichtbaren, ungesperrten Layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locked: false,
            visible: true,
        }
    }
}
