//! Szenen-Items: Sprites, Labels und Composites mit Transform und Daten-Snapshot.

use glam::Vec2;

/// Art eines Szenen-Items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Einzelnes Bild
    Sprite,
    /// Textfeld
    Label,
    /// Gruppe mit Kind-Items (per Doppelklick betretbar)
    Composite,
}

/// Live-Transform eines Items auf der Stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Ursprung in Stage-Koordinaten
    pub position: Vec2,
    /// Rotation in Grad um den eigenen Ursprung
    pub rotation: f32,
    /// Ausdehnung in Stage-Einheiten
    pub size: Vec2,
}

impl ItemTransform {
    /// Erstellt einen Transform ohne Rotation.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            size,
        }
    }

    /// Prüft, ob der Ursprung des Items im Rechteck [min, max] liegt.
    pub fn origin_within(&self, min: Vec2, max: Vec2) -> bool {
        self.position.x >= min.x
            && self.position.x <= max.x
            && self.position.y >= min.y
            && self.position.y <= max.y
    }
}

/// Zwischengespeicherter Datenstand eines Items (wird beim Speichern geschrieben)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemData {
    /// Position zum Zeitpunkt des letzten Refresh
    pub position: Vec2,
    /// Rotation zum Zeitpunkt des letzten Refresh
    pub rotation: f32,
}

/// Ein selektierbares Item der Szene
#[derive(Debug, Clone)]
pub struct SceneItem {
    /// Eindeutige ID (Unique-ID der Entity)
    pub id: u64,
    /// Anzeigename (Tree, Properties)
    pub name: String,
    /// Item-Art
    pub kind: ItemKind,
    /// Live-Transform
    pub transform: ItemTransform,
    /// Zwischengespeicherte Daten
    pub data: ItemData,
    /// Name des Layers, auf dem das Item liegt
    pub layer: String,
    /// Eltern-Composite (None nur für den Root)
    pub parent: Option<u64>,
    /// Kind-IDs in Zeichenreihenfolge (nur Composites)
    pub children: Vec<u64>,
}

impl SceneItem {
    /// Erstellt ein neues Item; der Daten-Snapshot entspricht dem Transform.
    pub fn new(id: u64, name: impl Into<String>, kind: ItemKind, transform: ItemTransform) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            transform,
            data: ItemData {
                position: transform.position,
                rotation: transform.rotation,
            },
            layer: String::from(super::DEFAULT_LAYER),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Setzt den Layer (Builder-Stil).
    pub fn on_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Gibt zurück, ob das Item ein Composite ist.
    pub fn is_composite(&self) -> bool {
        self.kind == ItemKind::Composite
    }

    /// Übernimmt den Live-Transform in den Daten-Snapshot.
    pub fn refresh_data(&mut self) {
        self.data.position = self.transform.position;
        self.data.rotation = self.transform.rotation;
    }

    /// Dreht das Item um `degrees` um seinen Ursprung.
    pub fn rotate_by(&mut self, degrees: f32) {
        self.transform.rotation += degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sprite() -> SceneItem {
        SceneItem::new(
            7,
            "tree",
            ItemKind::Sprite,
            ItemTransform::new(Vec2::new(10.0, 20.0), Vec2::new(32.0, 32.0)),
        )
    }

    #[test]
    fn refresh_data_copies_live_transform() {
        let mut item = sprite();
        item.transform.position = Vec2::new(50.0, 60.0);
        item.transform.rotation = 45.0;
        assert_eq!(item.data.position, Vec2::new(10.0, 20.0));

        item.refresh_data();

        assert_eq!(item.data.position, Vec2::new(50.0, 60.0));
        assert_relative_eq!(item.data.rotation, 45.0);
    }

    #[test]
    fn rotate_by_accumulates_signed_degrees() {
        let mut item = sprite();
        item.rotate_by(-1.0);
        assert_relative_eq!(item.transform.rotation, -1.0);
        item.rotate_by(31.0);
        assert_relative_eq!(item.transform.rotation, 30.0);
    }
}
