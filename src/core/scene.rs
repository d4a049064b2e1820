//! Szenen-Graph: Items, Composite-Hierarchie, Layer und Speicher-Snapshot.

use super::{ItemData, ItemKind, ItemTransform, Layer, SceneItem, DEFAULT_LAYER};
use glam::Vec2;
use indexmap::IndexMap;

/// Die geladene Szene mit allen Items
#[derive(Debug, Clone)]
pub struct SceneGraph {
    /// Anzeigename der Szene
    pub name: String,
    /// Alle Items inkl. Root, indexiert nach Unique-ID (Einfügereihenfolge)
    items: IndexMap<u64, SceneItem>,
    /// Layer-Tabelle in Anzeigereihenfolge
    layers: IndexMap<String, Layer>,
    root_id: u64,
    next_id: u64,
    /// Datenstand beim letzten Speichern
    saved: IndexMap<u64, ItemData>,
    save_count: u32,
}

impl SceneGraph {
    /// Unique-ID des Root-Composites jeder Szene.
    pub const ROOT_ID: u64 = 1;

    /// Erstellt eine leere Szene mit Root-Composite und Default-Layer.
    pub fn new(name: impl Into<String>) -> Self {
        let mut items = IndexMap::new();
        let root = SceneItem::new(
            Self::ROOT_ID,
            "root",
            ItemKind::Composite,
            ItemTransform::new(Vec2::ZERO, Vec2::ZERO),
        );
        items.insert(Self::ROOT_ID, root);

        let mut layers = IndexMap::new();
        layers.insert(DEFAULT_LAYER.to_string(), Layer::new(DEFAULT_LAYER));

        Self {
            name: name.into(),
            items,
            layers,
            root_id: Self::ROOT_ID,
            next_id: Self::ROOT_ID + 1,
            saved: IndexMap::new(),
            save_count: 0,
        }
    }

    /// Unique-ID des Root-Composites
    pub fn root_id(&self) -> u64 {
        self.root_id
    }

    /// Root-Composite der Szene
    pub fn root(&self) -> Option<&SceneItem> {
        self.items.get(&self.root_id)
    }

    /// Sucht ein Item über seine Unique-ID.
    pub fn get_by_unique_id(&self, id: u64) -> Option<&SceneItem> {
        self.items.get(&id)
    }

    /// Mutabler Zugriff auf ein Item.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut SceneItem> {
        self.items.get_mut(&id)
    }

    /// Prüft, ob ein Item (noch) existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.items.contains_key(&id)
    }

    /// Anzahl der Items ohne Root
    pub fn item_count(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Iteriert über alle Items inkl. Root.
    pub fn items(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.values()
    }

    /// Kind-IDs eines Composites (leer für unbekannte IDs und Nicht-Composites).
    pub fn children_of(&self, composite_id: u64) -> &[u64] {
        self.items
            .get(&composite_id)
            .map(|item| item.children.as_slice())
            .unwrap_or(&[])
    }

    /// Alle Layer in Anzeigereihenfolge
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Sucht einen Layer über seinen Namen.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    /// Fügt einen Layer hinzu (bestehende Layer bleiben unverändert).
    pub fn add_layer(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.layers
            .entry(name.clone())
            .or_insert_with(|| Layer::new(name));
    }

    /// Sperrt oder entsperrt einen Layer. Gibt `false` zurück, wenn der Layer fehlt.
    pub fn set_layer_locked(&mut self, name: &str, locked: bool) -> bool {
        let Some(layer) = self.layers.get_mut(name) else {
            return false;
        };
        layer.locked = locked;
        true
    }

    /// Gibt zurück, ob das Item auf einem gesperrten Layer liegt.
    pub fn is_locked_by_layer(&self, id: u64) -> bool {
        self.items
            .get(&id)
            .and_then(|item| self.layers.get(&item.layer))
            .is_some_and(|layer| layer.locked)
    }

    /// Fügt ein neues Item in ein Composite ein und gibt dessen Unique-ID zurück.
    pub fn add_item(
        &mut self,
        parent_id: u64,
        name: impl Into<String>,
        kind: ItemKind,
        transform: ItemTransform,
        layer: &str,
    ) -> anyhow::Result<u64> {
        let Some(parent) = self.items.get(&parent_id) else {
            anyhow::bail!("Eltern-Item {} existiert nicht", parent_id);
        };
        if !parent.is_composite() {
            anyhow::bail!("Item {} ist kein Composite", parent_id);
        }
        if !self.layers.contains_key(layer) {
            anyhow::bail!("Layer '{}' existiert nicht", layer);
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut item = SceneItem::new(id, name, kind, transform).on_layer(layer);
        item.parent = Some(parent_id);
        self.items.insert(id, item);

        if let Some(parent) = self.items.get_mut(&parent_id) {
            parent.children.push(id);
        }

        Ok(id)
    }

    /// Entfernt ein Item samt aller Nachfahren und gibt die entfernten IDs zurück.
    ///
    /// Der Root kann nicht entfernt werden.
    pub fn remove_item(&mut self, id: u64) -> Vec<u64> {
        if id == self.root_id || !self.items.contains_key(&id) {
            return Vec::new();
        }

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(item) = self.items.shift_remove(&current) {
                stack.extend(item.children.iter().copied());
                self.saved.shift_remove(&current);
                removed.push(current);

                if let Some(parent) = item.parent.and_then(|p| self.items.get_mut(&p)) {
                    parent.children.retain(|child| *child != current);
                }
            }
        }

        removed
    }

    /// Direkte Kinder eines Composites, deren Ursprung im Rechteck liegt
    /// und die nicht auf einem gesperrten Layer liegen.
    pub fn items_within_rect(&self, composite_id: u64, corner_a: Vec2, corner_b: Vec2) -> Vec<u64> {
        let min = corner_a.min(corner_b);
        let max = corner_a.max(corner_b);

        self.children_of(composite_id)
            .iter()
            .copied()
            .filter(|id| !self.is_locked_by_layer(*id))
            .filter(|id| {
                self.items
                    .get(id)
                    .is_some_and(|item| item.transform.origin_within(min, max))
            })
            .collect()
    }

    /// Oberstes direktes Kind eines Composites, dessen Fläche `point` enthält.
    ///
    /// Die Fläche reicht vom Ursprung bis Ursprung + Größe; Rotation wird ignoriert.
    pub fn item_at(&self, composite_id: u64, point: Vec2) -> Option<u64> {
        self.children_of(composite_id)
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.items.get(id).is_some_and(|item| {
                    let min = item.transform.position;
                    let max = min + item.transform.size;
                    point.cmpge(min).all() && point.cmple(max).all()
                })
            })
    }

    /// Schreibt den aktuellen Datenstand aller Items in den Speicher-Snapshot.
    pub fn save_snapshot(&mut self) {
        self.saved = self
            .items
            .iter()
            .filter(|(id, _)| **id != self.root_id)
            .map(|(id, item)| (*id, item.data))
            .collect();
        self.save_count += 1;
        log::info!(
            "Szene '{}' gespeichert ({} Items, Speichervorgang #{})",
            self.name,
            self.saved.len(),
            self.save_count
        );
    }

    /// Anzahl der bisherigen Speichervorgänge
    pub fn save_count(&self) -> u32 {
        self.save_count
    }

    /// Gespeicherter Datenstand eines Items (None vor dem ersten Speichern).
    pub fn saved_data(&self, id: u64) -> Option<&ItemData> {
        self.saved.get(&id)
    }

    /// Baut eine kleine Beispielszene mit Hintergrund-Layer, Sprites und einer Gruppe.
    pub fn demo() -> Self {
        let mut scene = Self::new("MainScene");
        scene.add_layer("Background");
        scene.set_layer_locked("Background", true);

        let root = scene.root_id();
        let size = Vec2::new(64.0, 64.0);
        let steps: [(&str, ItemKind, Vec2, &str); 4] = [
            ("sky", ItemKind::Sprite, Vec2::new(-300.0, -200.0), "Background"),
            ("hero", ItemKind::Sprite, Vec2::new(-100.0, 0.0), DEFAULT_LAYER),
            ("title", ItemKind::Label, Vec2::new(0.0, -150.0), DEFAULT_LAYER),
            ("house", ItemKind::Composite, Vec2::new(150.0, 50.0), DEFAULT_LAYER),
        ];

        let mut house = None;
        for (name, kind, position, layer) in steps {
            match scene.add_item(root, name, kind, ItemTransform::new(position, size), layer) {
                Ok(id) if kind == ItemKind::Composite => house = Some(id),
                Ok(_) => {}
                Err(e) => log::warn!("Beispielszene unvollständig: {:#}", e),
            }
        }

        if let Some(house) = house {
            for (name, offset) in [("door", Vec2::new(16.0, 32.0)), ("window", Vec2::new(40.0, 8.0))] {
                let transform = ItemTransform::new(Vec2::new(150.0, 50.0) + offset, size * 0.25);
                if let Err(e) = scene.add_item(house, name, ItemKind::Sprite, transform, DEFAULT_LAYER)
                {
                    log::warn!("Beispielszene unvollständig: {:#}", e);
                }
            }
        }

        scene
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
