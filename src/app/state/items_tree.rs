//! View-Model des Hierarchie-Baums (Items-Tree-Box).

use crate::core::SceneGraph;
use indexmap::IndexSet;

/// Knoten des Hierarchie-Baums; die Nutzlast ist die Unique-ID des Items.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Anzeigetext
    pub label: String,
    /// Unique-ID des zugehörigen Items
    pub payload: u64,
    /// Kind-Knoten
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    fn find(&self, payload: u64) -> Option<&TreeNode> {
        if self.payload == payload {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(payload))
    }
}

/// Baum-Widget-Zustand: Knoten plus Mehrfachselektion
#[derive(Debug, Clone, Default)]
pub struct ItemsTree {
    roots: Vec<TreeNode>,
    selected: IndexSet<u64>,
    rebuild_count: u32,
}

impl ItemsTree {
    /// Erstellt einen leeren Baum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut alle Knoten ab dem Root der Szene komplett neu auf.
    ///
    /// Die Baum-Selektion wird dabei verworfen.
    pub fn init(&mut self, scene: &SceneGraph) {
        self.roots.clear();
        self.selected.clear();
        if let Some(root) = scene.root() {
            self.roots.push(build_node(scene, root.id));
        }
        self.rebuild_count += 1;
    }

    /// Wurzelknoten
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Gesamtzahl der Knoten
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(TreeNode::count).sum()
    }

    /// Sucht einen Knoten über seine Nutzlast.
    pub fn find(&self, payload: u64) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(payload))
    }

    /// Anzahl kompletter Neuaufbauten
    pub fn rebuild_count(&self) -> u32 {
        self.rebuild_count
    }

    /// Aktuell im Baum selektierte Nutzlasten
    pub fn selected(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.iter().copied()
    }

    /// Gibt zurück, ob der Knoten selektiert ist.
    pub fn is_selected(&self, payload: u64) -> bool {
        self.selected.contains(&payload)
    }

    /// Klick auf einen Knoten: ersetzt die Selektion oder schaltet additiv um.
    ///
    /// Gibt die resultierende Selektion zurück.
    pub fn choose(&mut self, payload: u64, additive: bool) -> Vec<u64> {
        if additive {
            if !self.selected.shift_remove(&payload) {
                self.selected.insert(payload);
            }
        } else {
            self.selected.clear();
            self.selected.insert(payload);
        }
        self.selected.iter().copied().collect()
    }
}

fn build_node(scene: &SceneGraph, id: u64) -> TreeNode {
    let label = scene
        .get_by_unique_id(id)
        .map(|item| item.name.clone())
        .unwrap_or_default();
    let children = scene
        .children_of(id)
        .iter()
        .map(|child| build_node(scene, *child))
        .collect();

    TreeNode {
        label,
        payload: id,
        children,
    }
}
