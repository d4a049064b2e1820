//! Mediatoren: halten Hierarchie-Baum und Selektion mit der Szene synchron.

mod items_tree;
mod selection;

pub use items_tree::TreeSyncMediator;
pub use selection::SelectionMediator;
