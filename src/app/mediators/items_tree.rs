//! Synchronisiert den Hierarchie-Baum mit dem Szenen-Graphen.

use crate::app::notifications::{Mediator, Notification, NotificationKind};
use crate::app::AppState;

/// Baut den Baum bei Struktur-Änderungen neu auf und übersetzt
/// Baum-Auswahl in globale Selektions-Aufforderungen.
///
/// Entfernte Items lösen keinen Neuaufbau aus; ihre Knoten bleiben bis
/// zum nächsten Neuaufbau stehen und werden bei Auswahl übersprungen.
pub struct TreeSyncMediator;

impl TreeSyncMediator {
    /// Name in der Mediator-Registry
    pub const NAME: &'static str = "items_tree";

    const INTERESTS: [NotificationKind; 3] = [
        NotificationKind::SceneLoaded,
        NotificationKind::ItemAdded,
        NotificationKind::TreeSelectionChanged,
    ];
}

impl Mediator for TreeSyncMediator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn interests(&self) -> &[NotificationKind] {
        &Self::INTERESTS
    }

    fn handle_notification(
        &mut self,
        notification: &Notification,
        state: &mut AppState,
        outbox: &mut Vec<Notification>,
    ) {
        match notification {
            Notification::SceneLoaded | Notification::ItemAdded { .. } => {
                state.ui.items_tree.init(&state.scene);
                log::debug!(
                    "Hierarchie-Baum neu aufgebaut: {} Knoten",
                    state.ui.items_tree.node_count()
                );
            }
            Notification::TreeSelectionChanged { ids } => {
                for id in ids {
                    if state.scene.contains(*id) {
                        outbox.push(Notification::SetSelection { ids: vec![*id] });
                    } else {
                        log::debug!("Baum-Knoten {} verweist auf kein Item mehr", id);
                    }
                }
            }
            _ => {}
        }
    }
}
