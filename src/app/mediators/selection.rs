//! Übernimmt globale Selektions-Aufforderungen in die Editor-Session.

use crate::app::notifications::{Mediator, Notification, NotificationKind};
use crate::app::use_cases;
use crate::app::AppState;

/// Ersetzt die Selektion bei `SetSelection`.
pub struct SelectionMediator;

impl SelectionMediator {
    /// Name in der Mediator-Registry
    pub const NAME: &'static str = "selection";

    const INTERESTS: [NotificationKind; 1] = [NotificationKind::SetSelection];
}

impl Mediator for SelectionMediator {
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
        _outbox: &mut Vec<Notification>,
    ) {
        if let Notification::SetSelection { ids } = notification {
            use_cases::selection::set_selection(state, ids);
        }
    }
}
