//! Synchroner Notification-Bus mit expliziter Mediator-Registry.

use std::collections::VecDeque;

use super::{Notification, NotificationKind};
use crate::app::AppState;

/// Empfänger von Benachrichtigungen.
///
/// Weitere Benachrichtigungen werden in `outbox` abgelegt und nach der
/// aktuellen Zustellung in FIFO-Reihenfolge verteilt.
pub trait Mediator {
    /// Eindeutiger Name in der Registry
    fn name(&self) -> &str;

    /// Benachrichtigungsarten, die dieser Mediator empfangen will
    fn interests(&self) -> &[NotificationKind];

    /// Verarbeitet eine Benachrichtigung.
    fn handle_notification(
        &mut self,
        notification: &Notification,
        state: &mut AppState,
        outbox: &mut Vec<Notification>,
    );
}

/// Verteilt Benachrichtigungen synchron in Registrierungsreihenfolge.
#[derive(Default)]
pub struct NotificationBus {
    mediators: Vec<Box<dyn Mediator>>,
    delivered: u64,
}

impl NotificationBus {
    /// Erstellt einen Bus ohne Mediatoren.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Mediator. Ein gleichnamiger Mediator wird ersetzt.
    pub fn register(&mut self, mediator: Box<dyn Mediator>) {
        if let Some(existing) = self
            .mediators
            .iter_mut()
            .find(|m| m.name() == mediator.name())
        {
            log::warn!("Mediator '{}' ersetzt", mediator.name());
            *existing = mediator;
            return;
        }
        log::debug!("Mediator '{}' registriert", mediator.name());
        self.mediators.push(mediator);
    }

    /// Entfernt einen Mediator. Gibt `true` zurück, wenn er registriert war.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.mediators.len();
        self.mediators.retain(|m| m.name() != name);
        before != self.mediators.len()
    }

    /// Prüft, ob ein Mediator mit diesem Namen registriert ist.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediators.iter().any(|m| m.name() == name)
    }

    /// Anzahl der bisher zugestellten Benachrichtigungen (je Mediator gezählt)
    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    /// Sendet eine einzelne Benachrichtigung.
    pub fn send(&mut self, notification: Notification, state: &mut AppState) {
        self.dispatch(vec![notification], state);
    }

    /// Stellt alle Benachrichtigungen zu, inklusive der dabei neu erzeugten.
    pub fn dispatch(&mut self, notifications: Vec<Notification>, state: &mut AppState) {
        let mut queue: VecDeque<Notification> = notifications.into();
        let mut outbox = Vec::new();

        while let Some(notification) = queue.pop_front() {
            let kind = notification.kind();
            log::debug!("Benachrichtigung {:?}", notification);

            for mediator in self
                .mediators
                .iter_mut()
                .filter(|m| m.interests().contains(&kind))
            {
                mediator.handle_notification(&notification, state, &mut outbox);
                self.delivered += 1;
            }

            queue.extend(outbox.drain(..));
        }

        log::debug!("Benachrichtigungen zugestellt: {} gesamt", self.delivered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Zeichnet empfangene Benachrichtigungen auf und kann Folge-Benachrichtigungen senden.
    struct Recorder {
        name: String,
        interests: Vec<NotificationKind>,
        log: Rc<RefCell<Vec<(String, Notification)>>>,
        on_scene_loaded: Vec<Notification>,
    }

    impl Recorder {
        fn new(name: &str, log: &Rc<RefCell<Vec<(String, Notification)>>>) -> Self {
            Self {
                name: name.to_string(),
                interests: vec![
                    NotificationKind::SceneLoaded,
                    NotificationKind::ItemAdded,
                    NotificationKind::SetSelection,
                ],
                log: Rc::clone(log),
                on_scene_loaded: Vec::new(),
            }
        }
    }

    impl Mediator for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn interests(&self) -> &[NotificationKind] {
            &self.interests
        }

        fn handle_notification(
            &mut self,
            notification: &Notification,
            _state: &mut AppState,
            outbox: &mut Vec<Notification>,
        ) {
            self.log
                .borrow_mut()
                .push((self.name.clone(), notification.clone()));
            if *notification == Notification::SceneLoaded {
                outbox.extend(self.on_scene_loaded.iter().cloned());
            }
        }
    }

    #[test]
    fn delivers_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        bus.register(Box::new(Recorder::new("a", &log)));
        bus.register(Box::new(Recorder::new("b", &log)));
        let mut state = AppState::new();

        bus.send(Notification::ItemAdded { id: 3 }, &mut state);

        let names: Vec<String> = log.borrow().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(bus.delivered_count(), 2);
    }

    #[test]
    fn nested_notifications_follow_current_one_in_fifo_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        let mut first = Recorder::new("a", &log);
        first.on_scene_loaded = vec![
            Notification::ItemAdded { id: 1 },
            Notification::ItemAdded { id: 2 },
        ];
        bus.register(Box::new(first));
        bus.register(Box::new(Recorder::new("b", &log)));
        let mut state = AppState::new();

        bus.send(Notification::SceneLoaded, &mut state);

        let received: Vec<(String, Notification)> = log.borrow().clone();
        assert_eq!(
            received,
            vec![
                ("a".to_string(), Notification::SceneLoaded),
                ("b".to_string(), Notification::SceneLoaded),
                ("a".to_string(), Notification::ItemAdded { id: 1 }),
                ("b".to_string(), Notification::ItemAdded { id: 1 }),
                ("a".to_string(), Notification::ItemAdded { id: 2 }),
                ("b".to_string(), Notification::ItemAdded { id: 2 }),
            ]
        );
    }

    #[test]
    fn uninterested_mediators_are_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        bus.register(Box::new(Recorder::new("a", &log)));
        let mut state = AppState::new();

        bus.send(Notification::ItemRemoved { id: 9 }, &mut state);

        assert!(log.borrow().is_empty());
        assert_eq!(bus.delivered_count(), 0);
    }

    #[test]
    fn register_replaces_and_remove_unregisters() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        bus.register(Box::new(Recorder::new("a", &log)));
        bus.register(Box::new(Recorder::new("a", &log)));
        let mut state = AppState::new();

        bus.send(Notification::SceneLoaded, &mut state);
        assert_eq!(log.borrow().len(), 1);

        assert!(bus.remove("a"));
        assert!(!bus.has_mediator("a"));
        assert!(!bus.remove("a"));
    }
}
