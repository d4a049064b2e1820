//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion; erzeugte
//! Benachrichtigungen landen in der Outbox des Controllers.

pub mod dialog;
pub mod interaction;
pub mod navigation;
pub mod scene;
pub mod tree;
pub mod view;
