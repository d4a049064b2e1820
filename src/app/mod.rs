//! Application-Layer: Controller, State, Events, Input-Koordinator und Mediatoren.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod input;
mod intent_mapping;
pub mod mediators;
pub mod notifications;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Editor-Session (Szene, Selektion, View, UI).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use input::{InputCoordinator, InputModifiers, PointerButton};
pub use notifications::{Mediator, Notification, NotificationBus, NotificationKind};
pub use state::{AppState, SelectionState, UiState, ViewState};
