//! Sandbox Scene Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InputCoordinator, InputModifiers, Mediator,
    Notification, NotificationBus, NotificationKind, PointerButton, SelectionState, UiState,
    ViewState,
};
pub use core::{Camera2D, ItemKind, ItemTransform, Layer, SceneGraph, SceneItem, DEFAULT_LAYER};
pub use shared::EditorOptions;
