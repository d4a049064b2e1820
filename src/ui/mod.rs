//! UI-Layer mit egui
//!
//! Panels (Menü, Hierarchie, Eigenschaften, Status), Viewport-Painting und
//! Viewport-Input. Alle Komponenten erzeugen nur `AppIntent`s und mutieren
//! den AppState nicht direkt.

mod context_menu;
mod drag;
pub mod hierarchy;
pub mod input;
mod keyboard;
pub mod menu;
pub mod properties;
pub mod status;
pub mod viewport;

pub use context_menu::render_context_menu;
pub use hierarchy::render_hierarchy_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use viewport::paint_scene;
