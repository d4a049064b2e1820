//! Use-Case-Funktionen für Item-Selektion.
//!
//! - `rect`: Rechteck-Selektion im leeren Bereich
//! - `helpers`: Gemeinsame Hilfsfunktionen (Leeren, Ersetzen)

mod helpers;
mod rect;

pub use helpers::{clear_selection, set_selection};
pub use rect::select_items_in_rect;
