//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Editor-Optionen, die von `app` und `ui` gleichermaßen
//! gelesen werden.

pub mod options;

pub use options::EditorOptions;
