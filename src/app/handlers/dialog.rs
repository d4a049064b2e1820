//! Handler für Kontextmenü, Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt ein offenes Kontextmenü.
pub fn close_context_menu(state: &mut AppState) {
    state.ui.close_context_menu();
}

/// Schreibt die Laufzeit-Optionen neben die Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&EditorOptions::config_path())?;
    state.ui.status_message = Some("Optionen gespeichert".to_string());
    Ok(())
}
