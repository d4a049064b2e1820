//! Handler für die Composite-Navigation.

use crate::app::use_cases;
use crate::app::AppState;

/// Kehrt ins vorherige Composite zurück.
pub fn exit_composite(state: &mut AppState) {
    if use_cases::scene::exit_composite(state) {
        use_cases::camera::center_on_composite(state);
        log::info!("Composite verlassen, jetzt in {}", state.current_composite);
    } else {
        log::debug!("Composite verlassen ignoriert: bereits auf Root-Ebene");
    }
}
