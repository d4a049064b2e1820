//! Zentrale Konfiguration für den Sandbox-Szenen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster & Transform ──────────────────────────────────────────────

/// Standard-Rastergröße in Stage-Einheiten (1 = kein sichtbares Einrasten).
pub const GRID_SIZE: u32 = 1;
/// Rotationsschritt pro Mausrad-Raste in Grad.
pub const ROTATION_STEP_DEG: f32 = 1.0;
/// Rotationsschritt mit gehaltener Shift-Taste in Grad.
pub const ROTATION_STEP_FAST_DEG: f32 = 30.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 20.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Alt + Mausrad.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Item-Darstellung ────────────────────────────────────────────────

/// Füllfarbe normaler Items (RGBA: Grau-Blau).
pub const ITEM_COLOR_DEFAULT: [f32; 4] = [0.35, 0.45, 0.6, 1.0];
/// Füllfarbe von Items auf gesperrten Layern (RGBA: Dunkelgrau).
pub const ITEM_COLOR_LOCKED: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
/// Farbe der Selektions-Rechtecke (RGBA: Orange).
pub const SELECTION_RECT_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
/// Abstand der Selektions-Rechtecke zum Item in Screen-Pixeln.
pub const SELECTION_RECT_PADDING_PX: f32 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `sandbox_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Raster & Transform ──────────────────────────────────────
    /// Rastergröße für Drag-Snapping
    pub grid_size: u32,
    /// Rotationsschritt pro Mausrad-Raste
    pub rotation_step_deg: f32,
    /// Rotationsschritt mit Shift
    pub rotation_step_fast_deg: f32,
    /// Raster im Viewport zeichnen
    #[serde(default)]
    pub show_grid: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Alt + Mausrad
    pub camera_scroll_zoom_step: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Füllfarbe normaler Items
    pub item_color_default: [f32; 4],
    /// Füllfarbe gesperrter Items
    pub item_color_locked: [f32; 4],
    /// Farbe der Selektions-Rechtecke
    pub selection_rect_color: [f32; 4],
    /// Abstand der Selektions-Rechtecke in Pixeln
    #[serde(default = "default_selection_rect_padding_px")]
    pub selection_rect_padding_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            rotation_step_deg: ROTATION_STEP_DEG,
            rotation_step_fast_deg: ROTATION_STEP_FAST_DEG,
            show_grid: false,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            item_color_default: ITEM_COLOR_DEFAULT,
            item_color_locked: ITEM_COLOR_LOCKED,
            selection_rect_color: SELECTION_RECT_COLOR,
            selection_rect_padding_px: SELECTION_RECT_PADDING_PX,
        }
    }
}

/// Serde-Default für `selection_rect_padding_px` (Abwärtskompatibilität).
fn default_selection_rect_padding_px() -> f32 {
    SELECTION_RECT_PADDING_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sandbox_scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sandbox_scene_editor.toml")
    }

    /// Rotationsschritt abhängig von der Shift-Taste.
    pub fn rotation_step(&self, fast: bool) -> f32 {
        if fast {
            self.rotation_step_fast_deg
        } else {
            self.rotation_step_deg
        }
    }
}
