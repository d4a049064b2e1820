use crate::core::Camera2D;
use glam::Vec2;

/// Aufziehendes Selektions-Rechteck im leeren Bereich
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    /// Startpunkt in Stage-Koordinaten
    pub start: Vec2,
    /// Aktueller Eckpunkt in Stage-Koordinaten
    pub current: Vec2,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera der Stage
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Kamera-Pan aktiv (Leertaste oder mittlere Maustaste)
    pub camera_pan_on: bool,
    /// Laufende Rechteck-Selektion
    pub marquee: Option<Marquee>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            camera_pan_on: false,
            marquee: None,
        }
    }
}
