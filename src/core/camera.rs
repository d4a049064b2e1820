//! 2D-Kamera der Stage für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Stage-Position im Viewport-Zentrum
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Stage-Pixel pro Screen-Pixel)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten (Viewport-lokal) zu Stage-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Stage-Koordinaten zu Screen-Koordinaten (Viewport-lokal).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }

    /// Rechnet ein Screen-Pixel-Delta in ein Stage-Delta um.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
