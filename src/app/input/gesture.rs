//! Gesten-Zustandsautomat für Press → Drag → Release auf Items.

use glam::Vec2;

/// Achse, auf die ein reduzierter Drag eingeschränkt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    /// Nur horizontale Bewegung
    Horizontal,
    /// Nur vertikale Bewegung
    Vertical,
}

impl DragAxis {
    /// Achse mit der größeren absoluten Verschiebung (Gleichstand → horizontal).
    pub fn dominant(delta: Vec2) -> Self {
        if delta.x.abs() >= delta.y.abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Maske, mit der eine Verschiebung auf die Achse projiziert wird.
    pub fn mask(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::X,
            Self::Vertical => Vec2::Y,
        }
    }
}

/// Zustand der aktuellen Zeiger-Geste
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Item gedrückt, noch keine Bewegung
    Pressed {
        item: u64,
        was_selected: bool,
        start: Vec2,
    },
    /// Item wird gezogen; die Achse wurde beim ersten Sample festgelegt
    Dragging {
        item: u64,
        was_selected: bool,
        start: Vec2,
        axis: DragAxis,
    },
}

impl GestureState {
    /// Startet eine neue Geste (Press).
    pub fn pressed(item: u64, was_selected: bool, start: Vec2) -> Self {
        Self::Pressed {
            item,
            was_selected,
            start,
        }
    }

    /// Verarbeitet ein Bewegungs-Sample. Gibt `true` für das erste Sample der Geste zurück.
    ///
    /// Ohne vorherigen Press beginnt die Geste am aktuellen Punkt.
    pub fn advance(&mut self, item: u64, position: Vec2) -> bool {
        match *self {
            Self::Pressed {
                item,
                was_selected,
                start,
            } => {
                *self = Self::Dragging {
                    item,
                    was_selected,
                    start,
                    axis: DragAxis::dominant(position - start),
                };
                true
            }
            Self::Dragging { .. } => false,
            Self::Idle => {
                *self = Self::Dragging {
                    item,
                    was_selected: false,
                    start: position,
                    axis: DragAxis::Horizontal,
                };
                true
            }
        }
    }

    /// Gibt zurück, ob in dieser Geste bereits gezogen wurde.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// War das Item beim Press bereits selektiert?
    pub fn was_selected_at_press(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Pressed { was_selected, .. } | Self::Dragging { was_selected, .. } => {
                *was_selected
            }
        }
    }

    /// Stage-Position des Press
    pub fn drag_start_position(&self) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Pressed { start, .. } | Self::Dragging { start, .. } => Some(*start),
        }
    }

    /// Beim ersten Drag-Sample festgelegte Achse
    pub fn reduced_move_axis(&self) -> Option<DragAxis> {
        match self {
            Self::Dragging { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
