/// Navigierbare Aktion im Editor-Verlauf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Composite per Doppelklick betreten
    EnterComposite {
        /// Composite vor dem Betreten
        from: u64,
        /// Betretenes Composite
        to: u64,
    },
}

/// Navigationsverlauf (kein Undo: nur Composite-Navigation)
#[derive(Debug, Clone, Default)]
pub struct FlowHistory {
    entries: Vec<FlowAction>,
    pending: Option<FlowAction>,
}

impl FlowHistory {
    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt eine Aktion vor, bis sie mit `apply_pending` übernommen wird.
    pub fn set_pending(&mut self, action: FlowAction) {
        self.pending = Some(action);
    }

    /// Übernimmt die vorgemerkte Aktion in den Verlauf.
    pub fn apply_pending(&mut self) -> Option<FlowAction> {
        let action = self.pending.take()?;
        self.entries.push(action);
        Some(action)
    }

    /// Entfernt die jüngste Aktion (Zurück-Navigation).
    pub fn pop(&mut self) -> Option<FlowAction> {
        self.entries.pop()
    }

    /// Alle Aktionen in Ausführungsreihenfolge
    pub fn entries(&self) -> &[FlowAction] {
        &self.entries
    }

    /// Gibt zurück, ob eine Zurück-Navigation möglich ist.
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Verwirft den Verlauf (z.B. beim Laden einer Szene).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending = None;
    }
}
