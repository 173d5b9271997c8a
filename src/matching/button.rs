//! Busy-state machine shared by the action buttons
//!
//! Idle -> Busy on activation, then back to Idle (label restored) or to
//! Departed when the page is about to navigate. Busy refuses re-entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Busy,
    Departed,
}

#[derive(Debug, Clone)]
pub struct ButtonState {
    phase: ButtonPhase,
    original_label: Option<String>,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonState {
    pub fn new() -> Self {
        Self {
            phase: ButtonPhase::Idle,
            original_label: None,
        }
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Enter Busy, remembering the label to restore. False unless Idle.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if self.phase != ButtonPhase::Idle {
            return false;
        }
        self.phase = ButtonPhase::Busy;
        self.original_label = Some(current_label.to_string());
        true
    }

    /// Busy -> Idle; returns the label to put back
    pub fn finish(&mut self) -> Option<String> {
        if self.phase != ButtonPhase::Busy {
            return None;
        }
        self.phase = ButtonPhase::Idle;
        self.original_label.take()
    }

    /// Busy -> Departed; the page is navigating away
    pub fn depart(&mut self) {
        if self.phase == ButtonPhase::Busy {
            self.phase = ButtonPhase::Departed;
        }
    }
}
