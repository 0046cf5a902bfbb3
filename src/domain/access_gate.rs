//! Passcode gate in front of the template editor.
//!
//! This is a UI gate for a single-user tool, not access control: the passcode
//! is a compiled-in literal compared in plain text, with no hashing, lockout
//! or session beyond the current presentation of the editor.

use crate::domain::AppError;

/// Passcode that unlocks the template editor.
pub const EDITOR_PASSCODE: &str = "123";

#[derive(Debug, Default)]
pub struct AccessGate {
    unlocked: bool,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the gate again; every presentation starts locked.
    pub fn present(&mut self) {
        self.unlocked = false;
    }

    /// Try a passcode. Returns whether the gate is now unlocked.
    pub fn submit(&mut self, secret: &str) -> bool {
        if secret == EDITOR_PASSCODE {
            self.unlocked = true;
        }
        self.unlocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn require_unlocked(&self) -> Result<(), AppError> {
        if self.unlocked { Ok(()) } else { Err(AppError::EditorLocked) }
    }
}
