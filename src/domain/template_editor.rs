//! Gated editing surface for the prompt template.

use tracing::info;

use crate::domain::{AccessGate, AppError, DEFAULT_PROMPT_TEMPLATE};
use crate::ports::TemplateStore;

/// One presentation of the template editor.
///
/// Opening the editor relocks the gate and discards any unsaved draft.
#[derive(Debug)]
pub struct TemplateEditor {
    gate: AccessGate,
    draft: String,
}

impl TemplateEditor {
    /// Present the editor with `current` as the starting draft.
    pub fn open(current: impl Into<String>) -> Self {
        let mut gate = AccessGate::new();
        gate.present();
        Self { gate, draft: current.into() }
    }

    pub fn unlock(&mut self, secret: &str) -> Result<(), AppError> {
        if self.gate.submit(secret) { Ok(()) } else { Err(AppError::AccessDenied) }
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn draft(&self) -> Result<&str, AppError> {
        self.gate.require_unlocked()?;
        Ok(&self.draft)
    }

    pub fn edit(&mut self, template: impl Into<String>) -> Result<(), AppError> {
        self.gate.require_unlocked()?;
        self.draft = template.into();
        Ok(())
    }

    /// Replace the draft with the built-in template. Takes effect on save.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.edit(DEFAULT_PROMPT_TEMPLATE)
    }

    /// Persist the draft and return it as the active template.
    pub fn save<S: TemplateStore + ?Sized>(self, store: &S) -> Result<String, AppError> {
        self.gate.require_unlocked()?;
        store.save(&self.draft)?;
        info!(chars = self.draft.chars().count(), "saved prompt template");
        Ok(self.draft)
    }
}
