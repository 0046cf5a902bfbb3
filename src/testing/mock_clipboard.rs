use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Records clipboard writes in memory.
#[derive(Debug, Default)]
pub struct MockClipboard {
    pub written: Option<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { written: None, should_fail: true }
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.written = Some(text.to_string());
        Ok(())
    }
}
