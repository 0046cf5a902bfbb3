use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// In-memory template store for testing.
#[derive(Default)]
pub struct MemoryTemplateStore {
    value: RefCell<Option<String>>,
    pub should_fail: RefCell<bool>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: &str) -> Self {
        Self { value: RefCell::new(Some(template.to_string())), ..Self::default() }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, template: &str) -> Result<(), AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::Io(std::io::Error::other("mock store error")));
        }
        *self.value.borrow_mut() = Some(template.to_string());
        Ok(())
    }
}
