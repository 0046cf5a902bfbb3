use std::fs;
use std::path::PathBuf;

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Key under which the edited prompt template is stored.
pub const TEMPLATE_KEY: &str = "poster_prompt_template";

/// Key-value store backed by a TOML file. Keys other than the template are kept as they are.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    path: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<Table, AppError> {
        if !self.path.exists() {
            return Ok(Table::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        let mut entries = self.read_entries()?;
        debug!(path = %self.path.display(), found = entries.contains_key(TEMPLATE_KEY), "loaded template store");
        match entries.remove(TEMPLATE_KEY) {
            Some(Value::String(template)) => Ok(Some(template)),
            Some(other) => {
                warn!(kind = other.type_str(), "ignoring non-string template entry");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn save(&self, template: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        entries.insert(TEMPLATE_KEY.to_string(), Value::String(template.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&entries)?)?;
        Ok(())
    }
}
