use std::path::PathBuf;

use crate::domain::AppError;

/// Overrides the home directory used for config and saved templates.
pub const HOME_ENV: &str = "TRAVELCINE_HOME";

const HOME_DIR_NAME: &str = ".travelcine";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "store.toml";

/// Per-user directory holding `config.toml` and `store.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelcineHome {
    root: PathBuf,
}

impl TravelcineHome {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve from `$TRAVELCINE_HOME`, falling back to `$HOME/.travelcine`.
    pub fn from_env() -> Result<Self, AppError> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(dir));
        }
        let home = std::env::var_os("HOME").filter(|v| !v.is_empty()).ok_or_else(|| {
            AppError::config_error(format!("Neither {} nor HOME is set", HOME_ENV))
        })?;
        Ok(Self::new(PathBuf::from(home).join(HOME_DIR_NAME)))
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(STORE_FILE)
    }
}
