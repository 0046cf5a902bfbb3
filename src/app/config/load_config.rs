//! Configuration loading from the travelcine home.

use std::fs;

use tracing::debug;

use crate::domain::{AppConfig, AppError};
use crate::services::TravelcineHome;

/// Load and validate `config.toml`. A missing file yields the defaults.
pub fn load_config(home: &TravelcineHome) -> Result<AppConfig, AppError> {
    let path = home.config_path();
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    debug!(path = %path.display(), model = %config.gemini.model, "loaded config");
    Ok(config)
}
