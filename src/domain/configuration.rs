//! Configuration loaded from `config.toml` in the travelcine home.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Image API settings.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Where generated posters are written.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini image API configuration.
///
/// Aspect ratio and image size are fixed per installation and are sent with
/// every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the API, ending in the version segment.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Image-capable model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Poster aspect ratio.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Rendered image size class.
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            aspect_ratio: default_aspect_ratio(),
            image_size: default_image_size(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.aspect_ratio.trim().is_empty() {
            return Err(AppError::InvalidConfig("aspect_ratio must not be empty".to_string()));
        }
        if self.image_size.trim().is_empty() {
            return Err(AppError::InvalidConfig("image_size must not be empty".to_string()));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(&format!("models/{}:generateContent", self.model))
            .map_err(|e| AppError::InvalidConfig(format!("Invalid API URL: {}", e)))
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for saved posters, relative to the working directory.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: default_output_directory() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_aspect_ratio() -> String {
    "9:16".to_string()
}

fn default_image_size() -> String {
    "1K".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}
