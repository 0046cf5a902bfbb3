//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{generate, prompt, template},
};
use crate::domain::{AppConfig, AppError, PosterRequest, PromptToken};
use crate::ports::{ImageGeneratorFactory, MockImageGenerator, PromptReviewer};
use crate::services::{
    ArboardClipboard, FilesystemTemplateStore, GeminiClientFactory, TravelcineHome,
};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};

/// Create an `AppContext` for the given home with the chosen generator factory.
fn create_context<G: ImageGeneratorFactory>(
    home: &TravelcineHome,
    generators: impl FnOnce(&AppConfig) -> G,
) -> Result<AppContext<FilesystemTemplateStore, G>, AppError> {
    let config = load_config(home)?;
    let store = FilesystemTemplateStore::new(home.store_path());
    let generators = generators(&config);
    Ok(AppContext::new(store, generators, config))
}

fn template_store(home: &TravelcineHome) -> FilesystemTemplateStore {
    FilesystemTemplateStore::new(home.store_path())
}

// =============================================================================
// Poster API
// =============================================================================

/// Render the prompt for a request using the active template.
pub fn prompt(request: PosterRequest) -> Result<String, AppError> {
    prompt_at(&TravelcineHome::from_env()?, request)
}

/// Render the prompt using the template stored under `home`.
pub fn prompt_at(home: &TravelcineHome, request: PosterRequest) -> Result<String, AppError> {
    let ctx = create_context(home, |_| MockImageGenerator)?;
    prompt::execute(&ctx, request)
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = ArboardClipboard::new()?;
    prompt::copy(&mut clipboard, text)
}

/// Review, generate and save a poster.
///
/// # Arguments
/// * `request` - Trip metadata for the poster
/// * `options` - Prompt override and output directory
/// * `reviewer` - Interactive or unattended review steps
/// * `mock` - Use the offline mock generator instead of the Gemini API
pub fn generate<R: PromptReviewer + ?Sized>(
    request: PosterRequest,
    options: &GenerateOptions,
    reviewer: &mut R,
    mock: bool,
) -> Result<GenerateOutcome, AppError> {
    generate_at(&TravelcineHome::from_env()?, request, options, reviewer, mock)
}

/// Review, generate and save a poster using config and template under `home`.
pub fn generate_at<R: PromptReviewer + ?Sized>(
    home: &TravelcineHome,
    request: PosterRequest,
    options: &GenerateOptions,
    reviewer: &mut R,
    mock: bool,
) -> Result<GenerateOutcome, AppError> {
    if mock {
        let ctx = create_context(home, |_| MockImageGenerator)?;
        generate::execute(&ctx, request, options, reviewer)
    } else {
        let ctx = create_context(home, |config| GeminiClientFactory::new(config.gemini.clone()))?;
        generate::execute(&ctx, request, options, reviewer)
    }
}

// =============================================================================
// Template Editor API
// =============================================================================

/// Show the active template after unlocking the editor.
pub fn template_show(passcode: &str) -> Result<String, AppError> {
    template_show_at(&TravelcineHome::from_env()?, passcode)
}

pub fn template_show_at(home: &TravelcineHome, passcode: &str) -> Result<String, AppError> {
    template::show(&template_store(home), passcode)
}

/// Replace and persist the template after unlocking the editor.
pub fn template_edit(passcode: &str, new_template: String) -> Result<String, AppError> {
    template_edit_at(&TravelcineHome::from_env()?, passcode, new_template)
}

pub fn template_edit_at(
    home: &TravelcineHome,
    passcode: &str,
    new_template: String,
) -> Result<String, AppError> {
    template::edit(&template_store(home), passcode, new_template)
}

/// Restore the built-in template after unlocking the editor.
pub fn template_reset(passcode: &str) -> Result<String, AppError> {
    template_reset_at(&TravelcineHome::from_env()?, passcode)
}

pub fn template_reset_at(home: &TravelcineHome, passcode: &str) -> Result<String, AppError> {
    template::reset(&template_store(home), passcode)
}

/// Location of the template store file.
pub fn template_path() -> Result<PathBuf, AppError> {
    Ok(TravelcineHome::from_env()?.store_path())
}

/// Tokens recognized in templates.
pub fn template_tokens() -> Vec<PromptToken> {
    template::tokens()
}
