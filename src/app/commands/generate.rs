//! Review, generate and save a poster.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::template::resolve_template;
use crate::domain::{AppError, GENERATION_FAILED_MESSAGE, LifecycleState, PosterRequest, PosterSession};
use crate::ports::{ImageGeneratorFactory, PromptReviewer, ReviewDecision, TemplateStore};
use crate::services::save_poster;

/// Options for a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replaces the rendered prompt before review.
    pub prompt_override: Option<String>,
    /// Overrides the configured output directory.
    pub output_dir: Option<PathBuf>,
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Poster written to `path`; `prompt` is the text that was sent.
    Saved { path: PathBuf, prompt: String },
    /// The user abandoned the poster during review.
    Cancelled,
}

/// Run one poster through review and generation.
///
/// Failures are surfaced to the reviewer, who decides whether to retry; a
/// retry goes back through review so the prompt can be adjusted first.
pub fn execute<S, G, R>(
    ctx: &AppContext<S, G>,
    request: PosterRequest,
    options: &GenerateOptions,
    reviewer: &mut R,
) -> Result<GenerateOutcome, AppError>
where
    S: TemplateStore,
    G: ImageGeneratorFactory,
    R: PromptReviewer + ?Sized,
{
    let template = resolve_template(ctx.store())?;
    let mut session = PosterSession::new();
    session.submit(request, &template)?;
    if let Some(prompt) = &options.prompt_override {
        session.edit_prompt(prompt.clone())?;
    }

    loop {
        loop {
            match reviewer.review(session.prompt())? {
                ReviewDecision::Generate => break,
                ReviewDecision::Revise(prompt) => session.edit_prompt(prompt)?,
                ReviewDecision::Cancel => {
                    info!(state = %session.state(), "generation cancelled");
                    return Ok(GenerateOutcome::Cancelled);
                }
            }
        }

        if session.generate(ctx.generators()) == LifecycleState::Success {
            break;
        }

        let message = session.error_message().unwrap_or(GENERATION_FAILED_MESSAGE);
        if !reviewer.retry(message)? {
            return Err(AppError::GenerationFailed(message));
        }
    }

    let poster = session.poster().ok_or(AppError::NoImageGenerated)?;
    let directory =
        options.output_dir.clone().unwrap_or_else(|| ctx.config().output.directory.clone());
    let path = save_poster(&directory, poster)?;

    Ok(GenerateOutcome::Saved { path, prompt: session.prompt().to_string() })
}
