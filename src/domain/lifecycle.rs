//! Poster generation lifecycle.
//!
//! ```text
//! Idle --submit--> PromptReview --confirm--> Generating --ok--> Success
//!                       ^                        |
//!                       |                        +--err--> Error --confirm--> Generating
//!                       +------------submit (any state but Generating)
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::prompt::render_prompt;
use crate::domain::{AppError, InlineImage, PosterRequest};
use crate::ports::{GenerationRequest, ImageGeneratorFactory};

/// Message shown to the user whenever a generation attempt fails.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Poster generation failed. Check your API key and try again.";

/// Stage of a single poster generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    PromptReview,
    Generating,
    Success,
    Error,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::PromptReview => "prompt_review",
            LifecycleState::Generating => "generating",
            LifecycleState::Success => "success",
            LifecycleState::Error => "error",
        }
    }

    /// Whether a confirm action starts a generation from this state.
    pub fn can_confirm(&self) -> bool {
        matches!(self, LifecycleState::PromptReview | LifecycleState::Error)
    }

    /// Whether the reviewed prompt may still be changed.
    pub fn can_edit_prompt(&self) -> bool {
        matches!(self, LifecycleState::PromptReview | LifecycleState::Error)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns the request, the reviewed prompt and the lifecycle of one poster.
#[derive(Debug, Default)]
pub struct PosterSession {
    state: LifecycleState,
    request: PosterRequest,
    prompt: String,
    poster: Option<InlineImage>,
    error_message: Option<&'static str>,
}

impl PosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Prompt currently under review.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Most recently generated poster.
    pub fn poster(&self) -> Option<&InlineImage> {
        self.poster.as_ref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    /// Validate the request and render its prompt for review.
    pub fn submit(&mut self, request: PosterRequest, template: &str) -> Result<&str, AppError> {
        if self.state == LifecycleState::Generating {
            return Err(AppError::GenerationInProgress);
        }
        request.validate()?;

        self.prompt = render_prompt(&request, template);
        self.request = request;
        self.transition(LifecycleState::PromptReview);
        Ok(&self.prompt)
    }

    /// Replace the reviewed prompt. It is sent verbatim on confirm.
    pub fn edit_prompt(&mut self, prompt: impl Into<String>) -> Result<(), AppError> {
        if !self.state.can_edit_prompt() {
            return Err(AppError::PromptNotEditable(self.state));
        }
        self.prompt = prompt.into();
        Ok(())
    }

    /// Start generating. Returns `None` (and changes nothing) unless the
    /// session is reviewing a prompt or recovering from a failure.
    pub fn confirm(&mut self) -> Option<GenerationRequest> {
        if !self.state.can_confirm() {
            debug!(state = %self.state, "confirm ignored");
            return None;
        }
        self.error_message = None;
        self.transition(LifecycleState::Generating);
        Some(GenerationRequest {
            prompt: self.prompt.clone(),
            reference_image: self.request.reference_image.clone(),
        })
    }

    /// Record the outcome of the outstanding generation.
    pub fn complete(&mut self, outcome: Result<InlineImage, AppError>) -> LifecycleState {
        if self.state != LifecycleState::Generating {
            debug!(state = %self.state, "completion ignored");
            return self.state;
        }
        match outcome {
            Ok(poster) => {
                self.poster = Some(poster);
                self.transition(LifecycleState::Success);
            }
            Err(err) => {
                warn!(error = %err, "poster generation failed");
                self.error_message = Some(GENERATION_FAILED_MESSAGE);
                self.transition(LifecycleState::Error);
            }
        }
        self.state
    }

    /// Confirm, call the generator and record the outcome in one step.
    pub fn generate<F: ImageGeneratorFactory + ?Sized>(&mut self, factory: &F) -> LifecycleState {
        let Some(request) = self.confirm() else {
            return self.state;
        };
        let outcome = factory.create().and_then(|generator| generator.generate(request));
        self.complete(outcome)
    }

    fn transition(&mut self, next: LifecycleState) {
        info!(from = %self.state, to = %next, "lifecycle transition");
        self.state = next;
    }
}
