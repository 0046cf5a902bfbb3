use crate::domain::AppError;

/// What the user decided after reading the rendered prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Send the prompt as shown.
    Generate,
    /// Replace the prompt and review again.
    Revise(String),
    /// Abandon this poster.
    Cancel,
}

/// Port for the human review steps around generation.
pub trait PromptReviewer {
    /// Decide what to do with the prompt under review.
    fn review(&mut self, prompt: &str) -> Result<ReviewDecision, AppError>;

    /// Ask whether to try again after a failed generation.
    fn retry(&mut self, message: &str) -> Result<bool, AppError>;
}

/// Reviewer for unattended runs: generate once, never retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl PromptReviewer for AutoApprove {
    fn review(&mut self, _prompt: &str) -> Result<ReviewDecision, AppError> {
        Ok(ReviewDecision::Generate)
    }

    fn retry(&mut self, _message: &str) -> Result<bool, AppError> {
        Ok(false)
    }
}
