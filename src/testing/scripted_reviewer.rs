use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{PromptReviewer, ReviewDecision};

/// Replays pre-recorded review decisions and retry answers.
#[derive(Default)]
pub struct ScriptedReviewer {
    decisions: VecDeque<ReviewDecision>,
    retries: VecDeque<bool>,
    pub reviewed_prompts: Vec<String>,
    pub failure_messages: Vec<String>,
}

impl ScriptedReviewer {
    pub fn new(decisions: Vec<ReviewDecision>, retries: Vec<bool>) -> Self {
        Self { decisions: decisions.into(), retries: retries.into(), ..Self::default() }
    }
}

impl PromptReviewer for ScriptedReviewer {
    fn review(&mut self, prompt: &str) -> Result<ReviewDecision, AppError> {
        self.reviewed_prompts.push(prompt.to_string());
        Ok(self.decisions.pop_front().unwrap_or(ReviewDecision::Generate))
    }

    fn retry(&mut self, message: &str) -> Result<bool, AppError> {
        self.failure_messages.push(message.to_string());
        Ok(self.retries.pop_front().unwrap_or(false))
    }
}
