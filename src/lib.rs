//! travelcine: compose travel poster prompts and render cinematic posters.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, generate, generate_at, prompt, prompt_at, template_edit,
    template_edit_at, template_path, template_reset, template_reset_at, template_show,
    template_show_at, template_tokens,
};
pub use domain::{AppError, LocationEntry, PosterRequest};
pub use ports::{AutoApprove, PromptReviewer, ReviewDecision};
pub use services::TravelcineHome;
