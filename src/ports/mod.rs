mod clipboard_writer;
mod image_generator;
mod prompt_reviewer;
mod template_store;

pub use clipboard_writer::ClipboardWriter;
pub use image_generator::{
    GenerationRequest, ImageGenerator, ImageGeneratorFactory, MockImageGenerator,
};
pub use prompt_reviewer::{AutoApprove, PromptReviewer, ReviewDecision};
pub use template_store::TemplateStore;
