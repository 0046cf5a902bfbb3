pub mod access_gate;
pub mod configuration;
pub mod date_range;
pub mod error;
pub mod inline_image;
pub mod lifecycle;
pub mod poster;
pub mod prompt;
pub mod template_editor;

pub use access_gate::{AccessGate, EDITOR_PASSCODE};
pub use configuration::{AppConfig, GeminiApiConfig, OutputConfig};
pub use date_range::{DateRange, format_date_range};
pub use error::AppError;
pub use inline_image::{DEFAULT_IMAGE_MIME, InlineImage};
pub use lifecycle::{GENERATION_FAILED_MESSAGE, LifecycleState, PosterSession};
pub use poster::{LocationEntry, PosterRequest, STOP_COUNT, parse_date};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, PromptToken, render_prompt};
pub use template_editor::TemplateEditor;
