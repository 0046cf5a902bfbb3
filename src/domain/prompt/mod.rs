pub mod default_template;
pub mod template;

pub use default_template::DEFAULT_PROMPT_TEMPLATE;
pub use template::{PromptToken, render_prompt};
