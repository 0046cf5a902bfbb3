use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::template::resolve_template;
use crate::domain::{AppError, PosterRequest, PosterSession};
use crate::ports::{ClipboardWriter, ImageGeneratorFactory, TemplateStore};

/// Render the prompt for a request with the active template.
pub fn execute<S, G>(ctx: &AppContext<S, G>, request: PosterRequest) -> Result<String, AppError>
where
    S: TemplateStore,
    G: ImageGeneratorFactory,
{
    let template = resolve_template(ctx.store())?;
    let mut session = PosterSession::new();
    Ok(session.submit(request, &template)?.to_string())
}

/// Copy a rendered prompt to the clipboard.
pub fn copy<C: ClipboardWriter + ?Sized>(clipboard: &mut C, prompt: &str) -> Result<(), AppError> {
    clipboard.write_text(prompt)?;
    debug!(chars = prompt.chars().count(), "copied prompt to clipboard");
    Ok(())
}
