//! Template editor commands.
//!
//! Every call is one presentation of the editor: the gate starts locked and
//! must be unlocked with the passcode before the template can be read or
//! changed.

use crate::domain::{AppError, DEFAULT_PROMPT_TEMPLATE, PromptToken, TemplateEditor};
use crate::ports::TemplateStore;

/// Active template: the saved one, or the built-in default on a miss.
pub fn resolve_template<S: TemplateStore + ?Sized>(store: &S) -> Result<String, AppError> {
    Ok(store
        .load()?
        .filter(|template| !template.is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string()))
}

/// Present the editor and unlock it with the passcode.
pub fn open_editor<S: TemplateStore + ?Sized>(
    store: &S,
    passcode: &str,
) -> Result<TemplateEditor, AppError> {
    let mut editor = TemplateEditor::open(resolve_template(store)?);
    editor.unlock(passcode)?;
    Ok(editor)
}

/// Show the active template.
pub fn show<S: TemplateStore + ?Sized>(store: &S, passcode: &str) -> Result<String, AppError> {
    let editor = open_editor(store, passcode)?;
    Ok(editor.draft()?.to_string())
}

/// Replace the active template and persist it.
pub fn edit<S: TemplateStore + ?Sized>(
    store: &S,
    passcode: &str,
    template: String,
) -> Result<String, AppError> {
    let mut editor = open_editor(store, passcode)?;
    editor.edit(template)?;
    editor.save(store)
}

/// Restore the built-in template and persist it.
pub fn reset<S: TemplateStore + ?Sized>(store: &S, passcode: &str) -> Result<String, AppError> {
    let mut editor = open_editor(store, passcode)?;
    editor.reset()?;
    editor.save(store)
}

/// Tokens recognized by the prompt renderer.
pub fn tokens() -> Vec<PromptToken> {
    PromptToken::ALL.to_vec()
}
