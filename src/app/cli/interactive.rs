//! Terminal prompts backed by dialoguer.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Editor, Error as DialoguerError, Password, Select};

use crate::domain::AppError;
use crate::ports::{PromptReviewer, ReviewDecision};

const REVIEW_CHOICES: [&str; 3] = ["Generate poster", "Edit prompt", "Cancel"];

pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

fn interaction_error(what: &str, err: DialoguerError) -> AppError {
    AppError::Interaction { what: what.to_string(), details: err.to_string() }
}

/// Map Ctrl-C to `None` like a dismissed dialog.
fn interrupted_as_none<T>(
    what: &str,
    result: Result<Option<T>, DialoguerError>,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interaction_error(what, err)),
    }
}

/// Open `text` in `$EDITOR`. Returns `None` when the editor is closed without saving.
pub fn edit_text(what: &str, text: &str) -> Result<Option<String>, AppError> {
    interrupted_as_none(what, Editor::new().extension(".md").edit(text))
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool, AppError> {
    let answer = interrupted_as_none(
        "confirmation",
        Confirm::new().with_prompt(prompt).default(default).interact_opt(),
    )?;
    Ok(answer.unwrap_or(false))
}

/// Use the given passcode or ask for one without echo.
pub fn resolve_passcode(passcode: Option<String>) -> Result<String, AppError> {
    if let Some(passcode) = passcode {
        return Ok(passcode);
    }
    if !stdin_is_terminal() {
        return Err(AppError::Interaction {
            what: "passcode".to_string(),
            details: "stdin is not a terminal; pass --passcode".to_string(),
        });
    }
    Password::new()
        .with_prompt("Editor passcode")
        .interact()
        .map_err(|err| interaction_error("passcode", err))
}

/// Reviews prompts in the terminal: generate, edit in `$EDITOR`, or cancel.
pub struct TerminalReviewer;

impl PromptReviewer for TerminalReviewer {
    fn review(&mut self, prompt: &str) -> Result<ReviewDecision, AppError> {
        println!();
        println!("── Poster prompt ─────────────────────────────");
        println!("{}", prompt);
        println!("──────────────────────────────────────────────");

        let choice = interrupted_as_none(
            "review choice",
            Select::new()
                .with_prompt("Confirm the prompt")
                .items(&REVIEW_CHOICES)
                .default(0)
                .interact_opt(),
        )?;

        match choice {
            Some(0) => Ok(ReviewDecision::Generate),
            Some(1) => {
                let edited = edit_text("prompt", prompt)?;
                Ok(ReviewDecision::Revise(edited.unwrap_or_else(|| prompt.to_string())))
            }
            _ => Ok(ReviewDecision::Cancel),
        }
    }

    fn retry(&mut self, message: &str) -> Result<bool, AppError> {
        eprintln!("❌ {}", message);
        confirm("Try again?", true)
    }
}
