use std::path::PathBuf;

use clap::Subcommand;

use super::interactive::{confirm, edit_text, resolve_passcode, stdin_is_terminal};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Print the active prompt template
    Show {
        /// Editor passcode (prompted when omitted)
        #[arg(long)]
        passcode: Option<String>,
    },
    /// Replace the prompt template
    Edit {
        /// Editor passcode (prompted when omitted)
        #[arg(long)]
        passcode: Option<String>,
        /// Read the new template from a file instead of opening $EDITOR
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Restore the built-in prompt template
    Reset {
        /// Editor passcode (prompted when omitted)
        #[arg(long)]
        passcode: Option<String>,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the location of the template store
    Path,
    /// List the tokens substituted into templates
    #[clap(visible_alias = "vars")]
    Tokens,
}

pub fn run_template(command: TemplateCommands) -> Result<(), AppError> {
    match command {
        TemplateCommands::Show { passcode } => {
            let template = crate::app::api::template_show(&resolve_passcode(passcode)?)?;
            println!("{}", template);
        }
        TemplateCommands::Edit { passcode, file } => run_edit(passcode, file)?,
        TemplateCommands::Reset { passcode, yes } => run_reset(passcode, yes)?,
        TemplateCommands::Path => {
            println!("{}", crate::app::api::template_path()?.display());
        }
        TemplateCommands::Tokens => {
            for token in crate::app::api::template_tokens() {
                println!("{:<18} {}", token.placeholder(), token.description());
            }
        }
    }
    Ok(())
}

fn run_edit(passcode: Option<String>, file: Option<PathBuf>) -> Result<(), AppError> {
    let passcode = resolve_passcode(passcode)?;

    let new_template = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let current = crate::app::api::template_show(&passcode)?;
            match edit_text("template", &current)? {
                Some(edited) if edited != current => edited,
                _ => {
                    println!("Template unchanged");
                    return Ok(());
                }
            }
        }
    };

    crate::app::api::template_edit(&passcode, new_template)?;
    println!("✅ Saved prompt template");
    Ok(())
}

fn run_reset(passcode: Option<String>, yes: bool) -> Result<(), AppError> {
    let passcode = resolve_passcode(passcode)?;

    if !yes {
        if !stdin_is_terminal() {
            return Err(AppError::Interaction {
                what: "confirmation".to_string(),
                details: "stdin is not a terminal; pass --yes".to_string(),
            });
        }
        if !confirm("Restore the default prompt template? Your changes will be lost.", false)? {
            println!("Template unchanged");
            return Ok(());
        }
    }

    crate::app::api::template_reset(&passcode)?;
    println!("✅ Restored default prompt template");
    Ok(())
}
