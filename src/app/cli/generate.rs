use std::path::PathBuf;

use clap::Args;

use super::interactive::{TerminalReviewer, stdin_is_terminal};
use super::poster_args::PosterArgs;
use crate::app::api::{GenerateOptions, GenerateOutcome};
use crate::domain::AppError;
use crate::ports::AutoApprove;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Send the contents of this file instead of the rendered prompt
    #[arg(long, value_name = "FILE")]
    prompt_file: Option<PathBuf>,
    /// Directory for the saved poster (defaults to [output] directory in config.toml)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Skip prompt review and generate immediately
    #[arg(short, long)]
    yes: bool,
    /// Use an offline placeholder instead of calling the image API
    #[arg(long)]
    mock: bool,
}

pub fn run_generate(poster: PosterArgs, args: GenerateArgs) -> Result<(), AppError> {
    let request = poster.into_request()?;
    let prompt_override = match &args.prompt_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    let options = GenerateOptions { prompt_override, output_dir: args.output };

    let outcome = if args.yes || !stdin_is_terminal() {
        crate::app::api::generate(request, &options, &mut AutoApprove, args.mock)?
    } else {
        crate::app::api::generate(request, &options, &mut TerminalReviewer, args.mock)?
    };

    match outcome {
        GenerateOutcome::Saved { path, .. } => {
            println!("✅ Saved poster to {}", path.display());
        }
        GenerateOutcome::Cancelled => {
            println!("Generation cancelled");
        }
    }
    Ok(())
}
