//! CLI Adapter.

mod generate;
mod interactive;
mod poster_args;
mod template;

use clap::{Parser, Subcommand};

use crate::domain::AppError;
use poster_args::PosterArgs;

#[derive(Parser)]
#[command(name = "travelcine")]
#[command(version)]
#[command(
    about = "Compose travel poster prompts and render cinematic posters",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the poster prompt without generating an image
    #[clap(visible_alias = "p")]
    Prompt {
        #[command(flatten)]
        poster: PosterArgs,
        /// Also copy the prompt to the system clipboard
        #[arg(short, long)]
        copy: bool,
    },
    /// Review the prompt, generate the poster and save it
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        poster: PosterArgs,
        #[command(flatten)]
        options: generate::GenerateArgs,
    },
    /// Passcode-protected prompt template editor
    #[clap(visible_alias = "tp")]
    Template {
        #[command(subcommand)]
        command: template::TemplateCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Prompt { poster, copy } => run_prompt(poster, copy),
        Commands::Generate { poster, options } => generate::run_generate(poster, options),
        Commands::Template { command } => template::run_template(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_prompt(poster: PosterArgs, copy: bool) -> Result<(), AppError> {
    let prompt = crate::app::api::prompt(poster.into_request()?)?;
    println!("{}", prompt);
    if copy {
        crate::app::api::copy_to_clipboard(&prompt)?;
        eprintln!("📋 Copied prompt to clipboard");
    }
    Ok(())
}
