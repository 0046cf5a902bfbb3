use std::path::PathBuf;

use clap::Args;

use crate::domain::{AppError, LocationEntry, PosterRequest};
use crate::services::load_reference_image;

/// Trip metadata flags shared by `prompt` and `generate`.
#[derive(Args, Debug)]
pub struct PosterArgs {
    /// Trip title
    #[arg(short, long)]
    title: Option<String>,
    /// Trip title in English
    #[arg(short, long)]
    english_title: Option<String>,
    /// Itinerary stop, repeated three times in travel order
    #[arg(short, long = "stop", value_name = "NAME@YYYY-MM-DD")]
    stops: Vec<String>,
    /// Reference photo of the traveler
    #[arg(short, long)]
    photo: Option<PathBuf>,
}

impl PosterArgs {
    pub fn into_request(self) -> Result<PosterRequest, AppError> {
        let stops = self
            .stops
            .iter()
            .map(|stop| stop.parse::<LocationEntry>())
            .collect::<Result<Vec<_>, _>>()?;

        let request = PosterRequest::new(
            self.title.unwrap_or_default(),
            self.english_title.unwrap_or_default(),
            stops,
        )?;

        match self.photo {
            Some(path) => Ok(request.with_reference_image(load_reference_image(&path)?)),
            None => Ok(request),
        }
    }
}
