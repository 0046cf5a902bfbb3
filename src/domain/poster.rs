//! Trip metadata collected for one poster.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::{AppError, InlineImage};

/// Number of itinerary stops on a poster.
pub const STOP_COUNT: usize = 3;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date as entered by the user.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| AppError::InvalidDate { value: value.to_string() })
}

/// One stop of the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationEntry {
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl LocationEntry {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date: Some(date) }
    }

    /// Date in input format, empty when unset.
    pub fn date_string(&self) -> String {
        self.date.map(|d| d.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
    }
}

impl FromStr for LocationEntry {
    type Err = AppError;

    /// Parse `NAME@YYYY-MM-DD`; the last `@` separates the date.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, date) =
            value.rsplit_once('@').ok_or_else(|| AppError::InvalidStop(value.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidStop(value.to_string()));
        }
        Ok(Self::new(name, parse_date(date)?))
    }
}

/// Everything the prompt template and the image API need for one poster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosterRequest {
    pub title: String,
    pub english_title: String,
    pub locations: [LocationEntry; STOP_COUNT],
    pub reference_image: Option<InlineImage>,
}

impl PosterRequest {
    /// Build a request from at most three stops; missing stops stay empty.
    pub fn new(
        title: impl Into<String>,
        english_title: impl Into<String>,
        stops: Vec<LocationEntry>,
    ) -> Result<Self, AppError> {
        if stops.len() > STOP_COUNT {
            return Err(AppError::TooManyStops(stops.len()));
        }
        let mut locations: [LocationEntry; STOP_COUNT] = Default::default();
        for (slot, stop) in locations.iter_mut().zip(stops) {
            *slot = stop;
        }
        Ok(Self {
            title: title.into(),
            english_title: english_title.into(),
            locations,
            reference_image: None,
        })
    }

    pub fn with_reference_image(mut self, image: InlineImage) -> Self {
        self.reference_image = Some(image);
        self
    }

    /// Dates that have been filled in, in stop order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.locations.iter().filter_map(|location| location.date)
    }

    /// Check that every required field is populated.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::MissingField("title".into()));
        }
        if self.english_title.trim().is_empty() {
            return Err(AppError::MissingField("english title".into()));
        }
        for (index, location) in self.locations.iter().enumerate() {
            if location.name.trim().is_empty() {
                return Err(AppError::MissingField(format!("stop {} name", index + 1)));
            }
            if location.date.is_none() {
                return Err(AppError::MissingField(format!("stop {} date", index + 1)));
            }
        }
        Ok(())
    }
}
