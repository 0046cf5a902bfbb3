//! Itinerary span computed from the stop dates.

use std::fmt;

use chrono::NaiveDate;

const DISPLAY_FORMAT: &str = "%Y.%m.%d";

/// Earliest and latest date of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Compute the span over the given dates, ignoring their order.
    ///
    /// Returns `None` when no date is present.
    pub fn from_dates<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut dates = dates.into_iter();
        let first = dates.next()?;
        let (start, end) =
            dates.fold((first, first), |(start, end), date| (start.min(date), end.max(date)));
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when the whole trip happens on a single day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", self.start.format(DISPLAY_FORMAT))
        } else {
            write!(f, "{} – {}", self.start.format(DISPLAY_FORMAT), self.end.format(DISPLAY_FORMAT))
        }
    }
}

/// Render the span of the given dates, or an empty string when none are set.
pub fn format_date_range<I>(dates: I) -> String
where
    I: IntoIterator<Item = NaiveDate>,
{
    DateRange::from_dates(dates).map(|range| range.to_string()).unwrap_or_default()
}
