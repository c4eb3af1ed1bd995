use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range: start date through end date.
///
/// The fields are public so a range can be built from raw user input; a range
/// whose start is after its end is representable and is rejected by whoever
/// consumes it (see [`DateRange::is_valid`]).
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// A range covering exactly one day.
    pub fn single(date: NaiveDate) -> Self {
        DateRange(date, date)
    }

    /// Build a range from optional bounds. A single bound is used for both
    /// ends; no bounds means no range.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(s), Some(e)) => Some(DateRange(s, e)),
            (Some(d), None) | (None, Some(d)) => Some(DateRange::single(d)),
            (None, None) => None,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True when start <= end.
    pub fn is_valid(&self) -> bool {
        self.0 <= self.1
    }

    /// True when `date` lies within [start, end].
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }
}
