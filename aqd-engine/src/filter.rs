//! Filter specs and the filtered view they produce.
//!
//! A [`FilterSpec`] is the conjunction of three predicates: an optional
//! inclusive date range, an AQI category selector and a city selector.
//! Selectors use the literal `"All"` as the non-filtering sentinel.

use crate::error::{EngineError, FilterField, Result};
use aqd_core::{DateRange, Measurement, MeasurementStore};
use log::debug;
use std::fmt;

/// The sentinel value meaning "do not filter on this field".
pub const ALL: &str = "All";

/// A category or city selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a selector string; exactly `"All"` means no filtering.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// True when `value` passes this selector (exact, case-sensitive).
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL),
            Selection::Only(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

/// User-chosen constraints narrowing the measurement set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub date_range: Option<DateRange>,
    pub category: Selection,
    pub city: Selection,
}

impl FilterSpec {
    /// A spec that keeps every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<Selection>) -> Self {
        self.city = city.into();
        self
    }

    /// Check the spec against the store without evaluating it.
    pub fn validate(&self, store: &MeasurementStore) -> Result<()> {
        if let Some(range) = &self.date_range {
            if !range.is_valid() {
                return Err(EngineError::InvalidRange {
                    start: range.start(),
                    end: range.end(),
                });
            }
        }
        if let Selection::Only(category) = &self.category {
            if !store.contains_category(category) {
                return Err(EngineError::UnknownFilterValue {
                    field: FilterField::Category,
                    value: category.clone(),
                });
            }
        }
        if let Selection::Only(city) = &self.city {
            if !store.contains_city(city) {
                return Err(EngineError::UnknownFilterValue {
                    field: FilterField::City,
                    value: city.clone(),
                });
            }
        }
        Ok(())
    }

    /// True when the record satisfies all three predicates. Undated records
    /// never pass a date range.
    pub fn matches(&self, m: &Measurement) -> bool {
        let in_range = match (&self.date_range, &m.date) {
            (None, _) => true,
            (Some(range), Some(date)) => range.contains(date),
            (Some(_), None) => false,
        };
        in_range && self.category.matches(&m.aqi_category) && self.city.matches(&m.city)
    }
}

/// The records of a store that satisfy a filter spec, in store order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a Measurement>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a Measurement] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Measurement> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Evaluate `spec` against `store`.
///
/// The spec is validated first; on error nothing is evaluated. The result
/// borrows from the store and keeps its insertion order.
pub fn apply_filter<'a>(store: &'a MeasurementStore, spec: &FilterSpec) -> Result<FilteredView<'a>> {
    spec.validate(store)?;
    let records: Vec<&Measurement> = store.records().iter().filter(|m| spec.matches(m)).collect();
    debug!(
        "[AQD] filter: kept {} of {} records (category={}, city={}, range={:?})",
        records.len(),
        store.len(),
        spec.category,
        spec.city,
        spec.date_range
    );
    Ok(FilteredView { records })
}
