//! Result model structs handed to the presentation layer.
//!
//! All structs derive `Serialize` with camelCase field names so they can be
//! passed to a chart front end as JSON.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// A summary statistic that may be missing.
///
/// `Unavailable` is the explicit "no data" signal for an empty filtered view;
/// it is never conflated with zero, which is a valid AQI. Serializes as a
/// number or `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Available(f64),
    Unavailable,
}

impl Metric {
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Metric::Unavailable, Metric::Available)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Metric::Available(_))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Available(v) => write!(f, "{:.2}", v),
            Metric::Unavailable => write!(f, "no data"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Available(v) => serializer.serialize_some(v),
            Metric::Unavailable => serializer.serialize_none(),
        }
    }
}

/// Key metrics over a filtered view, each mean rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of records the means were computed over.
    pub count: usize,
    pub average_aqi: Metric,
    pub average_pm25: Metric,
    pub average_pm10: Metric,
    pub average_ratio: Metric,
}

impl Summary {
    /// The empty-result signal: no records matched the filters.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Mean AQI of one city over a filtered view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityAqi {
    pub city: String,
    /// Rounded to 2 decimal places.
    pub mean_aqi: f64,
}

/// Most and least polluted cities by mean AQI.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CityRanking {
    /// Highest mean AQI first.
    pub top_cities: Vec<CityAqi>,
    /// Lowest mean AQI first.
    pub least_cities: Vec<CityAqi>,
}

/// One point of the per-city AQI trend line.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityTrendPoint {
    pub city: String,
    pub date: NaiveDate,
    pub aqi: f64,
}

/// Share of records falling in one AQI category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    /// Fraction of the filtered view, rounded to 4 decimal places.
    pub share: f64,
}

/// One equal-width AQI histogram bin. `upper` is exclusive except for the
/// last bin.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Five-number summary of one metric for one city (box and violin charts).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityDistribution {
    pub city: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Weather conditions against AQI for one record (scatter and density charts).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPoint {
    pub city: String,
    pub category: String,
    pub temperature: f64,
    pub humidity: f64,
    pub aqi: f64,
}
