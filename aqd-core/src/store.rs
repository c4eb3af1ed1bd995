use crate::error::Result;
use crate::measurement::{ColumnIndex, Measurement};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Embedded sample dataset, handy for demos and tests.
pub static SAMPLE_CSV: &str = include_str!("../../fixtures/air_quality.csv");

/// The immutable set of measurements loaded for a session.
///
/// Built once from a CSV source and never mutated afterwards. Consumers
/// borrow it (`&MeasurementStore`) or share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementStore {
    records: Vec<Measurement>,
    cities: Vec<String>,
    categories: Vec<String>,
}

/// Push `value` if it is not already present, keeping first-appearance order.
fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

impl MeasurementStore {
    /// Build a store from already-validated measurements.
    pub fn from_measurements(records: Vec<Measurement>) -> Self {
        let mut cities = Vec::new();
        let mut categories = Vec::new();
        for m in &records {
            push_distinct(&mut cities, &m.city);
            push_distinct(&mut categories, &m.aqi_category);
        }
        MeasurementStore {
            records,
            cities,
            categories,
        }
    }

    /// Parse a CSV dataset (with header row) from any reader.
    ///
    /// Expected columns: `Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity`
    ///
    /// Rows whose date does not parse are kept but left undated. Any malformed
    /// numeric cell rejects the whole dataset.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let cols = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            records.push(Measurement::from_record(&record, &cols, i + 1)?);
        }

        let store = Self::from_measurements(records);
        let undated = store.undated_count();
        if undated > 0 {
            warn!(
                "[AQD] store: {} of {} records have unparsable dates and are excluded from date filters",
                undated,
                store.len()
            );
        }
        info!(
            "[AQD] store: Loaded {} measurements for {} cities",
            store.len(),
            store.cities.len()
        );
        Ok(store)
    }

    /// Parse a CSV dataset from a string.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load a CSV dataset from disk. Files ending in `.gz` are gunzipped first.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        info!("[AQD] store: Reading {}", path.display());
        if is_gzip_name(&path.to_string_lossy()) {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }

    /// The bundled sample dataset.
    pub fn sample() -> Result<Self> {
        Self::from_csv_str(SAMPLE_CSV)
    }

    /// All records in load order.
    pub fn records(&self) -> &[Measurement] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names in first-appearance order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Distinct AQI categories in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Earliest and latest parsed dates, or None if no record is dated.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(|m| m.date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Number of records whose date failed to parse.
    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|m| !m.is_dated()).count()
    }
}

/// True when a path or URL names a gzip-compressed file.
pub fn is_gzip_name(name: &str) -> bool {
    name.ends_with(".gz")
}
