use crate::error::{LoadError, Result};
use aqd_utils::dates::parse_date_opt;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Header names of the required dataset columns.
pub const COL_DATE: &str = "Date";
pub const COL_CITY: &str = "City";
pub const COL_AQI: &str = "AQI";
pub const COL_CATEGORY: &str = "AQI Category";
pub const COL_PM25: &str = "PM2.5";
pub const COL_PM10: &str = "PM10";
pub const COL_RATIO: &str = "PM2.5/PM10 Ratio";
pub const COL_TEMPERATURE: &str = "Temperature";
pub const COL_HUMIDITY: &str = "Humidity";

/// A single per-city, per-day air quality measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Calendar date; `None` when the source cell did not parse as DD-MM-YYYY.
    pub date: Option<NaiveDate>,
    pub city: String,
    pub aqi: f64,
    pub aqi_category: String,
    /// PM2.5 concentration in µg/m³
    pub pm25: f64,
    /// PM10 concentration in µg/m³
    pub pm10: f64,
    /// Stored PM2.5/PM10 ratio, trusted as loaded.
    pub pm25_pm10_ratio: f64,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Column positions of the required fields within a CSV header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    date: usize,
    city: usize,
    aqi: usize,
    category: usize,
    pm25: usize,
    pm10: usize,
    ratio: usize,
    temperature: usize,
    humidity: usize,
}

impl ColumnIndex {
    /// Locate every required column by exact header name. Extra columns are
    /// ignored; column order does not matter.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            date: find(COL_DATE)?,
            city: find(COL_CITY)?,
            aqi: find(COL_AQI)?,
            category: find(COL_CATEGORY)?,
            pm25: find(COL_PM25)?,
            pm10: find(COL_PM10)?,
            ratio: find(COL_RATIO)?,
            temperature: find(COL_TEMPERATURE)?,
            humidity: find(COL_HUMIDITY)?,
        })
    }
}

/// Parse a numeric cell. Blank, non-numeric and non-finite cells are errors.
fn parse_number(record: &StringRecord, idx: usize, column: &'static str, row: usize) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidValue {
            row,
            column,
            value: raw.to_string(),
        }),
    }
}

fn parse_non_negative(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64> {
    let value = parse_number(record, idx, column, row)?;
    if value < 0.0 {
        return Err(LoadError::OutOfRange { row, column, value });
    }
    Ok(value)
}

impl Measurement {
    /// Convert one CSV record into a Measurement. `row` is the 1-based data
    /// row number used in error messages.
    pub(crate) fn from_record(record: &StringRecord, cols: &ColumnIndex, row: usize) -> Result<Self> {
        let city = record.get(cols.city).unwrap_or("").trim().to_string();
        if city.is_empty() {
            return Err(LoadError::EmptyCity { row });
        }
        let date = parse_date_opt(record.get(cols.date).unwrap_or(""));
        let aqi = parse_non_negative(record, cols.aqi, COL_AQI, row)?;
        let aqi_category = record.get(cols.category).unwrap_or("").trim().to_string();
        let pm25 = parse_non_negative(record, cols.pm25, COL_PM25, row)?;
        let pm10 = parse_non_negative(record, cols.pm10, COL_PM10, row)?;
        let pm25_pm10_ratio = parse_number(record, cols.ratio, COL_RATIO, row)?;
        let temperature = parse_number(record, cols.temperature, COL_TEMPERATURE, row)?;
        let humidity = parse_number(record, cols.humidity, COL_HUMIDITY, row)?;
        if !(0.0..=100.0).contains(&humidity) {
            return Err(LoadError::OutOfRange {
                row,
                column: COL_HUMIDITY,
                value: humidity,
            });
        }
        Ok(Measurement {
            date,
            city,
            aqi,
            aqi_category,
            pm25,
            pm10,
            pm25_pm10_ratio,
            temperature,
            humidity,
        })
    }

    /// True when the record carries a parsed date.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}
