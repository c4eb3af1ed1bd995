//! Dataset loading and filter flag parsing.

use crate::{FilterArgs, DEFAULT_DATA_PATH};
use anyhow::Context;
use aqd_core::fetch::{fetch_store, is_url};
use aqd_core::{DateRange, MeasurementStore};
use aqd_engine::{FilterSpec, Selection};
use aqd_utils::dates::parse_date;
use log::{info, warn};
use std::path::Path;

/// Load the measurement store from a local path or an http(s) URL.
///
/// When the default path is used and missing (the binary was started outside
/// the workspace), the embedded sample dataset is loaded instead.
pub async fn load_store(location: &str) -> anyhow::Result<MeasurementStore> {
    let store = if is_url(location) {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        fetch_store(&client, location)
            .await
            .with_context(|| format!("Failed to fetch dataset from {}", location))?
    } else if location == DEFAULT_DATA_PATH && !Path::new(location).exists() {
        warn!("{} not found, using the embedded sample dataset", location);
        MeasurementStore::sample()?
    } else {
        MeasurementStore::from_path(location)
            .with_context(|| format!("Failed to load dataset from {}", location))?
    };
    info!("Loaded {} measurements from {}", store.len(), location);
    Ok(store)
}

/// Turn the filter flags into a spec. A lone `--start` or `--end` selects
/// that single day.
pub fn filter_spec(args: &FilterArgs) -> anyhow::Result<FilterSpec> {
    let parse = |flag: &str, value: &Option<String>| -> anyhow::Result<Option<chrono::NaiveDate>> {
        value
            .as_deref()
            .map(|s| parse_date(s).with_context(|| format!("--{} expects DD-MM-YYYY, got {:?}", flag, s)))
            .transpose()
    };
    let start = parse("start", &args.start)?;
    let end = parse("end", &args.end)?;
    Ok(FilterSpec {
        date_range: DateRange::from_bounds(start, end),
        category: Selection::parse(&args.category),
        city: Selection::parse(&args.city),
    })
}
