//! Distribution feeds for the category pie, AQI histogram, per-city box and
//! violin charts, and the weather scatter plots.

use crate::filter::FilteredView;
use crate::models::{CategoryShare, CityDistribution, HistogramBin, WeatherPoint};
use aqd_core::Measurement;
use aqd_utils::numbers::{quantile_sorted, round_to};
use std::collections::{BTreeMap, HashMap};

/// Default number of AQI histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// The measurement a per-city distribution is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionMetric {
    Aqi,
    Pm25,
}

impl DistributionMetric {
    fn value(&self, m: &Measurement) -> f64 {
        match self {
            DistributionMetric::Aqi => m.aqi,
            DistributionMetric::Pm25 => m.pm25,
        }
    }
}

/// Record count per AQI category, most frequent first (ties by name).
pub fn category_distribution(view: &FilteredView<'_>) -> Vec<CategoryShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in view.iter() {
        *counts.entry(m.aqi_category.as_str()).or_default() += 1;
    }
    let total = view.len() as f64;
    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category: category.to_string(),
            count,
            share: round_to(count as f64 / total, 4),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    shares
}

/// Equal-width AQI histogram over [min, max] of the view.
///
/// When every value is the same a single bin holds them all. An empty view
/// or `bins == 0` yields no bins.
pub fn aqi_histogram(view: &FilteredView<'_>, bins: usize) -> Vec<HistogramBin> {
    if view.is_empty() || bins == 0 {
        return Vec::new();
    }
    let (min, max) = view
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), m| (lo.min(m.aqi), hi.max(m.aqi)));
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: view.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for m in view.iter() {
        let idx = (((m.aqi - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Five-number summary of `metric` per city, cities sorted by name.
pub fn city_distributions(view: &FilteredView<'_>, metric: DistributionMetric) -> Vec<CityDistribution> {
    let mut by_city: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for m in view.iter() {
        by_city.entry(m.city.as_str()).or_default().push(metric.value(m));
    }
    by_city
        .into_iter()
        .filter_map(|(city, mut values)| {
            values.sort_by(f64::total_cmp);
            Some(CityDistribution {
                city: city.to_string(),
                count: values.len(),
                min: *values.first()?,
                q1: quantile_sorted(&values, 0.25)?,
                median: quantile_sorted(&values, 0.5)?,
                q3: quantile_sorted(&values, 0.75)?,
                max: *values.last()?,
            })
        })
        .collect()
}

/// Temperature, humidity and AQI per record, in view order.
pub fn weather_points(view: &FilteredView<'_>) -> Vec<WeatherPoint> {
    view.iter()
        .map(|m| WeatherPoint {
            city: m.city.clone(),
            category: m.aqi_category.clone(),
            temperature: m.temperature,
            humidity: m.humidity,
            aqi: m.aqi,
        })
        .collect()
}
