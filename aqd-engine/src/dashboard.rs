use crate::distribution::{
    aqi_histogram, category_distribution, city_distributions, weather_points, DistributionMetric,
    DEFAULT_HISTOGRAM_BINS,
};
use crate::error::Result;
use crate::filter::{apply_filter, FilterSpec};
use crate::models::{
    CategoryShare, CityDistribution, CityRanking, CityTrendPoint, HistogramBin, Summary,
    WeatherPoint,
};
use crate::ranking::{rank_cities, DEFAULT_RANK_SIZE};
use crate::summary::summarize;
use crate::trend::trend_series;
use aqd_core::MeasurementStore;
use log::info;
use serde::Serialize;

/// Everything the dashboard page displays for one filter spec.
///
/// Every field is derived from a single evaluation of the spec so the metric
/// cards and charts always agree with each other.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: Summary,
    pub ranking: CityRanking,
    pub trend: Vec<CityTrendPoint>,
    pub categories: Vec<CategoryShare>,
    pub histogram: Vec<HistogramBin>,
    pub aqi_by_city: Vec<CityDistribution>,
    pub pm25_by_city: Vec<CityDistribution>,
    pub weather: Vec<WeatherPoint>,
}

impl Dashboard {
    /// Filter the store once and derive every display from the result.
    pub fn build(store: &MeasurementStore, spec: &FilterSpec) -> Result<Self> {
        let view = apply_filter(store, spec)?;
        let dashboard = Dashboard {
            summary: summarize(&view),
            ranking: rank_cities(&view, DEFAULT_RANK_SIZE),
            trend: trend_series(&view),
            categories: category_distribution(&view),
            histogram: aqi_histogram(&view, DEFAULT_HISTOGRAM_BINS),
            aqi_by_city: city_distributions(&view, DistributionMetric::Aqi),
            pm25_by_city: city_distributions(&view, DistributionMetric::Pm25),
            weather: weather_points(&view),
        };
        info!(
            "[AQD] dashboard: built from {} of {} records",
            view.len(),
            store.len()
        );
        Ok(dashboard)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
