use crate::filter::FilteredView;
use crate::models::{Metric, Summary};
use aqd_core::Measurement;
use aqd_utils::numbers::{mean, round2};

fn rounded_mean(view: &FilteredView<'_>, field: fn(&Measurement) -> f64) -> Metric {
    Metric::from_option(mean(view.iter().map(field)).map(round2))
}

/// Key metrics over a filtered view: mean AQI, PM2.5, PM10 and PM2.5/PM10
/// ratio, each rounded to 2 decimal places.
///
/// An empty view yields `Metric::Unavailable` for every field.
pub fn summarize(view: &FilteredView<'_>) -> Summary {
    Summary {
        count: view.len(),
        average_aqi: rounded_mean(view, |m| m.aqi),
        average_pm25: rounded_mean(view, |m| m.pm25),
        average_pm10: rounded_mean(view, |m| m.pm10),
        average_ratio: rounded_mean(view, |m| m.pm25_pm10_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filter, FilterSpec};
    use aqd_core::MeasurementStore;

    const CSV: &str = "\
Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
01-01-2023,A,40,Good,10,20,0.5,20,50
02-01-2023,B,120,Unhealthy,60,90,0.67,25,40
03-01-2023,A,0,Good,0,0,0,18,55
";

    #[test]
    fn summarize_means_are_rounded() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let summary = summarize(&view);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_aqi, Metric::Available(53.33));
        assert_eq!(summary.average_pm25, Metric::Available(23.33));
        assert_eq!(summary.average_pm10, Metric::Available(36.67));
        assert_eq!(summary.average_ratio, Metric::Available(0.39));
    }

    #[test]
    fn summary_rounds_ties_to_even() {
        let csv = "\
Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
01-01-2023,A,40,Good,10,20,0.125,20,50
02-01-2023,A,40.25,Good,10,20,0.125,20,50
";
        let store = MeasurementStore::from_csv_str(csv).unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let summary = summarize(&view);
        assert_eq!(summary.average_aqi, Metric::Available(40.12));
        assert_eq!(summary.average_ratio, Metric::Available(0.12));
    }

    #[test]
    fn zero_aqi_is_available_not_missing() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let spec = FilterSpec::all().with_date_range(aqd_core::DateRange::single(
            chrono::NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
        ));
        let view = apply_filter(&store, &spec).unwrap();
        let summary = summarize(&view);
        assert_eq!(summary.average_aqi, Metric::Available(0.0));
        assert!(!summary.is_empty());
    }

    #[test]
    fn empty_view_is_unavailable() {
        let summary = summarize(&FilteredView::default());
        assert!(summary.is_empty());
        assert_eq!(summary.average_aqi, Metric::Unavailable);
        assert_eq!(summary.average_pm25, Metric::Unavailable);
        assert_eq!(summary.average_pm10, Metric::Unavailable);
        assert_eq!(summary.average_ratio, Metric::Unavailable);
    }
}
