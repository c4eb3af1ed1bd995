use crate::filter::FilteredView;
use crate::models::CityTrendPoint;
use aqd_core::Measurement;

/// Records of the view in chronological order for time-series charts.
///
/// The sort is stable, so records sharing a date keep their view order.
/// Undated records have no place on a time axis and are left out.
pub fn order_for_trend<'a>(view: &FilteredView<'a>) -> Vec<&'a Measurement> {
    let mut ordered: Vec<&Measurement> = view.iter().filter(|m| m.is_dated()).collect();
    ordered.sort_by_key(|m| m.date);
    ordered
}

/// AQI trend points, one line per city, in chronological order.
pub fn trend_series(view: &FilteredView<'_>) -> Vec<CityTrendPoint> {
    order_for_trend(view)
        .into_iter()
        .filter_map(|m| {
            m.date.map(|date| CityTrendPoint {
                city: m.city.clone(),
                date,
                aqi: m.aqi,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filter, FilterSpec};
    use aqd_core::MeasurementStore;
    use chrono::NaiveDate;

    const CSV: &str = "\
Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
03-01-2023,A,30,Good,10,20,0.5,20,50
01-01-2023,B,11,Good,10,20,0.5,20,50
not-a-date,C,99,Good,10,20,0.5,20,50
01-01-2023,A,12,Good,10,20,0.5,20,50
02-01-2023,B,20,Good,10,20,0.5,20,50
";

    #[test]
    fn order_for_trend_is_stable_by_date() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let ordered = order_for_trend(&view);
        let aqis: Vec<f64> = ordered.iter().map(|m| m.aqi).collect();
        assert_eq!(aqis, [11.0, 12.0, 20.0, 30.0]);
    }

    #[test]
    fn order_for_trend_leaves_view_untouched() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let before = view.clone();
        let _ = order_for_trend(&view);
        assert_eq!(view, before);
        assert_eq!(view.records()[0].aqi, 30.0);
    }

    #[test]
    fn trend_series_points() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let view = apply_filter(&store, &FilterSpec::all().with_city("B")).unwrap();
        let series = trend_series(&view);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(series[0].city, "B");
        assert_eq!(series[1].aqi, 20.0);
    }
}
