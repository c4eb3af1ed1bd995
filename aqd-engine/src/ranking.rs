use crate::filter::FilteredView;
use crate::models::{CityAqi, CityRanking};
use aqd_utils::numbers::round2;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Number of cities shown in each ranking by default.
pub const DEFAULT_RANK_SIZE: usize = 3;

/// Mean AQI per city, unrounded, in no particular order.
pub fn city_mean_aqi<'a>(view: &FilteredView<'a>) -> Vec<(&'a str, f64)> {
    let mut sums: HashMap<&'a str, (f64, usize)> = HashMap::new();
    for m in view.iter() {
        let entry = sums.entry(m.city.as_str()).or_insert((0.0, 0));
        entry.0 += m.aqi;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(city, (sum, count))| (city, sum / count as f64))
        .collect()
}

fn to_city_aqi(ranked: &[(&str, f64)], n: usize) -> Vec<CityAqi> {
    ranked
        .iter()
        .take(n)
        .map(|(city, mean)| CityAqi {
            city: city.to_string(),
            mean_aqi: round2(*mean),
        })
        .collect()
}

/// Rank cities by mean AQI over the view.
///
/// `top_cities` is sorted descending and `least_cities` ascending, each
/// truncated to `n` entries. Ties are broken by city name ascending in both
/// lists. Comparison uses unrounded means.
pub fn rank_cities(view: &FilteredView<'_>, n: usize) -> CityRanking {
    let mut means = city_mean_aqi(view);

    means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top_cities = to_city_aqi(&means, n);

    means.sort_by(|a, b| match a.1.total_cmp(&b.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    let least_cities = to_city_aqi(&means, n);

    CityRanking {
        top_cities,
        least_cities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filter, FilterSpec};
    use aqd_core::MeasurementStore;

    const CSV: &str = "\
Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
01-01-2023,Delta,100,Moderate,10,20,0.5,20,50
01-01-2023,Alpha,40,Good,10,20,0.5,20,50
01-01-2023,Charlie,100,Moderate,10,20,0.5,20,50
02-01-2023,Bravo,300,Poor,10,20,0.5,20,50
02-01-2023,Alpha,60,Good,10,20,0.5,20,50
02-01-2023,Echo,10,Good,10,20,0.5,20,50
";

    fn names(list: &[CityAqi]) -> Vec<&str> {
        list.iter().map(|c| c.city.as_str()).collect()
    }

    #[test]
    fn rank_cities_orders_and_truncates() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let ranking = rank_cities(&view, DEFAULT_RANK_SIZE);
        assert_eq!(names(&ranking.top_cities), ["Bravo", "Charlie", "Delta"]);
        assert_eq!(ranking.top_cities[0].mean_aqi, 300.0);
        assert_eq!(names(&ranking.least_cities), ["Echo", "Alpha", "Charlie"]);
        assert_eq!(ranking.least_cities[1].mean_aqi, 50.0);
    }

    #[test]
    fn rank_cities_fewer_cities_than_n() {
        let store = MeasurementStore::from_csv_str(CSV).unwrap();
        let spec = FilterSpec::all().with_city("Alpha");
        let view = apply_filter(&store, &spec).unwrap();
        let ranking = rank_cities(&view, 3);
        assert_eq!(ranking.top_cities.len(), 1);
        assert_eq!(ranking.top_cities, ranking.least_cities);
        assert_eq!(ranking.top_cities[0].mean_aqi, 50.0);
    }

    #[test]
    fn rank_cities_empty_view() {
        let ranking = rank_cities(&FilteredView::default(), 3);
        assert!(ranking.top_cities.is_empty());
        assert!(ranking.least_cities.is_empty());
    }

    #[test]
    fn city_means_are_unrounded() {
        let store = MeasurementStore::from_csv_str(
            "Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
01-01-2023,A,1,Good,1,1,1,1,1
02-01-2023,A,2,Good,1,1,1,1,1
03-01-2023,A,2,Good,1,1,1,1,1
",
        )
        .unwrap();
        let view = apply_filter(&store, &FilterSpec::all()).unwrap();
        let means = city_mean_aqi(&view);
        assert_eq!(means.len(), 1);
        assert!((means[0].1 - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(rank_cities(&view, 3).top_cities[0].mean_aqi, 1.67);
    }
}
