use aqd_core::{DateRange, MeasurementStore};
use aqd_engine::{
    apply_filter, order_for_trend, rank_cities, summarize, CityAqi, FilterSpec, Metric, Selection,
    DEFAULT_RANK_SIZE,
};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
}

/// Every spec buildable from the sample store's selector values, crossed
/// with a handful of date ranges.
fn all_specs(store: &MeasurementStore) -> Vec<FilterSpec> {
    let mut categories = vec![Selection::All];
    categories.extend(store.categories().iter().map(|c| Selection::Only(c.clone())));
    let mut cities = vec![Selection::All];
    cities.extend(store.cities().iter().map(|c| Selection::Only(c.clone())));
    let ranges = [
        None,
        Some(DateRange::single(day(1))),
        Some(DateRange(day(2), day(4))),
        Some(DateRange(day(1), day(5))),
        Some(DateRange(day(6), day(9))),
    ];

    let mut specs = Vec::new();
    for category in &categories {
        for city in &cities {
            for range in &ranges {
                specs.push(FilterSpec {
                    date_range: *range,
                    category: category.clone(),
                    city: city.clone(),
                });
            }
        }
    }
    specs
}

#[test]
fn identity_spec_returns_whole_store_in_order() {
    let store = MeasurementStore::sample().unwrap();
    let view = apply_filter(&store, &FilterSpec::all()).unwrap();
    assert_eq!(view.len(), store.len());
    for (kept, original) in view.iter().zip(store.records()) {
        assert!(std::ptr::eq(kept, original));
    }
}

#[test]
fn filter_is_sound_and_complete() {
    let store = MeasurementStore::sample().unwrap();
    for spec in all_specs(&store) {
        let view = apply_filter(&store, &spec).unwrap();
        for m in view.iter() {
            assert!(spec.matches(m), "unsound result for {:?}", spec);
        }
        for original in store.records() {
            let hits = view.iter().filter(|m| std::ptr::eq(*m, original)).count();
            let expected = usize::from(spec.matches(original));
            assert_eq!(hits, expected, "incomplete result for {:?}", spec);
        }
    }
}

#[test]
fn empty_results_are_unavailable_never_zero() {
    let store = MeasurementStore::sample().unwrap();
    for spec in all_specs(&store) {
        let view = apply_filter(&store, &spec).unwrap();
        let summary = summarize(&view);
        if view.is_empty() {
            assert!(summary.is_empty());
            assert_eq!(summary.average_aqi, Metric::Unavailable);
            assert_eq!(summary.average_pm25, Metric::Unavailable);
            assert_eq!(summary.average_pm10, Metric::Unavailable);
            assert_eq!(summary.average_ratio, Metric::Unavailable);
        } else {
            assert!(summary.average_aqi.is_available());
        }
    }
}

fn assert_monotonic(list: &[CityAqi], descending: bool) {
    for pair in list.windows(2) {
        if descending {
            assert!(pair[0].mean_aqi >= pair[1].mean_aqi);
        } else {
            assert!(pair[0].mean_aqi <= pair[1].mean_aqi);
        }
    }
}

#[test]
fn ranking_lengths_and_order() {
    let store = MeasurementStore::sample().unwrap();
    for spec in all_specs(&store) {
        let view = apply_filter(&store, &spec).unwrap();
        let mut distinct: Vec<&str> = view.iter().map(|m| m.city.as_str()).collect();
        distinct.sort();
        distinct.dedup();
        let ranking = rank_cities(&view, DEFAULT_RANK_SIZE);
        let expected = distinct.len().min(DEFAULT_RANK_SIZE);
        assert_eq!(ranking.top_cities.len(), expected);
        assert_eq!(ranking.least_cities.len(), expected);
        assert_monotonic(&ranking.top_cities, true);
        assert_monotonic(&ranking.least_cities, false);
    }
}

#[test]
fn trend_order_is_chronological() {
    let store = MeasurementStore::sample().unwrap();
    for spec in all_specs(&store) {
        let view = apply_filter(&store, &spec).unwrap();
        let ordered = order_for_trend(&view);
        assert_eq!(ordered.len(), view.len());
        for pair in ordered.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }
}

#[test]
fn single_day_two_city_scenario() {
    let store = MeasurementStore::from_csv_str(
        "\
Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity
01-01-2023,A,40,Good,10,20,0.5,20,50
02-01-2023,B,120,Unhealthy,60,90,0.67,25,40
",
    )
    .unwrap();
    let spec = FilterSpec::all().with_date_range(DateRange(day(1), day(1)));
    let view = apply_filter(&store, &spec).unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view.records()[0], &store.records()[0]);

    assert_eq!(summarize(&view).average_aqi, Metric::Available(40.0));

    let ranking = rank_cities(&view, DEFAULT_RANK_SIZE);
    let only_a = vec![CityAqi {
        city: "A".to_string(),
        mean_aqi: 40.0,
    }];
    assert_eq!(ranking.top_cities, only_a);
    assert_eq!(ranking.least_cities, only_a);
}

#[test]
fn concurrent_evaluations_share_one_store() {
    let store = std::sync::Arc::new(MeasurementStore::sample().unwrap());
    let handles: Vec<_> = store
        .cities()
        .to_vec()
        .into_iter()
        .map(|city| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                let spec = FilterSpec::all().with_city(city.as_str());
                apply_filter(&store, &spec).unwrap().len()
            })
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, store.len());
}
