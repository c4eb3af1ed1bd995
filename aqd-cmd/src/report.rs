//! Dashboard views printed to stdout.

use crate::load::{filter_spec, load_store};
use crate::FilterArgs;
use aqd_core::MeasurementStore;
use aqd_engine::distribution::{aqi_histogram, category_distribution};
use aqd_engine::models::{CategoryShare, CityAqi, HistogramBin};
use aqd_engine::{
    apply_filter, rank_cities, summarize, trend_series, CityRanking, Dashboard, FilteredView,
    Summary, ALL,
};
use aqd_utils::dates::format_date;
use serde_json::json;
use std::fmt::Write;

/// Placeholder shown instead of metrics when the filters match nothing.
pub const NO_DATA: &str = "no data for current filters";

async fn filtered<F>(args: &FilterArgs, render: F) -> anyhow::Result<()>
where
    F: FnOnce(&MeasurementStore, &FilteredView<'_>) -> anyhow::Result<String>,
{
    let store = load_store(&args.data).await?;
    let spec = filter_spec(args)?;
    let view = apply_filter(&store, &spec)?;
    println!("{}", render(&store, &view)?);
    Ok(())
}

pub fn format_summary(summary: &Summary) -> String {
    if summary.is_empty() {
        return NO_DATA.to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Records:          {}", summary.count);
    let _ = writeln!(out, "Average AQI:      {}", summary.average_aqi);
    let _ = writeln!(out, "Average PM2.5:    {}", summary.average_pm25);
    let _ = writeln!(out, "Average PM10:     {}", summary.average_pm10);
    let _ = write!(out, "PM2.5/PM10 Ratio: {}", summary.average_ratio);
    out
}

fn format_city_list(title: &str, cities: &[CityAqi]) -> String {
    let mut out = format!("{}:", title);
    for (i, c) in cities.iter().enumerate() {
        let _ = write!(out, "\n  {}. {:<20} {:>8.2}", i + 1, c.city, c.mean_aqi);
    }
    out
}

pub fn format_ranking(ranking: &CityRanking) -> String {
    if ranking.top_cities.is_empty() {
        return NO_DATA.to_string();
    }
    format!(
        "{}\n{}",
        format_city_list("Top polluted cities", &ranking.top_cities),
        format_city_list("Least polluted cities", &ranking.least_cities)
    )
}

pub fn format_distribution(shares: &[CategoryShare], bins: &[HistogramBin]) -> String {
    if shares.is_empty() {
        return NO_DATA.to_string();
    }
    let mut out = String::from("AQI categories:");
    for s in shares {
        let _ = write!(out, "\n  {:<28} {:>5} {:>6.1}%", s.category, s.count, s.share * 100.0);
    }
    out.push_str("\nAQI histogram:");
    for b in bins {
        let _ = write!(out, "\n  {:>8.1} - {:>8.1} {:>5}", b.lower, b.upper, b.count);
    }
    out
}

pub async fn run_summary(args: &FilterArgs) -> anyhow::Result<()> {
    filtered(args, |_, view| {
        let summary = summarize(view);
        if args.json {
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            Ok(format_summary(&summary))
        }
    })
    .await
}

pub async fn run_rank(args: &FilterArgs, count: usize) -> anyhow::Result<()> {
    filtered(args, |_, view| {
        let ranking = rank_cities(view, count);
        if args.json {
            Ok(serde_json::to_string_pretty(&ranking)?)
        } else {
            Ok(format_ranking(&ranking))
        }
    })
    .await
}

pub async fn run_trend(args: &FilterArgs) -> anyhow::Result<()> {
    filtered(args, |_, view| {
        let series = trend_series(view);
        if args.json {
            return Ok(serde_json::to_string_pretty(&series)?);
        }
        if series.is_empty() {
            return Ok(NO_DATA.to_string());
        }
        let lines: Vec<String> = series
            .iter()
            .map(|p| format!("{}  {:<20} {:>8.1}", format_date(&p.date), p.city, p.aqi))
            .collect();
        Ok(lines.join("\n"))
    })
    .await
}

pub async fn run_distribution(args: &FilterArgs, bins: usize) -> anyhow::Result<()> {
    filtered(args, |_, view| {
        let shares = category_distribution(view);
        let histogram = aqi_histogram(view, bins);
        if args.json {
            Ok(serde_json::to_string_pretty(&json!({
                "categories": shares,
                "histogram": histogram,
            }))?)
        } else {
            Ok(format_distribution(&shares, &histogram))
        }
    })
    .await
}

pub async fn run_dashboard(args: &FilterArgs) -> anyhow::Result<()> {
    let store = load_store(&args.data).await?;
    let spec = filter_spec(args)?;
    let dashboard = Dashboard::build(&store, &spec)?;
    println!("{}", dashboard.to_json()?);
    Ok(())
}

/// Selector contents for a front end: "All" followed by the store's values.
pub fn selector_options(store: &MeasurementStore) -> serde_json::Value {
    let with_all = |values: &[String]| {
        std::iter::once(ALL.to_string())
            .chain(values.iter().cloned())
            .collect::<Vec<_>>()
    };
    let bounds = store
        .date_bounds()
        .map(|(lo, hi)| json!({ "start": format_date(&lo), "end": format_date(&hi) }));
    json!({
        "cities": with_all(store.cities()),
        "categories": with_all(store.categories()),
        "dateBounds": bounds,
        "undatedRecords": store.undated_count(),
    })
}

pub async fn run_options(args: &FilterArgs) -> anyhow::Result<()> {
    let store = load_store(&args.data).await?;
    let options = selector_options(&store);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }
    println!("Cities:     {}", store.cities().join(", "));
    println!("Categories: {}", store.categories().join(", "));
    match store.date_bounds() {
        Some((lo, hi)) => println!("Dates:      {} to {}", format_date(&lo), format_date(&hi)),
        None => println!("Dates:      none"),
    }
    Ok(())
}
