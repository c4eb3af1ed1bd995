//! Filter & aggregation engine for per-city air quality measurements.
//!
//! Given a loaded [`MeasurementStore`](aqd_core::MeasurementStore) and a
//! [`FilterSpec`], the engine produces a [`FilteredView`] and the derived
//! metrics, rankings and chart feeds the dashboard displays. Every operation
//! is a pure function over borrowed data: the store is never mutated, so
//! several specs may be evaluated against one store from different threads.
//!
//! # Usage
//!
//! ```rust
//! use aqd_core::MeasurementStore;
//! use aqd_engine::{apply_filter, rank_cities, summarize, FilterSpec, Metric};
//!
//! let store = MeasurementStore::from_csv_str(
//!     "Date,City,AQI,AQI Category,PM2.5,PM10,PM2.5/PM10 Ratio,Temperature,Humidity\n\
//!      01-01-2023,A,40,Good,10,20,0.5,20,50\n",
//! )
//! .unwrap();
//!
//! let view = apply_filter(&store, &FilterSpec::all().with_city("A")).unwrap();
//! assert_eq!(summarize(&view).average_aqi, Metric::Available(40.0));
//! assert_eq!(rank_cities(&view, 3).top_cities[0].city, "A");
//! ```

pub mod dashboard;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod models;
pub mod ranking;
pub mod summary;
pub mod trend;

pub use dashboard::Dashboard;
pub use error::{EngineError, FilterField};
pub use filter::{apply_filter, FilterSpec, FilteredView, Selection, ALL};
pub use models::{CityAqi, CityRanking, Metric, Summary};
pub use ranking::{rank_cities, DEFAULT_RANK_SIZE};
pub use summary::summarize;
pub use trend::{order_for_trend, trend_series};
