//! Core types and dataset loading for per-city air quality measurements.

pub mod date_range;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod measurement;
pub mod store;

pub use date_range::DateRange;
pub use error::LoadError;
pub use measurement::Measurement;
pub use store::MeasurementStore;
