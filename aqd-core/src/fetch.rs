//! Download a measurement dataset over HTTP.

use crate::error::{LoadError, Result};
use crate::store::{is_gzip_name, MeasurementStore};
use flate2::read::GzDecoder;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const MAX_TRIES: u32 = 3;
const INITIAL_BACKOFF_MILLIS: u64 = 1000;

/// True when `location` looks like an HTTP(S) URL rather than a file path.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetch a CSV dataset (gzipped when the URL ends in `.gz`) and parse it,
/// retrying transport failures and bad statuses with exponential backoff.
pub async fn fetch_store(client: &Client, url: &str) -> Result<MeasurementStore> {
    let mut sleep_millis = INITIAL_BACKOFF_MILLIS;
    let mut last_error: Option<LoadError> = None;

    for attempt in 1..=MAX_TRIES {
        match client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                let body = response.bytes().await?;
                info!("[AQD] fetch: {} bytes from {}", body.len(), url);
                return if is_gzip_name(url) {
                    MeasurementStore::from_reader(GzDecoder::new(body.as_ref()))
                } else {
                    MeasurementStore::from_reader(body.as_ref())
                };
            }
            Ok(response) => {
                warn!(
                    "Attempt {}/{}: Bad response status for {}: {}",
                    attempt,
                    MAX_TRIES,
                    url,
                    response.status()
                );
                last_error = Some(LoadError::HttpStatus {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }
            Err(e) => {
                warn!("Attempt {}/{}: Request to {} failed: {}", attempt, MAX_TRIES, url, e);
                last_error = Some(LoadError::HttpRequest(e));
            }
        }
        if attempt < MAX_TRIES {
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    Err(last_error.unwrap_or(LoadError::HttpStatus {
        url: url.to_string(),
        status: 0,
    }))
}
