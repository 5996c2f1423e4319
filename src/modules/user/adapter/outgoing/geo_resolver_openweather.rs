//! Zip → coordinates through OpenWeatherMap "current weather by zip",
//! coordinates → timezone through the offline `TimezoneLookup`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::modules::user::adapter::outgoing::timezone_lookup::TimezoneLookup;
use crate::modules::user::application::domain::entities::{GeoLocation, Zip};
use crate::modules::user::application::ports::outgoing::{GeoResolveError, GeoResolver};

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    coord: Option<Coord>,
    /// Shift in seconds from UTC
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

#[derive(Clone)]
pub struct OpenWeatherGeoResolver {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    timezones: TimezoneLookup,
}

impl OpenWeatherGeoResolver {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timezones: TimezoneLookup,
    ) -> Result<Self, GeoResolveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeoResolveError::Upstream(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timezones,
        })
    }

    async fn fetch(&self, zip: &Zip, country: &str) -> Result<WeatherResponse, GeoResolveError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("zip", format!("{},{}", zip, country)),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| GeoResolveError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderError>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            return Err(GeoResolveError::Upstream(format!(
                "{} ({})",
                message,
                status.as_u16()
            )));
        }

        response
            .json::<WeatherResponse>()
            .await
            .map_err(|e| GeoResolveError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl GeoResolver for OpenWeatherGeoResolver {
    async fn resolve(&self, zip: &Zip, country: &str) -> Result<GeoLocation, GeoResolveError> {
        let body = self.fetch(zip, country).await?;

        let (latitude, longitude) = match body.coord {
            Some(Coord {
                lat: Some(lat),
                lon: Some(lon),
            }) => (lat, lon),
            _ => return Err(GeoResolveError::MissingCoordinates(zip.to_string())),
        };

        let timezone = self.timezones.zone_for(latitude, longitude);
        debug!(
            "Resolved zip {},{} to ({}, {}) in {}",
            zip, country, latitude, longitude, timezone
        );

        Ok(GeoLocation {
            latitude,
            longitude,
            timezone,
            utc_offset_seconds: body.timezone,
        })
    }
}
