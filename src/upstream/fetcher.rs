use crate::upstream::error::UpstreamError;
use crate::upstream::params::{AirQualityParams, ForecastParams};
use crate::upstream::response::{AirQualityResponse, ForecastResponse};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Issues requests against the Open-Meteo endpoints and decodes the typed
/// responses. Holds the shared HTTP client and the optional commercial API
/// key.
pub struct UpstreamFetcher {
    client: Client,
    api_key: Option<String>,
}

impl UpstreamFetcher {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub async fn forecast(
        &self,
        params: &ForecastParams,
    ) -> Result<ForecastResponse, UpstreamError> {
        self.get_json(FORECAST_URL, params.query_pairs()).await
    }

    pub async fn air_quality(
        &self,
        params: &AirQualityParams,
    ) -> Result<AirQualityResponse, UpstreamError> {
        self.get_json(AIR_QUALITY_URL, params.query_pairs()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<T, UpstreamError> {
        if let Some(key) = &self.api_key {
            query.push(("apikey", key.clone()));
        }
        debug!("Requesting {} with {} query parameters", url, query.len());

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| UpstreamError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    UpstreamError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    UpstreamError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(url.to_string(), e))
    }
}
