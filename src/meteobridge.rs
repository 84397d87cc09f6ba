//! This module provides the main entry point for the Open-Meteo to
//! OpenWeather bridge. It allows fetching weather and air-quality forecasts
//! by geographical coordinates and a target instant, returning them in the
//! OpenWeather response shape.

use crate::clients::air_quality_client::AirQualityClient;
use crate::clients::forecast_client::ForecastClient;
use crate::types::openweather::icon::DEFAULT_ICON_BASE_URL;
use crate::upstream::fetcher::UpstreamFetcher;
use bon::bon;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use meteobridge::LatLon;
///
/// let denpasar = LatLon(-8.6500, 115.2167);
/// assert_eq!(denpasar.0, -8.6500); // Latitude
/// assert_eq!(denpasar.1, 115.2167); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client struct for translating Open-Meteo forecasts into the
/// OpenWeather response shape.
///
/// This struct owns the upstream HTTP client and the icon CDN configuration.
/// Requests are issued through the sub-clients returned by
/// [`MeteoBridge::forecast()`] and [`MeteoBridge::air_quality()`]; each call
/// fetches a fresh batch of samples, selects the one nearest to the
/// requested instant, and re-shapes it. No state is kept between calls.
///
/// Create an instance with `MeteoBridge::builder()`, optionally supplying a
/// commercial Open-Meteo API key and an alternative icon base URL.
///
/// # Examples
///
/// ```rust
/// use meteobridge::MeteoBridge;
///
/// // Default configuration: free API tier, stock icon CDN.
/// let bridge = MeteoBridge::builder().build();
///
/// // With a commercial API key.
/// let commercial = MeteoBridge::builder()
///     .api_key("my-key".to_string())
///     .build();
/// ```
pub struct MeteoBridge {
    fetcher: UpstreamFetcher,
    icon_base_url: String,
}

#[bon]
impl MeteoBridge {
    /// Creates a new `MeteoBridge`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.api_key(String)`: Optional. Commercial Open-Meteo API key,
    ///   appended to every upstream request. Omit for the free tier.
    /// * `.icon_base_url(String)`: Optional. Base URL the condition icon
    ///   codes are appended to. Defaults to
    ///   [`DEFAULT_ICON_BASE_URL`](crate::DEFAULT_ICON_BASE_URL).
    #[builder]
    pub fn new(api_key: Option<String>, icon_base_url: Option<String>) -> Self {
        Self {
            fetcher: UpstreamFetcher::new(api_key),
            icon_base_url: icon_base_url.unwrap_or_else(|| DEFAULT_ICON_BASE_URL.to_string()),
        }
    }

    /// Returns a client for OpenWeather-shaped weather forecasts.
    ///
    /// See [`ForecastClient`] for the builder methods it exposes.
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }

    /// Returns a client for OpenWeather-shaped air-quality data.
    ///
    /// See [`AirQualityClient`] for the builder methods it exposes.
    pub fn air_quality(&self) -> AirQualityClient<'_> {
        AirQualityClient::new(self)
    }

    pub(crate) fn fetcher(&self) -> &UpstreamFetcher {
        &self.fetcher
    }

    pub(crate) fn icon_base_url(&self) -> &str {
        &self.icon_base_url
    }
}

impl Default for MeteoBridge {
    fn default() -> Self {
        MeteoBridge::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_uses_the_stock_icon_cdn() {
        let bridge = MeteoBridge::default();
        assert_eq!(bridge.icon_base_url(), DEFAULT_ICON_BASE_URL);
    }

    #[test]
    fn icon_base_url_can_be_overridden() {
        let bridge = MeteoBridge::builder()
            .icon_base_url("https://icons.example.com/".to_string())
            .build();
        assert_eq!(bridge.icon_base_url(), "https://icons.example.com/");
    }
}
