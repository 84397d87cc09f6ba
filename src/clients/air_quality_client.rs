//! Provides the `AirQualityClient` for requesting OpenWeather-shaped
//! air-quality entries.
//!
//! This client acts as an intermediate builder, obtained via
//! [`MeteoBridge::air_quality()`]. Air-quality series are hourly across
//! several days, so the nearest match is unconstrained — no same-day
//! restriction applies.

use crate::error::MeteoBridgeError;
use crate::meteobridge::{LatLon, MeteoBridge};
use crate::selection::nearest_sample;
use crate::types::openweather::air_quality::AirQuality;
use crate::upstream::params::AirQualityParams;
use bon::bon;
use chrono::{DateTime, Utc};
use log::debug;

/// A client builder specifically for OpenWeather-shaped air-quality data.
///
/// Instances are created by calling [`MeteoBridge::air_quality()`]. Calling
/// `.coordinates(...).at(...).call()` fetches the Open-Meteo air-quality
/// forecast, selects the hourly sample nearest to the requested instant, and
/// converts it into an [`AirQuality`] entry. When the upstream does not
/// report a US AQI for that hour the index is computed from the pollutant
/// concentrations.
pub struct AirQualityClient<'a> {
    bridge: &'a MeteoBridge,
}

#[bon]
impl<'a> AirQualityClient<'a> {
    pub(crate) fn new(bridge: &'a MeteoBridge) -> Self {
        Self { bridge }
    }

    /// Initiates a builder to fetch the air-quality entry nearest to an
    /// instant at a location.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] of the point of interest, passed to
    ///   the initial `.coordinates()` call.
    ///
    /// # Required Builder Methods
    ///
    /// * `.at(DateTime<Utc>)`: The instant the returned entry should be
    ///   closest to. Air-quality matching crosses day boundaries.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.forecast_days(u8)`: How many days of forecast to request from the
    ///   upstream. Defaults to 5.
    ///
    /// # Returns
    ///
    /// After calling `.call().await`, returns a `Result` containing the
    /// [`AirQuality`] entry on success.
    ///
    /// # Errors
    ///
    /// * [`MeteoBridgeError::Upstream`]: the Open-Meteo request failed or
    ///   its response could not be decoded.
    /// * [`MeteoBridgeError::NoMatchingSample`]: the response contained no
    ///   samples at all.
    /// * [`MeteoBridgeError::Aqi`]: the upstream reported an invalid
    ///   pollutant concentration and the index could not be derived.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use meteobridge::{LatLon, MeteoBridge, MeteoBridgeError};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteoBridgeError> {
    /// let bridge = MeteoBridge::builder().build();
    ///
    /// let air_quality = bridge
    ///     .air_quality()
    ///     .coordinates(LatLon(-8.6816, 115.1972))
    ///     .at(Utc::now())
    ///     .call()
    ///     .await?;
    ///
    /// println!("US AQI: {}", air_quality.main.aqi);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = coordinates)]
    #[doc(hidden)]
    pub async fn build_coordinates(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        at: DateTime<Utc>,
        forecast_days: Option<u8>,
    ) -> Result<AirQuality, MeteoBridgeError> {
        let params = AirQualityParams::for_translation(coordinate, forecast_days);
        let response = self.bridge.fetcher().air_quality(&params).await?;

        let samples = response
            .hourly
            .as_ref()
            .map(|block| block.samples())
            .unwrap_or_default();

        debug!(
            "Matching air-quality series ({} samples) against {}",
            samples.len(),
            at
        );

        let nearest = nearest_sample(&samples, at)
            .ok_or(MeteoBridgeError::NoMatchingSample { target: at })?;
        let reading = &nearest.value;

        let air_quality = AirQuality::builder()
            .dt(nearest.timestamp.timestamp())
            .maybe_co(reading.carbon_monoxide)
            .maybe_no2(reading.nitrogen_dioxide)
            .maybe_o3(reading.ozone)
            .maybe_so2(reading.sulphur_dioxide)
            .maybe_pm2_5(reading.pm2_5)
            .maybe_pm10(reading.pm10)
            .maybe_us_aqi(reading.us_aqi)
            .build()?;
        Ok(air_quality)
    }
}
