//! Provides the `ForecastClient` for requesting OpenWeather-shaped weather
//! forecasts.
//!
//! This client acts as an intermediate builder, obtained via
//! [`MeteoBridge::forecast()`], allowing the user to specify the coordinates
//! and target instant before executing the upstream request and translation.

use crate::error::MeteoBridgeError;
use crate::meteobridge::{LatLon, MeteoBridge};
use crate::selection::nearest_sample_same_day;
use crate::types::openweather::forecast::Forecast;
use crate::upstream::params::ForecastParams;
use bon::bon;
use chrono::{DateTime, Utc};
use log::debug;

/// A client builder specifically for OpenWeather-shaped weather forecasts.
///
/// Instances are created by calling [`MeteoBridge::forecast()`]. Calling
/// `.coordinates(...).at(...).call()` fetches the Open-Meteo forecast for
/// the location, selects the samples nearest to the requested instant
/// (restricted to its calendar day), and merges them into a single
/// [`Forecast`] entry.
pub struct ForecastClient<'a> {
    bridge: &'a MeteoBridge,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(bridge: &'a MeteoBridge) -> Self {
        Self { bridge }
    }

    /// Initiates a builder to fetch the forecast entry nearest to an instant
    /// at a location.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] of the point of interest, passed to
    ///   the initial `.coordinates()` call.
    ///
    /// # Required Builder Methods
    ///
    /// * `.at(DateTime<Utc>)`: The instant the returned entry should be
    ///   closest to. Matching is restricted to samples on the same UTC
    ///   calendar day — a target late in the evening never resolves to the
    ///   next morning.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.forecast_days(u8)`: How many days of forecast to request from the
    ///   upstream. Defaults to 12.
    ///
    /// # Returns
    ///
    /// After calling `.call().await`, returns a `Result` containing the
    /// composed [`Forecast`] on success.
    ///
    /// # Errors
    ///
    /// * [`MeteoBridgeError::Upstream`]: the Open-Meteo request failed or
    ///   its response could not be decoded.
    /// * [`MeteoBridgeError::NoMatchingSample`]: the response contained no
    ///   sample on the target's calendar day.
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
    /// let forecast = bridge
    ///     .forecast()
    ///     .coordinates(LatLon(-8.6816, 115.1972))
    ///     .at(Utc::now())
    ///     .call()
    ///     .await?;
    ///
    /// println!("{} — {}", forecast.dt_txt, forecast.weather[0].description);
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
    ) -> Result<Forecast, MeteoBridgeError> {
        let params = ForecastParams::for_translation(coordinate, forecast_days);
        let response = self.bridge.fetcher().forecast(&params).await?;

        let quarter_hourly = response
            .minutely_15
            .as_ref()
            .map(|block| block.samples())
            .unwrap_or_default();
        let hourly = response
            .hourly
            .as_ref()
            .map(|block| block.samples())
            .unwrap_or_default();
        let daily = response
            .daily
            .as_ref()
            .map(|block| block.samples())
            .unwrap_or_default();

        debug!(
            "Matching forecast series ({} quarter-hourly, {} hourly, {} daily samples) against {}",
            quarter_hourly.len(),
            hourly.len(),
            daily.len(),
            at
        );

        Forecast::compose(
            nearest_sample_same_day(&quarter_hourly, at),
            nearest_sample_same_day(&hourly, at),
            nearest_sample_same_day(&daily, at),
            self.bridge.icon_base_url(),
        )
        .ok_or(MeteoBridgeError::NoMatchingSample { target: at })
    }
}
