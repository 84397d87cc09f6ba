//! Request parameter builders for the Open-Meteo forecast and air-quality
//! endpoints.
//!
//! Variables are typed enums rather than free-form strings, so a request can
//! only ask for things the translation layer knows how to consume. All
//! requests are issued with `timeformat=unixtime`.

use crate::meteobridge::LatLon;
use bon::bon;
use std::fmt;

/// Hourly forecast variables understood by the Open-Meteo forecast API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyVariable {
    Temperature2m,
    RelativeHumidity2m,
    Precipitation,
    Rain,
    WeatherCode,
    WindSpeed10m,
    WindDirection10m,
    WindGusts10m,
    SurfacePressure,
    PressureMsl,
    IsDay,
}

impl HourlyVariable {
    pub(crate) fn api_name(&self) -> &'static str {
        match self {
            HourlyVariable::Temperature2m => "temperature_2m",
            HourlyVariable::RelativeHumidity2m => "relative_humidity_2m",
            HourlyVariable::Precipitation => "precipitation",
            HourlyVariable::Rain => "rain",
            HourlyVariable::WeatherCode => "weather_code",
            HourlyVariable::WindSpeed10m => "wind_speed_10m",
            HourlyVariable::WindDirection10m => "wind_direction_10m",
            HourlyVariable::WindGusts10m => "wind_gusts_10m",
            HourlyVariable::SurfacePressure => "surface_pressure",
            HourlyVariable::PressureMsl => "pressure_msl",
            HourlyVariable::IsDay => "is_day",
        }
    }
}

impl fmt::Display for HourlyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Quarter-hourly (`minutely_15`) forecast variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarterHourlyVariable {
    Temperature2m,
    ApparentTemperature,
    RelativeHumidity2m,
    Precipitation,
    Rain,
    WeatherCode,
    WindSpeed10m,
    WindDirection10m,
    WindGusts10m,
}

impl QuarterHourlyVariable {
    pub(crate) fn api_name(&self) -> &'static str {
        match self {
            QuarterHourlyVariable::Temperature2m => "temperature_2m",
            QuarterHourlyVariable::ApparentTemperature => "apparent_temperature",
            QuarterHourlyVariable::RelativeHumidity2m => "relative_humidity_2m",
            QuarterHourlyVariable::Precipitation => "precipitation",
            QuarterHourlyVariable::Rain => "rain",
            QuarterHourlyVariable::WeatherCode => "weather_code",
            QuarterHourlyVariable::WindSpeed10m => "wind_speed_10m",
            QuarterHourlyVariable::WindDirection10m => "wind_direction_10m",
            QuarterHourlyVariable::WindGusts10m => "wind_gusts_10m",
        }
    }
}

impl fmt::Display for QuarterHourlyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Daily forecast variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyVariable {
    Temperature2mMax,
    Temperature2mMin,
    WeatherCode,
}

impl DailyVariable {
    pub(crate) fn api_name(&self) -> &'static str {
        match self {
            DailyVariable::Temperature2mMax => "temperature_2m_max",
            DailyVariable::Temperature2mMin => "temperature_2m_min",
            DailyVariable::WeatherCode => "weather_code",
        }
    }
}

impl fmt::Display for DailyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Hourly variables of the Open-Meteo air-quality API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQualityVariable {
    Pm10,
    Pm2_5,
    CarbonMonoxide,
    NitrogenDioxide,
    SulphurDioxide,
    Ozone,
    UvIndex,
    UsAqi,
}

impl AirQualityVariable {
    pub(crate) fn api_name(&self) -> &'static str {
        match self {
            AirQualityVariable::Pm10 => "pm10",
            AirQualityVariable::Pm2_5 => "pm2_5",
            AirQualityVariable::CarbonMonoxide => "carbon_monoxide",
            AirQualityVariable::NitrogenDioxide => "nitrogen_dioxide",
            AirQualityVariable::SulphurDioxide => "sulphur_dioxide",
            AirQualityVariable::Ozone => "ozone",
            AirQualityVariable::UvIndex => "uv_index",
            AirQualityVariable::UsAqi => "us_aqi",
        }
    }
}

impl fmt::Display for AirQualityVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Forecast horizon requested when the caller does not specify one.
const DEFAULT_FORECAST_DAYS: u8 = 12;
/// Air-quality horizon requested when the caller does not specify one.
const DEFAULT_AIR_QUALITY_DAYS: u8 = 5;

fn join_variables<T: fmt::Display>(variables: &[T]) -> String {
    variables
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Query parameters for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastParams {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    pub hourly: Vec<HourlyVariable>,
    pub minutely_15: Vec<QuarterHourlyVariable>,
    pub daily: Vec<DailyVariable>,
}

#[bon]
impl ForecastParams {
    /// Assembles forecast request parameters.
    ///
    /// `forecast_days` defaults to 12; variable lists default to empty,
    /// meaning the corresponding block is not requested.
    #[builder]
    pub fn new(
        latitude: f64,
        longitude: f64,
        forecast_days: Option<u8>,
        hourly: Option<Vec<HourlyVariable>>,
        minutely_15: Option<Vec<QuarterHourlyVariable>>,
        daily: Option<Vec<DailyVariable>>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            forecast_days: forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS),
            hourly: hourly.unwrap_or_default(),
            minutely_15: minutely_15.unwrap_or_default(),
            daily: daily.unwrap_or_default(),
        }
    }

    /// The full variable set the OpenWeather translation consumes: hourly
    /// conditions, quarter-hourly short-term detail, and daily temperature
    /// extremes.
    pub fn for_translation(coordinate: LatLon, forecast_days: Option<u8>) -> Self {
        Self::builder()
            .latitude(coordinate.0)
            .longitude(coordinate.1)
            .maybe_forecast_days(forecast_days)
            .hourly(vec![
                HourlyVariable::Temperature2m,
                HourlyVariable::RelativeHumidity2m,
                HourlyVariable::Precipitation,
                HourlyVariable::Rain,
                HourlyVariable::WeatherCode,
                HourlyVariable::WindSpeed10m,
                HourlyVariable::WindDirection10m,
                HourlyVariable::WindGusts10m,
                HourlyVariable::SurfacePressure,
                HourlyVariable::PressureMsl,
                HourlyVariable::IsDay,
            ])
            .minutely_15(vec![
                QuarterHourlyVariable::Temperature2m,
                QuarterHourlyVariable::ApparentTemperature,
                QuarterHourlyVariable::RelativeHumidity2m,
                QuarterHourlyVariable::Precipitation,
                QuarterHourlyVariable::Rain,
                QuarterHourlyVariable::WeatherCode,
                QuarterHourlyVariable::WindSpeed10m,
                QuarterHourlyVariable::WindDirection10m,
                QuarterHourlyVariable::WindGusts10m,
            ])
            .daily(vec![
                DailyVariable::Temperature2mMax,
                DailyVariable::Temperature2mMin,
                DailyVariable::WeatherCode,
            ])
            .build()
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("forecast_days", self.forecast_days.to_string()),
            ("timeformat", "unixtime".to_string()),
        ];
        if !self.hourly.is_empty() {
            pairs.push(("hourly", join_variables(&self.hourly)));
        }
        if !self.minutely_15.is_empty() {
            pairs.push(("minutely_15", join_variables(&self.minutely_15)));
        }
        if !self.daily.is_empty() {
            pairs.push(("daily", join_variables(&self.daily)));
        }
        pairs
    }
}

/// Query parameters for the Open-Meteo air-quality endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityParams {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    pub hourly: Vec<AirQualityVariable>,
}

#[bon]
impl AirQualityParams {
    /// Assembles air-quality request parameters. `forecast_days` defaults
    /// to 5.
    #[builder]
    pub fn new(
        latitude: f64,
        longitude: f64,
        forecast_days: Option<u8>,
        hourly: Option<Vec<AirQualityVariable>>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            forecast_days: forecast_days.unwrap_or(DEFAULT_AIR_QUALITY_DAYS),
            hourly: hourly.unwrap_or_default(),
        }
    }

    /// The pollutant set the OpenWeather translation consumes.
    pub fn for_translation(coordinate: LatLon, forecast_days: Option<u8>) -> Self {
        Self::builder()
            .latitude(coordinate.0)
            .longitude(coordinate.1)
            .maybe_forecast_days(forecast_days)
            .hourly(vec![
                AirQualityVariable::Pm10,
                AirQualityVariable::Pm2_5,
                AirQualityVariable::CarbonMonoxide,
                AirQualityVariable::NitrogenDioxide,
                AirQualityVariable::SulphurDioxide,
                AirQualityVariable::Ozone,
                AirQualityVariable::UvIndex,
                AirQualityVariable::UsAqi,
            ])
            .build()
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("forecast_days", self.forecast_days.to_string()),
            ("timeformat", "unixtime".to_string()),
        ];
        if !self.hourly.is_empty() {
            pairs.push(("hourly", join_variables(&self.hourly)));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_query_includes_requested_blocks_only() {
        let params = ForecastParams::builder()
            .latitude(52.52)
            .longitude(13.4)
            .hourly(vec![HourlyVariable::Temperature2m, HourlyVariable::Rain])
            .build();

        let pairs = params.query_pairs();
        assert!(pairs.contains(&("latitude", "52.52".to_string())));
        assert!(pairs.contains(&("forecast_days", "12".to_string())));
        assert!(pairs.contains(&("timeformat", "unixtime".to_string())));
        assert!(pairs.contains(&("hourly", "temperature_2m,rain".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "minutely_15"));
        assert!(!pairs.iter().any(|(key, _)| *key == "daily"));
    }

    #[test]
    fn translation_params_request_all_three_resolutions() {
        let params = ForecastParams::for_translation(LatLon(-8.68, 115.19), None);

        assert_eq!(params.forecast_days, 12);
        let pairs = params.query_pairs();
        let hourly = pairs.iter().find(|(key, _)| *key == "hourly").unwrap();
        assert!(hourly.1.contains("weather_code"));
        assert!(hourly.1.contains("pressure_msl"));
        assert!(hourly.1.contains("is_day"));
        let quarter = pairs.iter().find(|(key, _)| *key == "minutely_15").unwrap();
        assert!(quarter.1.contains("apparent_temperature"));
        let daily = pairs.iter().find(|(key, _)| *key == "daily").unwrap();
        assert_eq!(
            daily.1,
            "temperature_2m_max,temperature_2m_min,weather_code"
        );
    }

    #[test]
    fn air_quality_params_default_to_five_days() {
        let params = AirQualityParams::for_translation(LatLon(-8.68, 115.19), None);

        assert_eq!(params.forecast_days, 5);
        let pairs = params.query_pairs();
        let hourly = pairs.iter().find(|(key, _)| *key == "hourly").unwrap();
        assert_eq!(
            hourly.1,
            "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone,uv_index,us_aqi"
        );
    }

    #[test]
    fn forecast_days_can_be_overridden() {
        let params = AirQualityParams::for_translation(LatLon(0.0, 0.0), Some(3));
        assert_eq!(params.forecast_days, 3);
    }
}
