//! Serde models for the Open-Meteo response payloads and their conversion
//! into timestamped sample series.
//!
//! Open-Meteo returns each resolution as a block of parallel arrays keyed by
//! variable name, with `null` for missing values. The `samples()` methods
//! zip those arrays into one record per instant so the rest of the crate can
//! work with ordinary sample series.

use crate::selection::TimestampedSample;
use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;

/// Response of the Open-Meteo forecast endpoint (unix `timeformat`).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub hourly: Option<HourlyBlock>,
    #[serde(default)]
    pub minutely_15: Option<QuarterHourlyBlock>,
    #[serde(default)]
    pub daily: Option<DailyBlock>,
}

/// Response of the Open-Meteo air-quality endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub hourly: Option<AirQualityBlock>,
}

/// Parallel-array block of hourly forecast values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<i64>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub rain: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_direction_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_gusts_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub surface_pressure: Vec<Option<f64>>,
    #[serde(default)]
    pub pressure_msl: Vec<Option<f64>>,
    #[serde(default)]
    pub is_day: Vec<Option<f64>>,
}

/// Parallel-array block of quarter-hourly (`minutely_15`) forecast values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuarterHourlyBlock {
    pub time: Vec<i64>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub apparent_temperature: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub rain: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_direction_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_gusts_10m: Vec<Option<f64>>,
}

/// Parallel-array block of daily forecast values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<i64>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<f64>>,
}

/// Parallel-array block of hourly air-quality values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirQualityBlock {
    pub time: Vec<i64>,
    #[serde(default)]
    pub pm10: Vec<Option<f64>>,
    #[serde(default)]
    pub pm2_5: Vec<Option<f64>>,
    #[serde(default)]
    pub carbon_monoxide: Vec<Option<f64>>,
    #[serde(default)]
    pub nitrogen_dioxide: Vec<Option<f64>>,
    #[serde(default)]
    pub sulphur_dioxide: Vec<Option<f64>>,
    #[serde(default)]
    pub ozone: Vec<Option<f64>>,
    #[serde(default)]
    pub uv_index: Vec<Option<f64>>,
    #[serde(default)]
    pub us_aqi: Vec<Option<f64>>,
}

/// One hour of forecast values; `None` where the upstream reported null.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourlyWeather {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub rain: Option<f64>,
    pub weather_code: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub wind_gusts_10m: Option<f64>,
    pub surface_pressure: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub is_day: Option<f64>,
}

/// One quarter hour of forecast values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuarterHourlyWeather {
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub rain: Option<f64>,
    pub weather_code: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub wind_gusts_10m: Option<f64>,
}

/// One day of forecast values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyWeather {
    pub temperature_2m_max: Option<f64>,
    pub temperature_2m_min: Option<f64>,
    pub weather_code: Option<f64>,
}

/// One hour of air-quality values, concentrations in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourlyAirQuality {
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub sulphur_dioxide: Option<f64>,
    pub ozone: Option<f64>,
    pub uv_index: Option<f64>,
    pub us_aqi: Option<f64>,
}

fn slot(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

fn to_datetime(unix_seconds: i64) -> Option<DateTime<Utc>> {
    let datetime = DateTime::from_timestamp(unix_seconds, 0);
    if datetime.is_none() {
        warn!("Skipping sample with out-of-range timestamp {}", unix_seconds);
    }
    datetime
}

impl HourlyBlock {
    /// Zips the parallel arrays into per-hour samples. Entries whose
    /// timestamp cannot be represented are skipped.
    pub fn samples(&self) -> Vec<TimestampedSample<HourlyWeather>> {
        self.time
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| {
                let timestamp = to_datetime(t)?;
                Some(TimestampedSample::new(
                    timestamp,
                    HourlyWeather {
                        temperature_2m: slot(&self.temperature_2m, i),
                        relative_humidity_2m: slot(&self.relative_humidity_2m, i),
                        precipitation: slot(&self.precipitation, i),
                        rain: slot(&self.rain, i),
                        weather_code: slot(&self.weather_code, i),
                        wind_speed_10m: slot(&self.wind_speed_10m, i),
                        wind_direction_10m: slot(&self.wind_direction_10m, i),
                        wind_gusts_10m: slot(&self.wind_gusts_10m, i),
                        surface_pressure: slot(&self.surface_pressure, i),
                        pressure_msl: slot(&self.pressure_msl, i),
                        is_day: slot(&self.is_day, i),
                    },
                ))
            })
            .collect()
    }
}

impl QuarterHourlyBlock {
    /// Zips the parallel arrays into per-quarter-hour samples.
    pub fn samples(&self) -> Vec<TimestampedSample<QuarterHourlyWeather>> {
        self.time
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| {
                let timestamp = to_datetime(t)?;
                Some(TimestampedSample::new(
                    timestamp,
                    QuarterHourlyWeather {
                        temperature_2m: slot(&self.temperature_2m, i),
                        apparent_temperature: slot(&self.apparent_temperature, i),
                        relative_humidity_2m: slot(&self.relative_humidity_2m, i),
                        precipitation: slot(&self.precipitation, i),
                        rain: slot(&self.rain, i),
                        weather_code: slot(&self.weather_code, i),
                        wind_speed_10m: slot(&self.wind_speed_10m, i),
                        wind_direction_10m: slot(&self.wind_direction_10m, i),
                        wind_gusts_10m: slot(&self.wind_gusts_10m, i),
                    },
                ))
            })
            .collect()
    }
}

impl DailyBlock {
    /// Zips the parallel arrays into per-day samples.
    pub fn samples(&self) -> Vec<TimestampedSample<DailyWeather>> {
        self.time
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| {
                let timestamp = to_datetime(t)?;
                Some(TimestampedSample::new(
                    timestamp,
                    DailyWeather {
                        temperature_2m_max: slot(&self.temperature_2m_max, i),
                        temperature_2m_min: slot(&self.temperature_2m_min, i),
                        weather_code: slot(&self.weather_code, i),
                    },
                ))
            })
            .collect()
    }
}

impl AirQualityBlock {
    /// Zips the parallel arrays into per-hour samples.
    pub fn samples(&self) -> Vec<TimestampedSample<HourlyAirQuality>> {
        self.time
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| {
                let timestamp = to_datetime(t)?;
                Some(TimestampedSample::new(
                    timestamp,
                    HourlyAirQuality {
                        pm10: slot(&self.pm10, i),
                        pm2_5: slot(&self.pm2_5, i),
                        carbon_monoxide: slot(&self.carbon_monoxide, i),
                        nitrogen_dioxide: slot(&self.nitrogen_dioxide, i),
                        sulphur_dioxide: slot(&self.sulphur_dioxide, i),
                        ozone: slot(&self.ozone, i),
                        uv_index: slot(&self.uv_index, i),
                        us_aqi: slot(&self.us_aqi, i),
                    },
                ))
            })
            .collect()
    }
}
