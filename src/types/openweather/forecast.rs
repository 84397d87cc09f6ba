//! OpenWeather-shaped forecast records.
//!
//! These structs serialize to the field layout of the OpenWeather
//! 5 day / 3 hour forecast endpoint, so clients written against that API can
//! consume them unchanged. [`Forecast::compose`] builds one entry out of the
//! nearest quarter-hourly, hourly, and daily samples of an Open-Meteo
//! response.

use crate::selection::{nearest_sample_same_day, TimestampedSample};
use crate::types::openweather::icon::{icon_url, period_of_day};
use crate::types::weather_condition::WeatherCondition;
use crate::upstream::response::{DailyWeather, HourlyWeather, QuarterHourlyWeather};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single forecast entry in the OpenWeather 5 day / 3 hour response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Unix timestamp of the instant this entry is valid for.
    pub dt: i64,
    pub main: Main,
    pub weather: Vec<Weather>,
    pub clouds: Clouds,
    pub visibility: i64,
    /// Probability of precipitation, `0.0..=1.0`.
    pub pop: f64,
    pub wind: Wind,
    pub sys: Sys,
    pub rain: Rain,
    /// `dt` rendered as `YYYY-MM-DD HH:MM:SS` (UTC).
    pub dt_txt: String,
}

/// Temperature, pressure, and humidity block of a forecast entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub sea_level: i64,
    pub grnd_level: i64,
    pub humidity: i64,
    pub temp_kf: f64,
}

/// One weather condition entry: OpenWeather id, group, description, and the
/// resolved icon URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub id: u16,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: i64,
    pub gust: f64,
}

/// Part-of-day marker block: `"d"` for day, `"n"` for night.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sys {
    pub pod: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rain {
    /// Rain volume over the entry's window, in mm.
    #[serde(rename = "3h")]
    pub three_h: f64,
}

impl Weather {
    /// Builds the condition entry for a WMO weather code, resolving the icon
    /// URL at construction. Absent or unknown codes fall back to clear sky.
    pub(crate) fn from_code(code: Option<f64>, is_day: bool, icon_base_url: &str) -> Self {
        let condition = code
            .and_then(|c| WeatherCondition::from_i64(c as i64))
            .unwrap_or(WeatherCondition::ClearSky);
        let id = condition.openweather_id();
        Weather {
            id,
            main: condition.group().to_string(),
            description: condition.description().to_string(),
            icon: icon_url(icon_base_url, id, is_day),
        }
    }
}

impl Forecast {
    /// The UTC instant this entry is valid for, derived from `dt`.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// Merges the nearest quarter-hourly, hourly, and daily samples into one
    /// OpenWeather forecast entry.
    ///
    /// Quarter-hourly values take precedence, hourly values fill the gaps,
    /// and the daily sample supplies the min/max temperatures. Pressure,
    /// rain volume, and the day/night flag only exist at hourly resolution.
    /// Returns `None` when all three samples are absent.
    pub(crate) fn compose(
        quarter_hourly: Option<&TimestampedSample<QuarterHourlyWeather>>,
        hourly: Option<&TimestampedSample<HourlyWeather>>,
        daily: Option<&TimestampedSample<DailyWeather>>,
        icon_base_url: &str,
    ) -> Option<Self> {
        let timestamp = quarter_hourly
            .map(|s| s.timestamp)
            .or(hourly.map(|s| s.timestamp))
            .or(daily.map(|s| s.timestamp))?;

        let quarter = quarter_hourly.map(|s| &s.value);
        let hour = hourly.map(|s| &s.value);
        let day = daily.map(|s| &s.value);

        let temp = quarter
            .and_then(|q| q.temperature_2m)
            .or(hour.and_then(|h| h.temperature_2m));
        let feels_like = quarter.and_then(|q| q.apparent_temperature);
        let humidity = quarter
            .and_then(|q| q.relative_humidity_2m)
            .or(hour.and_then(|h| h.relative_humidity_2m));
        let wind_speed = quarter
            .and_then(|q| q.wind_speed_10m)
            .or(hour.and_then(|h| h.wind_speed_10m));
        let wind_deg = quarter
            .and_then(|q| q.wind_direction_10m)
            .or(hour.and_then(|h| h.wind_direction_10m));
        let wind_gust = quarter
            .and_then(|q| q.wind_gusts_10m)
            .or(hour.and_then(|h| h.wind_gusts_10m));
        let weather_code = quarter
            .and_then(|q| q.weather_code)
            .or(hour.and_then(|h| h.weather_code))
            .or(day.and_then(|d| d.weather_code));
        let pressure = hour.and_then(|h| h.pressure_msl);
        let rain = hour.and_then(|h| h.rain);
        let is_day = hour
            .and_then(|h| h.is_day)
            .map(|v| v != 0.0)
            .unwrap_or(true);

        Some(Forecast {
            dt: timestamp.timestamp(),
            main: Main {
                temp: temp.unwrap_or_default(),
                feels_like: feels_like.unwrap_or_default(),
                temp_min: day.and_then(|d| d.temperature_2m_min).unwrap_or_default(),
                temp_max: day.and_then(|d| d.temperature_2m_max).unwrap_or_default(),
                pressure: pressure.map(|p| p as i64).unwrap_or_default(),
                sea_level: 0,
                grnd_level: 0,
                humidity: humidity.map(|h| h as i64).unwrap_or_default(),
                temp_kf: 0.0,
            },
            weather: vec![Weather::from_code(weather_code, is_day, icon_base_url)],
            clouds: Clouds::default(),
            visibility: 0,
            pop: 0.0,
            wind: Wind {
                speed: wind_speed.unwrap_or_default(),
                deg: wind_deg.map(|d| d as i64).unwrap_or_default(),
                gust: wind_gust.unwrap_or_default(),
            },
            sys: Sys {
                pod: period_of_day(is_day).to_string(),
            },
            rain: Rain {
                three_h: rain.unwrap_or_default(),
            },
            dt_txt: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}

/// The OpenWeather 5 day / 3 hour forecast list wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastList {
    pub cod: String,
    pub message: i64,
    pub cnt: i64,
    pub list: Vec<Forecast>,
}

impl ForecastList {
    /// Returns the entry closest to `target` among those on the same UTC
    /// calendar day, or `None` when the list has no entry for that day.
    ///
    /// Entries with an unrepresentable `dt` are skipped.
    pub fn nearest_to(&self, target: DateTime<Utc>) -> Option<&Forecast> {
        let samples: Vec<TimestampedSample<&Forecast>> = self
            .list
            .iter()
            .filter_map(|entry| entry.date().map(|ts| TimestampedSample::new(ts, entry)))
            .collect();
        nearest_sample_same_day(&samples, target).map(|sample| sample.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const BASE: &str = "https://cdn.example.com/weathers/";

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, hour, minute, 0).unwrap()
    }

    fn quarter_sample() -> TimestampedSample<QuarterHourlyWeather> {
        TimestampedSample::new(
            ts(13, 45),
            QuarterHourlyWeather {
                temperature_2m: Some(21.3),
                apparent_temperature: Some(20.1),
                relative_humidity_2m: Some(64.0),
                weather_code: Some(61.0),
                wind_speed_10m: Some(12.5),
                wind_direction_10m: Some(230.0),
                wind_gusts_10m: Some(30.2),
                ..Default::default()
            },
        )
    }

    fn hourly_sample() -> TimestampedSample<HourlyWeather> {
        TimestampedSample::new(
            ts(14, 0),
            HourlyWeather {
                temperature_2m: Some(22.0),
                relative_humidity_2m: Some(60.0),
                rain: Some(0.8),
                weather_code: Some(3.0),
                wind_speed_10m: Some(10.0),
                wind_direction_10m: Some(210.0),
                pressure_msl: Some(1013.6),
                is_day: Some(1.0),
                ..Default::default()
            },
        )
    }

    fn daily_sample() -> TimestampedSample<DailyWeather> {
        TimestampedSample::new(
            ts(0, 0),
            DailyWeather {
                temperature_2m_max: Some(24.8),
                temperature_2m_min: Some(14.2),
                weather_code: Some(80.0),
            },
        )
    }

    #[test]
    fn quarter_hourly_values_take_precedence() {
        let quarter = quarter_sample();
        let hourly = hourly_sample();
        let daily = daily_sample();

        let forecast = Forecast::compose(Some(&quarter), Some(&hourly), Some(&daily), BASE).unwrap();

        assert_eq!(forecast.dt, ts(13, 45).timestamp());
        assert_eq!(forecast.main.temp, 21.3);
        assert_eq!(forecast.main.feels_like, 20.1);
        assert_eq!(forecast.main.humidity, 64);
        assert_eq!(forecast.wind.speed, 12.5);
        assert_eq!(forecast.wind.deg, 230);
        // The quarter-hourly weather code (light rain) wins over the hourly.
        assert_eq!(forecast.weather[0].id, 500);
    }

    #[test]
    fn hourly_fills_gaps_and_supplies_pressure_and_rain() {
        let mut quarter = quarter_sample();
        quarter.value.temperature_2m = None;
        quarter.value.relative_humidity_2m = None;
        let hourly = hourly_sample();

        let forecast = Forecast::compose(Some(&quarter), Some(&hourly), None, BASE).unwrap();

        assert_eq!(forecast.main.temp, 22.0);
        assert_eq!(forecast.main.humidity, 60);
        assert_eq!(forecast.main.pressure, 1013);
        assert_eq!(forecast.rain.three_h, 0.8);
        // Min/max come from the daily sample only.
        assert_eq!(forecast.main.temp_min, 0.0);
        assert_eq!(forecast.main.temp_max, 0.0);
    }

    #[test]
    fn daily_supplies_temperature_range_and_last_resort_condition() {
        let daily = daily_sample();
        let forecast = Forecast::compose(None, None, Some(&daily), BASE).unwrap();

        assert_eq!(forecast.dt, ts(0, 0).timestamp());
        assert_eq!(forecast.main.temp_min, 14.2);
        assert_eq!(forecast.main.temp_max, 24.8);
        // Rain showers, from the daily weather code.
        assert_eq!(forecast.weather[0].id, 520);
        assert_eq!(forecast.dt_txt, "2024-06-10 00:00:00");
    }

    #[test]
    fn all_samples_absent_composes_nothing() {
        assert!(Forecast::compose(None, None, None, BASE).is_none());
    }

    #[test]
    fn night_flag_drives_pod_and_icon_suffix() {
        let mut hourly = hourly_sample();
        hourly.value.is_day = Some(0.0);

        let forecast = Forecast::compose(None, Some(&hourly), None, BASE).unwrap();

        assert_eq!(forecast.sys.pod, "n");
        assert!(forecast.weather[0].icon.ends_with("n.png"));
    }

    #[test]
    fn missing_condition_defaults_to_clear_sky() {
        let mut hourly = hourly_sample();
        hourly.value.weather_code = None;

        let forecast = Forecast::compose(None, Some(&hourly), None, BASE).unwrap();

        assert_eq!(forecast.weather[0].id, 800);
        assert_eq!(forecast.weather[0].main, "Clear");
        assert_eq!(forecast.weather[0].icon, format!("{}113d.png", BASE));
    }

    #[test]
    fn serializes_with_openweather_field_names() {
        let hourly = hourly_sample();
        let forecast = Forecast::compose(None, Some(&hourly), None, BASE).unwrap();

        let json = serde_json::to_value(&forecast).unwrap();
        assert!(json.get("dt_txt").is_some());
        assert!(json["main"].get("feels_like").is_some());
        assert!(json["main"].get("grnd_level").is_some());
        assert!(json["rain"].get("3h").is_some());
        assert_eq!(json["sys"]["pod"], "d");
    }

    #[test]
    fn list_nearest_stays_within_the_target_day() {
        let next_day = Utc.with_ymd_and_hms(2024, 6, 11, 0, 15, 0).unwrap();
        let entries: Vec<Forecast> = [ts(21, 0), ts(23, 0), next_day]
            .iter()
            .map(|t| {
                let sample = TimestampedSample::new(*t, HourlyWeather::default());
                Forecast::compose(None, Some(&sample), None, BASE).unwrap()
            })
            .collect();

        let list = ForecastList {
            cod: "200".to_string(),
            message: 0,
            cnt: entries.len() as i64,
            list: entries,
        };

        let found = list.nearest_to(ts(23, 45)).unwrap();
        assert_eq!(found.dt, ts(23, 0).timestamp());
    }
}
