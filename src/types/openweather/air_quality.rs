//! OpenWeather-shaped air-quality records.
//!
//! Serializes to the field layout of the OpenWeather air pollution endpoint.
//! The index in `main.aqi` is the US EPA AQI (0–500): a pure derivation of
//! the component concentrations, computed once when the record is built and
//! immutable afterwards.

use crate::aqi::engine::{compute_aqi, PollutantReading};
use crate::aqi::error::AqiError;
use crate::selection::{nearest_sample, TimestampedSample};
use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single air-quality entry in the OpenWeather air pollution response
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub main: AirQualityIndex,
    pub components: Components,
    /// Unix timestamp of the instant this entry is valid for.
    pub dt: i64,
}

/// The index block of an air-quality entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityIndex {
    /// US EPA Air Quality Index, 0–500.
    pub aqi: u16,
}

/// Pollutant mass concentrations in µg/m³. Components the upstream does not
/// report are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

#[bon]
impl AirQuality {
    /// Builds an air-quality record, deriving the index from whichever
    /// fields were populated.
    ///
    /// A non-zero `us_aqi` reported by the upstream is truncated and used
    /// as-is; an absent or zero value means the index must be computed, so
    /// the AQI engine runs over the populated components (unset components
    /// count as zero).
    ///
    /// # Errors
    ///
    /// Returns [`AqiError::InvalidConcentration`] if the engine runs and a
    /// component is negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteobridge::AirQuality;
    ///
    /// // No upstream index: derived from the components (PM2.5 drives it).
    /// let entry = AirQuality::builder()
    ///     .dt(1717977600)
    ///     .pm2_5(35.4)
    ///     .pm10(40.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(entry.main.aqi, 100);
    ///
    /// // An upstream index wins over the components.
    /// let reported = AirQuality::builder()
    ///     .dt(1717977600)
    ///     .pm2_5(35.4)
    ///     .us_aqi(42.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(reported.main.aqi, 42);
    /// ```
    #[builder]
    pub fn new(
        dt: i64,
        co: Option<f64>,
        no: Option<f64>,
        no2: Option<f64>,
        o3: Option<f64>,
        so2: Option<f64>,
        pm2_5: Option<f64>,
        pm10: Option<f64>,
        nh3: Option<f64>,
        us_aqi: Option<f64>,
    ) -> Result<Self, AqiError> {
        let components = Components {
            co: co.unwrap_or_default(),
            no: no.unwrap_or_default(),
            no2: no2.unwrap_or_default(),
            o3: o3.unwrap_or_default(),
            so2: so2.unwrap_or_default(),
            pm2_5: pm2_5.unwrap_or_default(),
            pm10: pm10.unwrap_or_default(),
            nh3: nh3.unwrap_or_default(),
        };
        let aqi = match us_aqi {
            Some(value) if value != 0.0 => value as u16,
            _ => compute_aqi(&PollutantReading::new(
                components.pm2_5,
                components.pm10,
                components.o3,
                components.no2,
                components.so2,
                components.co,
            ))?,
        };
        Ok(AirQuality {
            main: AirQualityIndex { aqi },
            components,
            dt,
        })
    }
}

impl AirQuality {
    /// The UTC instant this entry is valid for, derived from `dt`.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// The OpenWeather air pollution list wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityList {
    pub list: Vec<AirQuality>,
}

impl AirQualityList {
    /// Returns the entry closest to `target`, across days — air-quality
    /// series are hourly over several days with no same-day restriction.
    /// `None` when the list is empty.
    pub fn nearest_to(&self, target: DateTime<Utc>) -> Option<&AirQuality> {
        let samples: Vec<TimestampedSample<&AirQuality>> = self
            .list
            .iter()
            .filter_map(|entry| entry.date().map(|ts| TimestampedSample::new(ts, entry)))
            .collect();
        nearest_sample(&samples, target).map(|sample| sample.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn derives_the_index_when_upstream_omits_it() {
        let entry = AirQuality::builder()
            .dt(0)
            .pm2_5(12.0)
            .build()
            .unwrap();
        assert_eq!(entry.main.aqi, 50);
        assert_eq!(entry.components.pm2_5, 12.0);
        assert_eq!(entry.components.nh3, 0.0);
    }

    #[test]
    fn a_zero_upstream_index_triggers_the_engine() {
        let entry = AirQuality::builder()
            .dt(0)
            .pm2_5(35.4)
            .us_aqi(0.0)
            .build()
            .unwrap();
        assert_eq!(entry.main.aqi, 100);
    }

    #[test]
    fn a_reported_index_is_truncated_and_kept() {
        let entry = AirQuality::builder()
            .dt(0)
            .pm2_5(500.0)
            .us_aqi(57.9)
            .build()
            .unwrap();
        assert_eq!(entry.main.aqi, 57);
    }

    #[test]
    fn invalid_components_surface_the_engine_error() {
        let result = AirQuality::builder().dt(0).pm2_5(-3.0).build();
        assert!(matches!(
            result,
            Err(AqiError::InvalidConcentration { .. })
        ));
    }

    #[test]
    fn serializes_with_openweather_field_names() {
        let entry = AirQuality::builder()
            .dt(1717977600)
            .co(220.0)
            .no2(14.0)
            .o3(60.0)
            .so2(2.5)
            .pm2_5(8.0)
            .pm10(15.0)
            .build()
            .unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["main"].get("aqi").is_some());
        assert!(json["components"].get("pm2_5").is_some());
        assert!(json["components"].get("nh3").is_some());
        assert_eq!(json["dt"], 1717977600);
    }

    #[test]
    fn list_nearest_matches_across_days() {
        let day1 = Utc.with_ymd_and_hms(2024, 6, 10, 22, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2024, 6, 11, 1, 0, 0).unwrap();
        let list = AirQualityList {
            list: vec![
                AirQuality::builder().dt(day1.timestamp()).build().unwrap(),
                AirQuality::builder().dt(day2.timestamp()).build().unwrap(),
            ],
        };

        let target = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();
        let found = list.nearest_to(target).unwrap();
        assert_eq!(found.dt, day2.timestamp());
    }

    #[test]
    fn empty_list_has_no_match() {
        let list = AirQualityList { list: Vec::new() };
        let target = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();
        assert!(list.nearest_to(target).is_none());
    }
}
