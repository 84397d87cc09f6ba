mod aqi;
mod clients;
mod error;
mod meteobridge;
mod selection;
mod types;
mod upstream;

pub use error::MeteoBridgeError;
pub use meteobridge::*;

pub use clients::air_quality_client::*;
pub use clients::forecast_client::*;

pub use aqi::breakpoints::{Breakpoint, Pollutant};
pub use aqi::engine::{compute_aqi, pollutant_sub_index, PollutantReading, AQI_CEILING};
pub use aqi::error::AqiError;

pub use selection::{nearest_sample, nearest_sample_same_day, TimestampedSample};

pub use types::openweather::air_quality::*;
pub use types::openweather::forecast::*;
pub use types::openweather::icon::DEFAULT_ICON_BASE_URL;
pub use types::weather_condition::WeatherCondition;

pub use upstream::error::UpstreamError;
pub use upstream::params::*;
pub use upstream::response::*;
