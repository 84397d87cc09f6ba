//! Defines the `WeatherCondition` enum, mapping the WMO weather
//! interpretation codes reported by Open-Meteo to descriptive variants and
//! to their OpenWeather equivalents.

/// Represents a WMO weather interpretation code (WW) as reported by
/// Open-Meteo.
///
/// This enum maps the integer codes found in the `weather_code` variable
/// to meaningful weather condition descriptions. See the
/// [Open-Meteo documentation](https://open-meteo.com/en/docs) for the code
/// definitions.
///
/// You can convert an integer code into this enum using the
/// [`WeatherCondition::from_i64`] method, and translate a variant into the
/// OpenWeather condition id, group, and description via
/// [`openweather_id`](WeatherCondition::openweather_id),
/// [`group`](WeatherCondition::group), and
/// [`description`](WeatherCondition::description).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WeatherCondition {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    DepositingRimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    ModerateDrizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    SlightRain = 61,
    /// Code 63: Moderate rain.
    ModerateRain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snow fall.
    SlightSnowFall = 71,
    /// Code 73: Moderate snow fall.
    ModerateSnowFall = 73,
    /// Code 75: Heavy snow fall.
    HeavySnowFall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    SlightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    ModerateRainShowers = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShowers = 82,
    /// Code 85: Slight snow showers.
    SlightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormSlightHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormHeavyHail = 99,
}

impl WeatherCondition {
    /// Attempts to convert a WMO weather interpretation code into a
    /// `WeatherCondition` variant.
    ///
    /// # Arguments
    ///
    /// * `value`: The integer weather code (usually from the `weather_code`
    ///   variable of an Open-Meteo response).
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` if the `value` is a code Open-Meteo emits.
    /// * `None` for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meteobridge::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_i64(61), Some(WeatherCondition::SlightRain));
    /// assert_eq!(WeatherCondition::from_i64(42), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCondition::ClearSky),
            1 => Some(WeatherCondition::MainlyClear),
            2 => Some(WeatherCondition::PartlyCloudy),
            3 => Some(WeatherCondition::Overcast),
            45 => Some(WeatherCondition::Fog),
            48 => Some(WeatherCondition::DepositingRimeFog),
            51 => Some(WeatherCondition::LightDrizzle),
            53 => Some(WeatherCondition::ModerateDrizzle),
            55 => Some(WeatherCondition::DenseDrizzle),
            56 => Some(WeatherCondition::LightFreezingDrizzle),
            57 => Some(WeatherCondition::DenseFreezingDrizzle),
            61 => Some(WeatherCondition::SlightRain),
            63 => Some(WeatherCondition::ModerateRain),
            65 => Some(WeatherCondition::HeavyRain),
            66 => Some(WeatherCondition::LightFreezingRain),
            67 => Some(WeatherCondition::HeavyFreezingRain),
            71 => Some(WeatherCondition::SlightSnowFall),
            73 => Some(WeatherCondition::ModerateSnowFall),
            75 => Some(WeatherCondition::HeavySnowFall),
            77 => Some(WeatherCondition::SnowGrains),
            80 => Some(WeatherCondition::SlightRainShowers),
            81 => Some(WeatherCondition::ModerateRainShowers),
            82 => Some(WeatherCondition::ViolentRainShowers),
            85 => Some(WeatherCondition::SlightSnowShowers),
            86 => Some(WeatherCondition::HeavySnowShowers),
            95 => Some(WeatherCondition::Thunderstorm),
            96 => Some(WeatherCondition::ThunderstormSlightHail),
            99 => Some(WeatherCondition::ThunderstormHeavyHail),
            _ => None,
        }
    }

    /// The OpenWeather condition id this code translates to.
    pub fn openweather_id(&self) -> u16 {
        self.mapping().0
    }

    /// The OpenWeather condition group ("Clear", "Rain", "Snow", ...).
    pub fn group(&self) -> &'static str {
        self.mapping().1
    }

    /// The OpenWeather human-readable condition description.
    pub fn description(&self) -> &'static str {
        self.mapping().2
    }

    fn mapping(&self) -> (u16, &'static str, &'static str) {
        match self {
            WeatherCondition::ClearSky => (800, "Clear", "clear sky"),
            WeatherCondition::MainlyClear => (801, "Clouds", "few clouds"),
            WeatherCondition::PartlyCloudy => (802, "Clouds", "scattered clouds"),
            WeatherCondition::Overcast => (804, "Clouds", "overcast clouds"),
            WeatherCondition::Fog | WeatherCondition::DepositingRimeFog => (741, "Fog", "fog"),
            WeatherCondition::LightDrizzle => (300, "Drizzle", "light intensity drizzle"),
            WeatherCondition::ModerateDrizzle => (301, "Drizzle", "drizzle"),
            WeatherCondition::DenseDrizzle => (302, "Drizzle", "heavy intensity drizzle"),
            WeatherCondition::LightFreezingDrizzle => {
                (310, "Drizzle", "light intensity drizzle rain")
            }
            WeatherCondition::DenseFreezingDrizzle => (313, "Drizzle", "shower rain and drizzle"),
            WeatherCondition::SlightRain => (500, "Rain", "light rain"),
            WeatherCondition::ModerateRain => (501, "Rain", "moderate rain"),
            WeatherCondition::HeavyRain => (502, "Rain", "heavy intensity rain"),
            WeatherCondition::LightFreezingRain | WeatherCondition::HeavyFreezingRain => {
                (511, "Rain", "freezing rain")
            }
            WeatherCondition::SlightSnowFall => (600, "Snow", "light snow"),
            WeatherCondition::ModerateSnowFall => (601, "Snow", "snow"),
            WeatherCondition::HeavySnowFall => (602, "Snow", "heavy snow"),
            WeatherCondition::SnowGrains => (611, "Snow", "sleet"),
            WeatherCondition::SlightRainShowers => (520, "Rain", "light intensity shower rain"),
            WeatherCondition::ModerateRainShowers => (521, "Rain", "shower rain"),
            WeatherCondition::ViolentRainShowers => (522, "Rain", "heavy intensity shower rain"),
            WeatherCondition::SlightSnowShowers => (620, "Snow", "light shower snow"),
            WeatherCondition::HeavySnowShowers => (622, "Snow", "heavy shower snow"),
            WeatherCondition::Thunderstorm
            | WeatherCondition::ThunderstormSlightHail
            | WeatherCondition::ThunderstormHeavyHail => {
                (200, "Thunderstorm", "thunderstorm with light rain")
            }
        }
    }
}
