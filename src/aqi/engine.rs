//! Computes the US EPA Air Quality Index from pollutant concentrations.
//!
//! The AQI is a piecewise-linear function per pollutant: a concentration is
//! located in its [`Breakpoint`] segment, interpolated onto that segment's
//! index range, and truncated to an integer. The overall index is the
//! maximum of the six per-pollutant sub-indices, so the worst pollutant
//! drives the reported value.

use crate::aqi::breakpoints::{Breakpoint, Pollutant};
use crate::aqi::error::AqiError;

/// Upper end of the AQI scale. Concentrations above a pollutant's highest
/// table segment map here without interpolation.
pub const AQI_CEILING: u16 = 500;

/// An immutable set of pollutant concentrations measured at one instant.
///
/// All values are mass concentrations in µg/m³, as reported by the upstream
/// air-quality API. Unit conversions for the gases happen inside the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantReading {
    pub pm2_5: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

impl PollutantReading {
    pub fn new(pm2_5: f64, pm10: f64, o3: f64, no2: f64, so2: f64, co: f64) -> Self {
        Self {
            pm2_5,
            pm10,
            o3,
            no2,
            so2,
            co,
        }
    }

    fn components(&self) -> [(Pollutant, f64); 6] {
        [
            (Pollutant::Pm2_5, self.pm2_5),
            (Pollutant::Pm10, self.pm10),
            (Pollutant::O3, self.o3),
            (Pollutant::No2, self.no2),
            (Pollutant::So2, self.so2),
            (Pollutant::Co, self.co),
        ]
    }
}

/// Computes the AQI sub-index for a single pollutant.
///
/// The concentration is given in µg/m³ and converted to the pollutant's
/// table unit internally. The result is truncated, never rounded, and
/// saturates at [`AQI_CEILING`] above the highest table segment.
///
/// # Errors
///
/// Returns [`AqiError::InvalidConcentration`] if the concentration is
/// negative, NaN, or infinite.
///
/// # Examples
///
/// ```
/// use meteobridge::{pollutant_sub_index, Pollutant};
///
/// // Upper edge of the first PM2.5 segment.
/// assert_eq!(pollutant_sub_index(Pollutant::Pm2_5, 12.0).unwrap(), 50);
///
/// // Far beyond the table: saturates at the ceiling.
/// assert_eq!(pollutant_sub_index(Pollutant::Pm2_5, 1000.0).unwrap(), 500);
/// ```
pub fn pollutant_sub_index(pollutant: Pollutant, ug_per_m3: f64) -> Result<u16, AqiError> {
    if !ug_per_m3.is_finite() || ug_per_m3 < 0.0 {
        return Err(AqiError::InvalidConcentration {
            pollutant,
            value: ug_per_m3,
        });
    }
    Ok(interpolate(
        pollutant.breakpoints(),
        pollutant.to_table_unit(ug_per_m3),
    ))
}

/// Computes the overall AQI for a reading: the maximum of the six
/// per-pollutant sub-indices, an integer in `[0, 500]`.
///
/// # Errors
///
/// Returns [`AqiError::InvalidConcentration`] if any concentration is
/// negative, NaN, or infinite. Every finite non-negative reading succeeds.
///
/// # Examples
///
/// ```
/// use meteobridge::{compute_aqi, PollutantReading};
///
/// let reading = PollutantReading::new(35.4, 0.0, 0.0, 0.0, 0.0, 0.0);
/// assert_eq!(compute_aqi(&reading).unwrap(), 100);
/// ```
pub fn compute_aqi(reading: &PollutantReading) -> Result<u16, AqiError> {
    let mut overall = 0;
    for (pollutant, value) in reading.components() {
        overall = overall.max(pollutant_sub_index(pollutant, value)?);
    }
    Ok(overall)
}

fn interpolate(table: &[Breakpoint], concentration: f64) -> u16 {
    for segment in table {
        if concentration <= segment.concentration_high {
            // Dividing the offset by the identical segment width first keeps
            // the result exact at segment boundaries.
            let fraction = (concentration - segment.concentration_low)
                / (segment.concentration_high - segment.concentration_low);
            let index = segment.index_low + (segment.index_high - segment.index_low) * fraction;
            return index as u16;
        }
    }
    AQI_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(pollutant: Pollutant, value: f64) -> u16 {
        pollutant_sub_index(pollutant, value).unwrap()
    }

    #[test]
    fn pm2_5_segment_edges_and_interior() {
        assert_eq!(sub(Pollutant::Pm2_5, 0.0), 0);
        assert_eq!(sub(Pollutant::Pm2_5, 9.0), 37);
        assert_eq!(sub(Pollutant::Pm2_5, 12.0), 50);
        assert_eq!(sub(Pollutant::Pm2_5, 20.0), 67);
        assert_eq!(sub(Pollutant::Pm2_5, 35.4), 100);
        assert_eq!(sub(Pollutant::Pm2_5, 41.0), 114);
        assert_eq!(sub(Pollutant::Pm2_5, 500.4), 500);
    }

    #[test]
    fn pm10_segment_edges() {
        assert_eq!(sub(Pollutant::Pm10, 54.0), 50);
        assert_eq!(sub(Pollutant::Pm10, 100.0), 73);
        assert_eq!(sub(Pollutant::Pm10, 154.0), 100);
        assert_eq!(sub(Pollutant::Pm10, 604.0), 500);
    }

    #[test]
    fn no2_is_consumed_without_conversion() {
        assert_eq!(sub(Pollutant::No2, 53.0), 50);
        assert_eq!(sub(Pollutant::No2, 75.0), 73);
        assert_eq!(sub(Pollutant::No2, 100.0), 100);
    }

    #[test]
    fn gases_are_converted_before_lookup() {
        // 100 µg/m³ of ozone is 50.9375 ppb, inside the first segment.
        assert_eq!(sub(Pollutant::O3, 100.0), 47);
        // 100 µg/m³ of SO2 is ~38.16 ppb, inside the second segment.
        assert_eq!(sub(Pollutant::So2, 100.0), 54);
        // 10 mg/m³ of CO is ~8.73 ppm, inside the second segment.
        assert_eq!(sub(Pollutant::Co, 10_000.0), 93);
    }

    #[test]
    fn saturates_above_the_highest_segment() {
        assert_eq!(sub(Pollutant::Pm2_5, 1000.0), 500);
        assert_eq!(sub(Pollutant::Pm10, 9999.0), 500);
        assert_eq!(sub(Pollutant::Co, 1_000_000.0), 500);
    }

    #[test]
    fn sub_index_is_monotone_in_concentration() {
        let all = [
            Pollutant::Pm2_5,
            Pollutant::Pm10,
            Pollutant::O3,
            Pollutant::No2,
            Pollutant::So2,
            Pollutant::Co,
        ];
        for pollutant in all {
            let mut previous = 0;
            let mut concentration = 0.0;
            while concentration < 3000.0 {
                let index = sub(pollutant, concentration);
                assert!(
                    index >= previous,
                    "{} sub-index dropped at {} µg/m³",
                    pollutant,
                    concentration
                );
                previous = index;
                concentration += 0.37;
            }
        }
    }

    #[test]
    fn adjacent_segments_are_continuous() {
        // Evaluated exactly at a shared boundary the sub-index equals the
        // lower segment's top; the upper segment starts one point higher.
        for pollutant in [Pollutant::Pm2_5, Pollutant::Pm10, Pollutant::No2] {
            let table = pollutant.breakpoints();
            for window in table.windows(2) {
                let at_boundary = sub(pollutant, window[0].concentration_high);
                assert_eq!(at_boundary as f64, window[0].index_high, "{}", pollutant);
                assert!((window[1].index_low - at_boundary as f64) <= 1.0);
            }
        }
    }

    #[test]
    fn overall_aqi_is_the_worst_sub_index() {
        // PM2.5 at 35.4 gives 100, PM10 at 100 gives 73; the max wins.
        let reading = PollutantReading::new(35.4, 100.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(compute_aqi(&reading).unwrap(), 100);

        let clean = PollutantReading::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(compute_aqi(&clean).unwrap(), 0);
    }

    #[test]
    fn overall_aqi_saturates_with_one_extreme_pollutant() {
        let reading = PollutantReading::new(1000.0, 3.0, 10.0, 5.0, 2.0, 100.0);
        assert_eq!(compute_aqi(&reading).unwrap(), 500);
    }

    #[test]
    fn compute_aqi_is_idempotent() {
        let reading = PollutantReading::new(18.4, 40.0, 61.2, 22.0, 9.1, 420.0);
        let first = compute_aqi(&reading).unwrap();
        let second = compute_aqi(&reading).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_concentrations_are_rejected() {
        assert!(pollutant_sub_index(Pollutant::Pm2_5, -0.1).is_err());
        assert!(pollutant_sub_index(Pollutant::O3, f64::NAN).is_err());
        assert!(pollutant_sub_index(Pollutant::Co, f64::INFINITY).is_err());

        let reading = PollutantReading::new(10.0, 10.0, 10.0, -4.0, 10.0, 10.0);
        assert!(matches!(
            compute_aqi(&reading),
            Err(AqiError::InvalidConcentration {
                pollutant: Pollutant::No2,
                ..
            })
        ));
    }
}
