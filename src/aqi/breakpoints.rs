//! Static EPA breakpoint tables mapping pollutant concentrations to AQI
//! sub-index ranges.
//!
//! Each pollutant has an ordered, contiguous table of linear segments taken
//! from the EPA's published AQI breakpoints. Revising a table when the EPA
//! updates it is a data change here, not a code change.

use std::fmt;

/// One linear segment of the EPA piecewise AQI function.
///
/// Maps the concentration interval `[concentration_low, concentration_high]`
/// onto the index interval `[index_low, index_high]`. Concentrations are in
/// the unit of the owning pollutant's table: µg/m³ for the particulates and
/// NO2, ppb for O3 and SO2, ppm for CO.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: f64,
    pub index_high: f64,
}

const fn bp(
    concentration_low: f64,
    concentration_high: f64,
    index_low: f64,
    index_high: f64,
) -> Breakpoint {
    Breakpoint {
        concentration_low,
        concentration_high,
        index_low,
        index_high,
    }
}

const PM2_5: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0.0, 50.0),
    bp(12.0, 35.4, 51.0, 100.0),
    bp(35.4, 55.4, 101.0, 150.0),
    bp(55.4, 150.4, 151.0, 200.0),
    bp(150.4, 250.4, 201.0, 300.0),
    bp(250.4, 350.4, 301.0, 400.0),
    bp(350.4, 500.4, 401.0, 500.0),
];

const PM10: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0.0, 50.0),
    bp(54.0, 154.0, 51.0, 100.0),
    bp(154.0, 254.0, 101.0, 150.0),
    bp(254.0, 354.0, 151.0, 200.0),
    bp(354.0, 424.0, 201.0, 300.0),
    bp(424.0, 504.0, 301.0, 400.0),
    bp(504.0, 604.0, 401.0, 500.0),
];

const O3: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0.0, 50.0),
    bp(54.0, 70.0, 51.0, 100.0),
    bp(70.0, 85.0, 101.0, 150.0),
    bp(85.0, 105.0, 151.0, 200.0),
    bp(105.0, 200.0, 201.0, 300.0),
    bp(200.0, 504.0, 301.0, 400.0),
    bp(504.0, 604.0, 401.0, 500.0),
];

const NO2: [Breakpoint; 7] = [
    bp(0.0, 53.0, 0.0, 50.0),
    bp(53.0, 100.0, 51.0, 100.0),
    bp(100.0, 360.0, 101.0, 150.0),
    bp(360.0, 649.0, 151.0, 200.0),
    bp(649.0, 1249.0, 201.0, 300.0),
    bp(1249.0, 1649.0, 301.0, 400.0),
    bp(1649.0, 2049.0, 401.0, 500.0),
];

const SO2: [Breakpoint; 7] = [
    bp(0.0, 35.0, 0.0, 50.0),
    bp(35.0, 75.0, 51.0, 100.0),
    bp(75.0, 185.0, 101.0, 150.0),
    bp(185.0, 304.0, 151.0, 200.0),
    bp(304.0, 604.0, 201.0, 300.0),
    bp(604.0, 804.0, 301.0, 400.0),
    bp(804.0, 1004.0, 401.0, 500.0),
];

const CO: [Breakpoint; 7] = [
    bp(0.0, 4.4, 0.0, 50.0),
    bp(4.4, 9.4, 51.0, 100.0),
    bp(9.4, 12.4, 101.0, 150.0),
    bp(12.4, 15.4, 151.0, 200.0),
    bp(15.4, 30.4, 201.0, 300.0),
    bp(30.4, 40.4, 301.0, 400.0),
    bp(40.4, 50.4, 401.0, 500.0),
];

/// Molar volume of an ideal gas at 25 °C and 1 atm, in litres per mole.
/// Used to convert mass concentrations to mixing ratios.
const MOLAR_VOLUME: f64 = 24.45;

/// Molecular weight of ozone in g/mol.
const MW_O3: f64 = 48.0;
/// Molecular weight of sulphur dioxide in g/mol.
const MW_SO2: f64 = 64.066;
/// Molecular weight of carbon monoxide in g/mol.
const MW_CO: f64 = 28.01;

/// The six pollutants contributing to the US AQI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    /// Fine particulate matter (diameter below 2.5 µm).
    Pm2_5,
    /// Coarse particulate matter (diameter below 10 µm).
    Pm10,
    /// Ozone.
    O3,
    /// Nitrogen dioxide.
    No2,
    /// Sulphur dioxide.
    So2,
    /// Carbon monoxide.
    Co,
}

impl Pollutant {
    /// The EPA breakpoint table for this pollutant, ordered by concentration.
    pub fn breakpoints(&self) -> &'static [Breakpoint] {
        match self {
            Pollutant::Pm2_5 => &PM2_5,
            Pollutant::Pm10 => &PM10,
            Pollutant::O3 => &O3,
            Pollutant::No2 => &NO2,
            Pollutant::So2 => &SO2,
            Pollutant::Co => &CO,
        }
    }

    /// Converts a µg/m³ concentration into the unit of this pollutant's
    /// breakpoint table.
    ///
    /// Particulates and NO2 are tabulated in µg/m³ and pass through
    /// unchanged. O3 and SO2 are converted to ppb, CO to ppm, using the
    /// ideal-gas molar volume and the pollutant's molecular weight.
    pub(crate) fn to_table_unit(&self, ug_per_m3: f64) -> f64 {
        match self {
            Pollutant::Pm2_5 | Pollutant::Pm10 | Pollutant::No2 => ug_per_m3,
            Pollutant::O3 => ug_per_m3 * (MOLAR_VOLUME / MW_O3),
            Pollutant::So2 => ug_per_m3 * (MOLAR_VOLUME / MW_SO2),
            // µg/m³ -> mg/m³ -> ppm
            Pollutant::Co => ug_per_m3 / 1000.0 * (MOLAR_VOLUME / MW_CO),
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Pollutant; 6] = [
        Pollutant::Pm2_5,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    #[test]
    fn tables_start_at_zero() {
        for pollutant in ALL {
            let first = pollutant.breakpoints()[0];
            assert_eq!(first.concentration_low, 0.0, "{}", pollutant);
            assert_eq!(first.index_low, 0.0, "{}", pollutant);
        }
    }

    #[test]
    fn tables_are_ordered_and_contiguous() {
        for pollutant in ALL {
            let table = pollutant.breakpoints();
            for window in table.windows(2) {
                let (prev, next) = (window[0], window[1]);
                assert_eq!(
                    next.concentration_low, prev.concentration_high,
                    "{}: concentration gap between segments",
                    pollutant
                );
                assert_eq!(
                    next.index_low,
                    prev.index_high + 1.0,
                    "{}: index gap between segments",
                    pollutant
                );
            }
        }
    }

    #[test]
    fn tables_top_out_at_the_ceiling() {
        for pollutant in ALL {
            let last = pollutant.breakpoints().last().unwrap();
            assert_eq!(last.index_high, 500.0, "{}", pollutant);
        }
    }

    #[test]
    fn gas_conversions_scale_linearly() {
        // 48 µg/m³ of ozone is 24.45 ppb by definition of the conversion.
        let ppb = Pollutant::O3.to_table_unit(48.0);
        assert!((ppb - 24.45).abs() < 1e-9);

        // 28.01 mg/m³ of CO is 24.45 ppm.
        let ppm = Pollutant::Co.to_table_unit(28_010.0);
        assert!((ppm - 24.45).abs() < 1e-9);

        // Particulates pass through unchanged.
        assert_eq!(Pollutant::Pm2_5.to_table_unit(12.5), 12.5);
        assert_eq!(Pollutant::No2.to_table_unit(80.0), 80.0);
    }
}
