use crate::aqi::breakpoints::Pollutant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AqiError {
    #[error("{pollutant} concentration {value} is not a finite, non-negative number")]
    InvalidConcentration { pollutant: Pollutant, value: f64 },
}
