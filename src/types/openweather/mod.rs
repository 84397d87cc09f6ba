pub mod air_quality;
pub mod forecast;
pub mod icon;
