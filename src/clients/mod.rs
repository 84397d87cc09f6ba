pub mod air_quality_client;
pub mod forecast_client;
