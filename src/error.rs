use crate::aqi::error::AqiError;
use crate::upstream::error::UpstreamError;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoBridgeError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Aqi(#[from] AqiError),

    #[error("No forecast sample found near {target}")]
    NoMatchingSample { target: DateTime<Utc> },
}
