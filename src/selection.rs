//! Nearest-sample selection over timestamped forecast series.
//!
//! Forecast responses arrive as series of timestamped samples; callers ask
//! for "the sample closest to this instant". The scan is exhaustive, so the
//! input series does not have to be sorted.

use chrono::{DateTime, Utc};

/// A payload paired with the UTC instant it is valid for.
///
/// The selector only reads the timestamp; the payload is opaque to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestampedSample<T> {
    pub timestamp: DateTime<Utc>,
    pub value: T,
}

impl<T> TimestampedSample<T> {
    pub fn new(timestamp: DateTime<Utc>, value: T) -> Self {
        Self { timestamp, value }
    }
}

/// Returns the sample whose timestamp is closest to `target`, or `None` for
/// an empty series.
///
/// Distance is measured in whole seconds. A candidate only replaces the
/// current best on a strict improvement, so two equidistant samples resolve
/// to the one appearing first in the series.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use meteobridge::{nearest_sample, TimestampedSample};
///
/// let series = vec![
///     TimestampedSample::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(), "morning"),
///     TimestampedSample::new(Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap(), "afternoon"),
/// ];
/// let target = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
///
/// let nearest = nearest_sample(&series, target).unwrap();
/// assert_eq!(nearest.value, "afternoon");
/// ```
pub fn nearest_sample<T>(
    samples: &[TimestampedSample<T>],
    target: DateTime<Utc>,
) -> Option<&TimestampedSample<T>> {
    nearest(samples, target, false)
}

/// Returns the sample closest to `target` among those sharing its UTC
/// calendar day, or `None` when no sample falls on that day.
///
/// Short-interval weather series are bucketed per day; without this
/// constraint a target of 23:45 could match 00:15 of the next day even
/// though a same-day 23:00 sample exists.
pub fn nearest_sample_same_day<T>(
    samples: &[TimestampedSample<T>],
    target: DateTime<Utc>,
) -> Option<&TimestampedSample<T>> {
    nearest(samples, target, true)
}

fn nearest<T>(
    samples: &[TimestampedSample<T>],
    target: DateTime<Utc>,
    same_day_only: bool,
) -> Option<&TimestampedSample<T>> {
    let target_day = target.date_naive();
    let mut best: Option<(&TimestampedSample<T>, i64)> = None;
    for sample in samples {
        if same_day_only && sample.timestamp.date_naive() != target_day {
            continue;
        }
        let distance = (sample.timestamp - target).num_seconds().abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((sample, distance)),
        }
    }
    best.map(|(sample, _)| sample)
}
