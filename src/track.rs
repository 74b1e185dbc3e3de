//! Sampling an orbit track across one period.

use chrono::{DateTime, Duration, Utc};
use helio_orbits::{position_at_elapsed, OrbitError, OrbitalElements, PlanarPosition};

/// One sampled point along the track.
#[derive(Debug, Clone)]
pub struct TrackPoint {
    /// Calendar label for the sample.
    pub instant: DateTime<Utc>,
    /// Signed seconds since the perihelion epoch; this drives the math.
    pub elapsed_s: f64,
    pub position: PlanarPosition,
}

/// Sample one orbital period in `samples` uniform steps starting at `start`.
///
/// Returns `samples + 1` points so the track closes on itself: the first and
/// last positions coincide to within solver tolerance after the mean anomaly
/// wraps by exactly 2π. Position math runs on the f64 elapsed seconds; the
/// instant is a label rounded to milliseconds.
pub fn sample_period(
    elements: &OrbitalElements,
    start: DateTime<Utc>,
    samples: usize,
) -> Result<Vec<TrackPoint>, OrbitError> {
    let base_elapsed =
        crate::epoch::elapsed_seconds(elements.perihelion_epoch(), start);
    let step_s = elements.orbital_period_s() / samples.max(1) as f64;

    let mut points = Vec::with_capacity(samples + 1);
    for index in 0..=samples {
        let offset_s = step_s * index as f64;
        let elapsed_s = base_elapsed + offset_s;
        let position = position_at_elapsed(elements, elapsed_s)?;
        points.push(TrackPoint {
            instant: start + Duration::milliseconds((offset_s * 1_000.0).round() as i64),
            elapsed_s,
            position,
        });
    }
    Ok(points)
}
