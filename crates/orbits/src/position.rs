//! Elapsed time to planar Cartesian position, through the anomaly chain.

use chrono::{DateTime, Utc};
use helio_core::angles;

use crate::OrbitError;
use crate::elements::OrbitalElements;
use crate::kepler::solve_eccentric_anomaly;

/// Position in the orbital plane, kilometres, Sun at the origin and the
/// x-axis pointing at perihelion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPosition {
    pub x_km: f64,
    pub y_km: f64,
}

impl PlanarPosition {
    /// Distance from the focus, `√(x² + y²)`.
    pub fn radius_km(&self) -> f64 {
        self.x_km.hypot(self.y_km)
    }
}

/// Position at a calendar instant.
///
/// Elapsed time is the signed duration from the perihelion epoch; instants
/// before the epoch are valid and wrap through the modulo reduction like any
/// other phase.
pub fn position_at(
    elements: &OrbitalElements,
    instant: DateTime<Utc>,
) -> Result<PlanarPosition, OrbitError> {
    let elapsed = instant.signed_duration_since(elements.perihelion_epoch());
    position_at_elapsed(elements, elapsed.num_milliseconds() as f64 / 1_000.0)
}

/// Position after `elapsed_s` signed seconds since perihelion passage.
///
/// The anomaly chain: mean anomaly from the mean motion, reduced to
/// `[0, 2π)`; eccentric anomaly from the Kepler solver; true anomaly via the
/// half-angle `atan2` form, which keeps the correct quadrant over the whole
/// revolution without branch logic; then radius and Cartesian projection.
pub fn position_at_elapsed(
    elements: &OrbitalElements,
    elapsed_s: f64,
) -> Result<PlanarPosition, OrbitError> {
    let mean_anomaly = angles::normalize_radians(elements.mean_motion_rad_s() * elapsed_s);
    let ecc = elements.eccentricity();
    let ecc_anomaly = solve_eccentric_anomaly(mean_anomaly, ecc)?;

    let true_anomaly = 2.0 * f64::atan2(
        (1.0 + ecc).sqrt() * (ecc_anomaly / 2.0).sin(),
        (1.0 - ecc).sqrt() * (ecc_anomaly / 2.0).cos(),
    );
    let radius_km = elements.semi_major_axis_km() * (1.0 - ecc * ecc_anomaly.cos());

    Ok(PlanarPosition {
        x_km: radius_km * true_anomaly.cos(),
        y_km: radius_km * true_anomaly.sin(),
    })
}
