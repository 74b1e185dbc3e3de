//! Immutable orbital-element sets for closed (elliptical) heliocentric orbits.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};

use crate::OrbitError;

/// Fixed geometry and timing of a closed orbit.
///
/// Constructed once from caller-supplied values and immutable thereafter, so
/// a single instance can back any number of concurrent position evaluations.
/// Fields are private: the constructor is the only place the range
/// invariants are enforced, and mean motion is always derived from the
/// period rather than stored beside it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis_km: f64,
    eccentricity: f64,
    orbital_period_s: f64,
    perihelion_epoch: DateTime<Utc>,
}

impl OrbitalElements {
    /// Build a validated element set.
    ///
    /// Rejects a non-positive semi-major axis or period and any
    /// eccentricity outside `[0, 1)`; the downstream solver's convergence
    /// guarantee only holds for bound elliptical orbits.
    pub fn new(
        semi_major_axis_km: f64,
        eccentricity: f64,
        orbital_period_s: f64,
        perihelion_epoch: DateTime<Utc>,
    ) -> Result<Self, OrbitError> {
        if !(semi_major_axis_km > 0.0) {
            return Err(OrbitError::NonPositiveSemiMajorAxis(semi_major_axis_km));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::EccentricityOutOfRange(eccentricity));
        }
        if !(orbital_period_s > 0.0) {
            return Err(OrbitError::NonPositivePeriod(orbital_period_s));
        }
        Ok(Self {
            semi_major_axis_km,
            eccentricity,
            orbital_period_s,
            perihelion_epoch,
        })
    }

    /// Semi-major axis in kilometres.
    pub fn semi_major_axis_km(&self) -> f64 {
        self.semi_major_axis_km
    }

    /// Orbital eccentricity (dimensionless, `0 ≤ e < 1`).
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Orbital period in seconds.
    pub fn orbital_period_s(&self) -> f64 {
        self.orbital_period_s
    }

    /// Reference instant of a perihelion passage (eccentric anomaly zero).
    pub fn perihelion_epoch(&self) -> DateTime<Utc> {
        self.perihelion_epoch
    }

    /// Mean angular rate `2π / period` in radians per second.
    ///
    /// Derived on demand so it can never drift out of sync with the period.
    pub fn mean_motion_rad_s(&self) -> f64 {
        TAU / self.orbital_period_s
    }

    /// Perihelion distance `a·(1 − e)` in kilometres.
    pub fn perihelion_distance_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `a·(1 + e)` in kilometres.
    pub fn aphelion_distance_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 + self.eccentricity)
    }
}
