//! Planar Keplerian orbit propagation.
//!
//! The pipeline runs one direction only: elapsed time since perihelion is
//! reduced to a mean anomaly, Kepler's equation is solved for the eccentric
//! anomaly, and the true anomaly and radius project to Cartesian coordinates
//! with the focus (Sun) at the origin and +x toward perihelion. Everything is
//! a pure function of the elements and the evaluation instant; there is no
//! retained state between calls.

pub mod elements;
pub mod kepler;
pub mod position;

pub use elements::OrbitalElements;
pub use kepler::{solve_eccentric_anomaly, solve_eccentric_anomaly_with};
pub use position::{PlanarPosition, position_at, position_at_elapsed};

use thiserror::Error;

/// Errors surfaced by element construction and orbit propagation.
///
/// Nothing is clamped or retried; invalid parameters and solver
/// non-convergence both propagate to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("eccentricity {0} is outside the closed-ellipse range [0, 1)")]
    EccentricityOutOfRange(f64),
    #[error("semi-major axis must be positive, got {0} km")]
    NonPositiveSemiMajorAxis(f64),
    #[error("orbital period must be positive, got {0} s")]
    NonPositivePeriod(f64),
    #[error("solver tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),
    #[error("solver iteration budget must be at least 1")]
    ZeroIterationBudget,
    #[error("Kepler solver did not converge after {iterations} iterations (last step {last_step:e})")]
    NoConvergence { iterations: usize, last_step: f64 },
}
