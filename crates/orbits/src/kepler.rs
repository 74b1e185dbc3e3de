//! Newton–Raphson solver for Kepler's equation `M = E − e·sin E`.

use crate::OrbitError;

/// Default convergence tolerance on the Newton step, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration budget before the solver gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Solve Kepler's equation for the eccentric anomaly with default settings.
///
/// `mean_anomaly_rad` may be any real value; it is not required to be
/// normalized. See [`solve_eccentric_anomaly_with`] for the iteration
/// details and failure modes.
pub fn solve_eccentric_anomaly(mean_anomaly_rad: f64, eccentricity: f64) -> Result<f64, OrbitError> {
    solve_eccentric_anomaly_with(
        mean_anomaly_rad,
        eccentricity,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// Solve Kepler's equation with explicit tolerance and iteration budget.
///
/// Newton–Raphson on `f(E) = E − e·sin E − M` with `f'(E) = 1 − e·cos E`,
/// starting from `E₀ = M`; the derivative is bounded below by `1 − e`, so
/// the step is always finite for a valid eccentricity. Iteration stops once
/// the step magnitude drops to `tolerance`. Exhausting `max_iterations`
/// without converging returns [`OrbitError::NoConvergence`] rather than an
/// unconverged estimate.
///
/// Eccentricities outside `[0, 1)` are rejected before any iteration runs,
/// as are a non-positive tolerance and an empty iteration budget.
pub fn solve_eccentric_anomaly_with(
    mean_anomaly_rad: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, OrbitError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitError::EccentricityOutOfRange(eccentricity));
    }
    if !(tolerance > 0.0) {
        return Err(OrbitError::NonPositiveTolerance(tolerance));
    }
    if max_iterations == 0 {
        return Err(OrbitError::ZeroIterationBudget);
    }

    let mut estimate = mean_anomaly_rad;
    let mut last_step = f64::INFINITY;
    for _ in 0..max_iterations {
        let residual = estimate - eccentricity * estimate.sin() - mean_anomaly_rad;
        let slope = 1.0 - eccentricity * estimate.cos();
        last_step = residual / slope;
        estimate -= last_step;
        if last_step.abs() <= tolerance {
            return Ok(estimate);
        }
    }

    Err(OrbitError::NoConvergence {
        iterations: max_iterations,
        last_step,
    })
}
