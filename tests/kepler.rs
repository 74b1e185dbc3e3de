use std::f64::consts::PI;

use planet_position_calculator::orbits::kepler::{
    solve_eccentric_anomaly, solve_eccentric_anomaly_with,
};
use planet_position_calculator::orbits::OrbitError;

#[test]
fn kepler_residual_holds_across_anomaly_grid() {
    // Mean anomalies are deliberately unnormalized: negative and beyond 2π.
    let mean_anomalies = [
        -3.0 * PI,
        -1.0,
        0.0,
        0.4,
        PI / 2.0,
        PI,
        4.5,
        2.0 * PI + 0.25,
        10.0 * PI + 0.1,
    ];
    let eccentricities = [0.0, 0.0167, 0.1, 0.3, 0.6, 0.9];

    for &ecc in &eccentricities {
        for &mean in &mean_anomalies {
            let ecc_anomaly = solve_eccentric_anomaly(mean, ecc)
                .unwrap_or_else(|err| panic!("solve failed for M={mean}, e={ecc}: {err}"));
            let residual = ecc_anomaly - ecc * ecc_anomaly.sin() - mean;
            assert!(
                residual.abs() < 1e-6,
                "residual {residual:e} too large for M={mean}, e={ecc}"
            );
        }
    }
}

#[test]
fn circular_orbit_maps_mean_anomaly_straight_through() {
    let ecc_anomaly = solve_eccentric_anomaly(1.234, 0.0).expect("circular solve");
    assert!((ecc_anomaly - 1.234).abs() < 1e-12);
}

#[test]
fn unbound_eccentricities_are_rejected_before_iteration() {
    for ecc in [1.0, 1.5, -0.1] {
        let err = solve_eccentric_anomaly(0.5, ecc).expect_err("should reject");
        assert_eq!(err, OrbitError::EccentricityOutOfRange(ecc));
    }
}

#[test]
fn tiny_iteration_budget_raises_convergence_error() {
    let err = solve_eccentric_anomaly_with(3.0, 0.9, 1e-12, 1).expect_err("should not converge");
    match err {
        OrbitError::NoConvergence {
            iterations,
            last_step,
        } => {
            assert_eq!(iterations, 1);
            assert!(last_step.abs() > 1e-12);
        }
        other => panic!("expected NoConvergence, got {other:?}"),
    }
}

#[test]
fn invalid_solver_settings_are_rejected() {
    assert_eq!(
        solve_eccentric_anomaly_with(0.5, 0.1, 0.0, 10).expect_err("zero tolerance"),
        OrbitError::NonPositiveTolerance(0.0)
    );
    assert_eq!(
        solve_eccentric_anomaly_with(0.5, 0.1, 1e-6, 0).expect_err("zero budget"),
        OrbitError::ZeroIterationBudget
    );
}
