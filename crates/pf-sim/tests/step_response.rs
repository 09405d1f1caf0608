//! Integration test: closed-loop step response of the default PID + plant.
//!
//! Golden values come from a straightforward forward-Euler run of the same
//! loop (duration 8 s, dt 1 ms, Kp 3, Ki 1, Kd 0.2, wn 2, zeta 0.5, K 1, sp 1).
//! With these gains the loop is still rising at the end of the run, so the
//! peak is the last sample and the overshoot is negative.

use pf_sim::{SimConfig, SimError, simulate, simulate_with};

const GOLDEN_FINAL_8S: f64 = 0.8254475221553356;
const GOLDEN_OVERSHOOT_8S: f64 = -17.455247784466444;
const GOLDEN_FINAL_10S: f64 = 0.8706273396751752;

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn default_run_matches_golden_values() {
    let record = simulate(&SimConfig::default().with_duration(8.0)).unwrap();
    assert_eq!(record.len(), 8000);

    let final_value = *record.y.last().unwrap();
    assert!(
        (final_value - GOLDEN_FINAL_8S).abs() < 1e-9,
        "final value {final_value}"
    );

    let overshoot = (peak(&record.y) - 1.0) / 1.0 * 100.0;
    assert!(
        (overshoot - GOLDEN_OVERSHOOT_8S).abs() < 1e-7,
        "overshoot {overshoot}"
    );
}

#[test]
fn library_default_duration_matches_golden_value() {
    let record = simulate(&SimConfig::default()).unwrap();
    assert_eq!(record.len(), 10_000);
    assert!((record.y.last().unwrap() - GOLDEN_FINAL_10S).abs() < 1e-9);
}

#[test]
fn positional_entry_point_matches_config_entry_point() {
    let a = simulate_with(8.0, 0.001, 3.0, 1.0, 0.2, 2.0, 0.5, 1.0, 1.0).unwrap();
    let b = simulate(&SimConfig::default().with_duration(8.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn first_samples_follow_control_law() {
    let record = simulate(&SimConfig::default().with_duration(0.01)).unwrap();

    // Plant starts at rest; no derivative on the first sample
    assert_eq!(record.y[0], 0.0);
    assert!((record.u[0] - 3.001).abs() < 1e-12);

    // Position lags velocity by one Euler step, so y[1] is still zero
    assert_eq!(record.y[1], 0.0);
    assert!((record.u[1] - 3.002).abs() < 1e-12);
}

#[test]
fn zero_gains_leave_plant_at_rest() {
    let cfg = SimConfig::default().with_duration(5.0).with_gains(0.0, 0.0, 0.0);
    let record = simulate(&cfg).unwrap();

    assert!(record.u.iter().all(|&u| u == 0.0));
    assert!(record.y.iter().all(|&y| y == 0.0));
}

#[test]
fn high_gains_saturate_at_both_limits() {
    let cfg = SimConfig::default().with_gains(50.0, 20.0, 0.0);
    let record = simulate(&cfg).unwrap();

    assert!(record.u.iter().any(|&u| u == 10.0));
    assert!(record.u.iter().any(|&u| u == -10.0));
    assert!(record.u.iter().all(|&u| (-10.0..=10.0).contains(&u)));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let cfg = SimConfig::default().with_gains(4.0, 2.0, 0.5);
    let first = simulate(&cfg).unwrap();
    let second = simulate(&cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unstable_configuration_still_runs() {
    // Negative damping: the loop diverges but every sample is reported
    let cfg = SimConfig {
        damping_ratio: -0.5,
        ..SimConfig::default()
    };
    let record = simulate(&cfg).unwrap();
    assert_eq!(record.len(), 10_000);
    assert!(record.y.iter().map(|y| y.abs()).fold(0.0, f64::max) > 1.0);
}

#[test]
fn zero_time_step_fails_fast() {
    let err = simulate_with(8.0, 0.0, 3.0, 1.0, 0.2, 2.0, 0.5, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig { .. }));
    assert!(err.to_string().contains("time_step"));
}
