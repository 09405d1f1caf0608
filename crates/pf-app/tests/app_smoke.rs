//! Smoke tests for the service layer: runs, scenarios, sweeps and export.

use pf_app::{AppError, compute_step_metrics, run_config, run_scenario, run_sweep, series_csv};
use pf_project::{Scenario, SweepDef, SweepParameter, save_yaml};
use pf_sim::{SimConfig, simulate};

#[test]
fn default_run_reports_reference_metrics() {
    let response = run_config(&SimConfig::default().with_duration(8.0)).unwrap();
    let metrics = &response.metrics;

    assert_eq!(response.record.len(), 8000);
    assert!((metrics.final_value.unwrap() - 0.8254475221553356).abs() < 1e-9);
    assert!((metrics.overshoot_pct.unwrap() - (-17.455247784466444)).abs() < 1e-7);

    // Still rising at the end: peak is the final sample
    assert_eq!(metrics.peak_value, metrics.final_value);
    assert_eq!(metrics.rise_time_s, None);
    assert_eq!(metrics.saturation_pct, Some(0.0));

    assert_eq!(
        format!("{:.3}", metrics.final_value.unwrap()),
        "0.825".to_string()
    );
    assert_eq!(
        format!("{:.1}", metrics.overshoot_pct.unwrap()),
        "-17.5".to_string()
    );
}

#[test]
fn run_rejects_zero_time_step() {
    let cfg = SimConfig {
        time_step: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(run_config(&cfg), Err(AppError::Simulation(_))));
}

#[test]
fn scenario_file_runs_its_configuration() {
    let mut scenario = Scenario::new("aggressive");
    scenario.sim = scenario.sim.with_gains(20.0, 5.0, 1.0);

    let path = std::env::temp_dir().join("pf_app_scenario_run.yaml");
    save_yaml(&path, &scenario).unwrap();

    let response = run_scenario(&path).unwrap();
    assert_eq!(response.config, scenario.sim);
    assert_eq!(response.record, simulate(&scenario.sim).unwrap());
}

#[test]
fn missing_scenario_file_reports_path() {
    let path = std::env::temp_dir().join("pf_app_does_not_exist.yaml");
    let err = run_scenario(&path).unwrap_err();
    match err {
        AppError::ScenarioFileRead { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sweep_matches_sequential_runs_in_order() {
    let base = SimConfig::default().with_duration(4.0);
    let sweep = SweepDef::linear(SweepParameter::Kp, 1.0, 9.0, 5);

    let results = run_sweep(&base, &sweep).unwrap();
    assert_eq!(results.len(), 5);

    for (result, value) in results.iter().zip(sweep.generate_points()) {
        assert_eq!(result.value, value);
        let cfg = SimConfig {
            kp: value,
            ..base.clone()
        };
        let record = simulate(&cfg).unwrap();
        let expected = compute_step_metrics(&record, cfg.setpoint, &cfg.output_limits);
        assert_eq!(result.metrics, expected);
    }
}

#[test]
fn sweep_rejects_invalid_base() {
    let base = SimConfig {
        duration: 0.0,
        ..SimConfig::default()
    };
    let sweep = SweepDef::linear(SweepParameter::Ki, 0.0, 1.0, 3);
    assert!(run_sweep(&base, &sweep).is_err());
}

#[test]
fn csv_export_has_one_line_per_sample_plus_header() {
    let record = simulate(&SimConfig::default().with_duration(0.1)).unwrap();
    let csv = series_csv(&record).unwrap();
    assert_eq!(csv.lines().count(), record.len() + 1);
    assert!(csv.starts_with("time_s,output,control\n"));
}
