use clap::{Args, Parser, Subcommand};
use pf_app::{AppResult, RunResponse, StepMetrics, run_service, run_sweep, write_series_csv};
use pf_project::{Scenario, save_yaml};
use pf_sim::SimConfig;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "pidflow CLI - closed-loop PID step response simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one closed-loop simulation and print its metrics
    Run {
        /// Scenario file (YAML or JSON); flags below override its values
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        #[command(flatten)]
        overrides: ConfigOverrides,
        /// Write time, output and control series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Run the parameter sweep defined in a scenario
    Sweep {
        /// Path to the scenario file
        scenario: PathBuf,
    },
    /// Write a scenario file with default settings
    Init {
        /// Output path for the scenario YAML
        path: PathBuf,
        /// Scenario name
        #[arg(long, default_value = "Step response")]
        name: String,
    },
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario file
        scenario: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct ConfigOverrides {
    /// Simulated time in seconds
    #[arg(long)]
    duration: Option<f64>,
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// Proportional gain
    #[arg(long, allow_hyphen_values = true)]
    kp: Option<f64>,
    /// Integral gain
    #[arg(long, allow_hyphen_values = true)]
    ki: Option<f64>,
    /// Derivative gain
    #[arg(long, allow_hyphen_values = true)]
    kd: Option<f64>,
    /// Plant natural frequency (rad/s)
    #[arg(long, allow_hyphen_values = true)]
    wn: Option<f64>,
    /// Plant damping ratio
    #[arg(long, allow_hyphen_values = true)]
    zeta: Option<f64>,
    /// Plant input gain
    #[arg(long, allow_hyphen_values = true)]
    plant_gain: Option<f64>,
    /// Desired output value
    #[arg(long, allow_hyphen_values = true)]
    setpoint: Option<f64>,
}

impl ConfigOverrides {
    fn apply(&self, mut cfg: SimConfig) -> SimConfig {
        let fields = [
            (self.duration, &mut cfg.duration),
            (self.dt, &mut cfg.time_step),
            (self.kp, &mut cfg.kp),
            (self.ki, &mut cfg.ki),
            (self.kd, &mut cfg.kd),
            (self.wn, &mut cfg.natural_frequency),
            (self.zeta, &mut cfg.damping_ratio),
            (self.plant_gain, &mut cfg.plant_gain),
            (self.setpoint, &mut cfg.setpoint),
        ];
        for (value, slot) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
        cfg
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            overrides,
            csv,
        } => cmd_run(scenario.as_deref(), &overrides, csv.as_deref()),
        Commands::Sweep { scenario } => cmd_sweep(&scenario),
        Commands::Init { path, name } => cmd_init(&path, &name),
        Commands::Validate { scenario } => cmd_validate(&scenario),
    }
}

fn cmd_run(
    scenario_path: Option<&Path>,
    overrides: &ConfigOverrides,
    csv: Option<&Path>,
) -> AppResult<()> {
    let base = match scenario_path {
        Some(path) => run_service::load_scenario(path)?.sim,
        None => Scenario::new("cli").sim,
    };
    let config = overrides.apply(base);
    tracing::debug!(?config, "resolved run configuration");

    let response = run_service::run_config(&config)?;
    print_metrics(&response);

    if let Some(path) = csv {
        let file = File::create(path)?;
        write_series_csv(&response.record, BufWriter::new(file))?;
        println!(
            "✓ Exported {} samples to {}",
            response.record.len(),
            path.display()
        );
    }
    Ok(())
}

fn print_metrics(response: &RunResponse) {
    let m = &response.metrics;
    match m.final_value {
        Some(v) => println!("Final value: {:.3}", v),
        None => println!("Final value: n/a (no samples)"),
    }
    match m.overshoot_pct {
        Some(v) => println!("Overshoot: {:.1} percent", v),
        None => println!("Overshoot: n/a"),
    }

    println!("\nDetails:");
    println!("  Samples:       {}", response.record.len());
    print_opt("Peak value:   ", m.peak_value, "");
    print_opt("Peak time:    ", m.peak_time_s, " s");
    print_opt("Rise time:    ", m.rise_time_s, " s");
    print_opt("Settling time:", m.settling_time_s, " s");
    print_opt("SS error:     ", m.steady_state_error, "");
    print_opt("Saturated:    ", m.saturation_pct, " %");
    println!("  Solve time:    {:.3} s", response.solve_time_s);
}

fn print_opt(label: &str, value: Option<f64>, unit: &str) {
    match value {
        Some(v) => println!("  {} {:.4}{}", label, v, unit),
        None => println!("  {} n/a", label),
    }
}

fn cmd_sweep(scenario_path: &Path) -> AppResult<()> {
    let scenario = run_service::load_scenario(scenario_path)?;
    let Some(sweep) = &scenario.sweep else {
        println!("Scenario '{}' defines no sweep", scenario.name);
        return Ok(());
    };

    println!("{}", sweep);
    let results = run_sweep(&scenario.sim, sweep)?;

    println!(
        "{:>14} {:>12} {:>12} {:>12} {:>12}",
        sweep.parameter.label(),
        "final",
        "overshoot%",
        "rise_s",
        "settle_s"
    );
    for point in results {
        print_sweep_row(point.value, &point.metrics);
    }
    Ok(())
}

fn print_sweep_row(value: f64, m: &StepMetrics) {
    let cell = |v: Option<f64>, precision: usize| match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    };
    println!(
        "{:>14.4} {:>12} {:>12} {:>12} {:>12}",
        value,
        cell(m.final_value, 3),
        cell(m.overshoot_pct, 1),
        cell(m.rise_time_s, 3),
        cell(m.settling_time_s, 3)
    );
}

fn cmd_init(path: &Path, name: &str) -> AppResult<()> {
    let scenario = Scenario::new(name);
    save_yaml(path, &scenario)?;
    println!("✓ Wrote scenario '{}' to {}", name, path.display());
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = run_service::load_scenario(scenario_path)?;
    let steps = scenario.sim.steps()?;
    println!("✓ Scenario '{}' is valid ({} steps)", scenario.name, steps);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            kp: Some(5.0),
            setpoint: Some(-2.0),
            ..ConfigOverrides::default()
        };
        let cfg = overrides.apply(SimConfig::default());
        assert_eq!(cfg.kp, 5.0);
        assert_eq!(cfg.setpoint, -2.0);
        assert_eq!(cfg.ki, 1.0);
        assert_eq!(cfg.duration, 10.0);
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::try_parse_from(["pf-cli", "run", "--kp", "4.5", "--zeta", "-0.1"]).unwrap();
        match cli.command {
            Commands::Run { overrides, .. } => {
                assert_eq!(overrides.kp, Some(4.5));
                assert_eq!(overrides.zeta, Some(-0.1));
            }
            _ => panic!("expected run command"),
        }
    }
}
