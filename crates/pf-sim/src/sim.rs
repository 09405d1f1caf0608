//! Closed-loop simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::TransientModel;
use crate::plant::SecondOrderPlant;
use pf_controls::{OutputLimits, PidController, PidGains, PidState};
use pf_core::ensure_positive;
use serde::{Deserialize, Serialize};

/// Upper bound on `floor(duration / time_step)`.
pub const MAX_STEPS: usize = 100_000_000;

/// Configuration of one closed-loop run.
///
/// Missing fields take the library defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Total simulated time (seconds)
    pub duration: f64,
    /// Fixed time step (seconds)
    pub time_step: f64,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// Plant natural frequency (rad/s)
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub plant_gain: f64,
    pub setpoint: f64,
    /// Actuator range for the control signal
    pub output_limits: OutputLimits,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: 10.0,
            time_step: 1e-3,
            kp: 3.0,
            ki: 1.0,
            kd: 0.2,
            natural_frequency: 2.0,
            damping_ratio: 0.5,
            plant_gain: 1.0,
            setpoint: 1.0,
            output_limits: OutputLimits::default(),
        }
    }
}

impl SimConfig {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_gains(mut self, kp: f64, ki: f64, kd: f64) -> Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }

    pub fn gains(&self) -> PidGains {
        PidGains::new(self.kp, self.ki, self.kd)
    }

    pub fn controller(&self) -> PidController {
        PidController::new(self.gains(), self.output_limits)
    }

    pub fn plant(&self) -> SecondOrderPlant {
        SecondOrderPlant::new(self.natural_frequency, self.damping_ratio, self.plant_gain)
    }

    /// Reject configurations the loop cannot run.
    ///
    /// Only the time grid and the actuator range are checked. Gains and plant
    /// parameters are simulated whatever their values.
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive(self.time_step, "time_step must be positive and finite")?;
        ensure_positive(self.duration, "duration must be positive and finite")?;
        self.output_limits.validate()?;
        if self.duration / self.time_step >= MAX_STEPS as f64 {
            return Err(SimError::InvalidConfig {
                what: "duration / time_step exceeds the step limit",
            });
        }
        Ok(())
    }

    /// Number of samples a run produces.
    pub fn steps(&self) -> SimResult<usize> {
        self.validate()?;
        Ok(step_count(self.duration, self.time_step))
    }
}

/// Step-count policy: `floor(duration / time_step)`.
///
/// A trailing partial step is dropped. Callers validate the inputs first.
pub fn step_count(duration: f64, time_step: f64) -> usize {
    (duration / time_step).floor() as usize
}

/// Recorded series of one run. All three vectors have equal length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// Plant output
    pub y: Vec<f64>,
    /// Applied (saturated) control signal
    pub u: Vec<f64>,
}

impl SimRecord {
    fn with_capacity(steps: usize) -> Self {
        Self {
            t: Vec::with_capacity(steps),
            y: Vec::with_capacity(steps),
            u: Vec::with_capacity(steps),
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Iterate `(t, y, u)` samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.t
            .iter()
            .zip(&self.y)
            .zip(&self.u)
            .map(|((t, y), u)| (*t, *y, *u))
    }
}

/// Run the closed loop described by `config`.
///
/// Each call owns its plant state and controller state, so repeated calls
/// with the same configuration return identical records.
pub fn simulate(config: &SimConfig) -> SimResult<SimRecord> {
    let steps = config.steps()?;
    let dt = config.time_step;
    let plant = config.plant();
    let controller = config.controller();
    let integrator = ForwardEuler;

    tracing::debug!(
        steps,
        dt,
        kp = config.kp,
        ki = config.ki,
        kd = config.kd,
        "starting closed-loop run"
    );

    let mut x = plant.initial_state();
    let mut pid_state = PidState::default();
    let mut record = SimRecord::with_capacity(steps);
    let mut diverged = false;

    for k in 0..steps {
        let y = plant.output(&x);
        let (next_pid, out) = controller.update(&pid_state, y, config.setpoint, dt);
        x = integrator.step(&plant, &x, out.output, dt);

        record.t.push(k as f64 * dt);
        record.y.push(y);
        record.u.push(out.output);

        if !diverged && !y.is_finite() {
            diverged = true;
            tracing::warn!(step = k, "plant output is no longer finite");
        }
        pid_state = next_pid;
    }

    tracing::debug!(
        samples = record.len(),
        final_output = record.y.last().copied().unwrap_or(0.0),
        "closed-loop run finished"
    );

    Ok(record)
}

/// Positional form of [`simulate`] with the default actuator range.
#[allow(clippy::too_many_arguments)]
pub fn simulate_with(
    duration: f64,
    time_step: f64,
    kp: f64,
    ki: f64,
    kd: f64,
    natural_frequency: f64,
    damping_ratio: f64,
    plant_gain: f64,
    setpoint: f64,
) -> SimResult<SimRecord> {
    simulate(&SimConfig {
        duration,
        time_step,
        kp,
        ki,
        kd,
        natural_frequency,
        damping_ratio,
        plant_gain,
        setpoint,
        output_limits: OutputLimits::default(),
    })
}
