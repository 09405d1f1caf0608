//! Scenario schema definitions.

use pf_sim::SimConfig;
use serde::{Deserialize, Serialize};

use crate::sweep::SweepDef;

/// Current scenario file version.
pub const LATEST_VERSION: u32 = 1;

/// Duration used by a fresh scenario (the library default is 10 s).
pub const DEFAULT_SCENARIO_DURATION: f64 = 8.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

impl Scenario {
    /// Scenario with the step-response defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            sim: SimConfig::default().with_duration(DEFAULT_SCENARIO_DURATION),
            sweep: None,
        }
    }

    pub fn with_sweep(mut self, sweep: SweepDef) -> Self {
        self.sweep = Some(sweep);
        self
    }
}
