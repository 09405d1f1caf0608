//! pf-project: scenario file format and validation.

pub mod schema;
pub mod sweep;
pub mod validate;

pub use schema::*;
pub use sweep::{SweepDef, SweepParameter, SweepSpacing};
pub use validate::{ValidationError, validate_scenario};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking the format from the file extension
/// (`.json` for JSON, anything else as YAML).
pub fn load(path: &std::path::Path) -> ProjectResult<Scenario> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
