use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

/// Identifier put on every projected record
pub const DEFAULT_MODEL_ID: &str = "trend-projection-v1";

/// Weights and factors used when projecting a metric
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ProjectionParameters {
    pub model_id: String,
    /// Baseline weights, most recent day first
    pub baseline_weights: Vec<f64>,
    pub trend_factor: f64,
    pub seasonal_factor: f64,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            baseline_weights: vec![0.35, 0.25, 0.20, 0.12, 0.08],
            trend_factor: 0.6,
            seasonal_factor: 0.4,
        }
    }
}

/// Thresholds for the icon and condition decision table
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConditionThresholds {
    pub rain_precip_prob: f64,
    pub windy_speed: f64,
    pub overcast_cloud_cover: f64,
    pub partly_cloudy_cloud_cover: f64,
}

impl Default for ConditionThresholds {
    fn default() -> Self {
        Self {
            rain_precip_prob: 60.0,
            windy_speed: 20.0,
            overcast_cloud_cover: 70.0,
            partly_cloudy_cloud_cover: 40.0,
        }
    }
}

#[derive(Deserialize)]
pub struct Files {
    pub history_file: String,
    pub output_dir: Option<String>,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub files: Files,
    #[serde(default)]
    pub projection: ProjectionParameters,
    #[serde(default)]
    pub conditions: ConditionThresholds,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration given as a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    validate_projection(&config.projection)?;
    validate_conditions(&config.conditions)?;

    Ok(config)
}

/// Checks that the projection parameters can produce finite, normalizable results
///
/// # Arguments
///
/// * 'params' - the parameters to check
fn validate_projection(params: &ProjectionParameters) -> Result<(), ConfigError> {
    if params.model_id.trim().is_empty() {
        return Err(ConfigError::from("projection model_id must not be empty"));
    }
    if params.baseline_weights.is_empty() {
        return Err(ConfigError::from("at least one baseline weight is needed"));
    }
    if params.baseline_weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
        return Err(ConfigError::from("baseline weights must be positive numbers"));
    }
    if !params.trend_factor.is_finite() || !params.seasonal_factor.is_finite() {
        return Err(ConfigError::from("trend and seasonal factors must be finite numbers"));
    }

    Ok(())
}

/// Checks that the decision table thresholds are within their physical ranges
///
/// # Arguments
///
/// * 'thresholds' - the thresholds to check
fn validate_conditions(thresholds: &ConditionThresholds) -> Result<(), ConfigError> {
    let percentages = [
        ("rain_precip_prob", thresholds.rain_precip_prob),
        ("overcast_cloud_cover", thresholds.overcast_cloud_cover),
        ("partly_cloudy_cloud_cover", thresholds.partly_cloudy_cloud_cover),
    ];
    for (name, value) in percentages {
        if !(0.0..=100.0).contains(&value) {
            return Err(ConfigError(format!("{} must be within 0 - 100, got {}", name, value)));
        }
    }
    if !thresholds.windy_speed.is_finite() || thresholds.windy_speed < 0.0 {
        return Err(ConfigError(format!("windy_speed must not be negative, got {}", thresholds.windy_speed)));
    }

    Ok(())
}
