use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::validate_config;
use crate::error::MatchError;
use crate::models::{MatchConfig, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            top_n: default_top_n(),
        }
    }
}

fn default_max_distance_km() -> f64 { 50.0 }
fn default_top_n() -> usize { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_age_gap_weight")]
    pub age_gap: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            age_gap: default_age_gap_weight(),
            distance: default_distance_weight(),
        }
    }
}

fn default_interests_weight() -> f64 { 0.60 }
fn default_age_gap_weight() -> f64 { 0.25 }
fn default_distance_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LUME_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUME__MATCHING__TOP_N -> matching.top_n
            .add_source(lume_environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(lume_environment())
            .build()?
            .try_deserialize()
    }

    /// Build the immutable matching configuration, rejecting unusable tunables
    pub fn match_config(&self) -> Result<MatchConfig, MatchError> {
        let config = MatchConfig {
            weights: ScoringWeights {
                interests: self.scoring.weights.interests,
                age_gap: self.scoring.weights.age_gap,
                distance: self.scoring.weights.distance,
            },
            max_distance_km: self.matching.max_distance_km,
            top_n: self.matching.top_n,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

fn lume_environment() -> Environment {
    Environment::with_prefix("LUME")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
