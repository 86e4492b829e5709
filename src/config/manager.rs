use super::{evolution::EvolutionConfig, timing::TimingConfig, traits::ConfigSection};
use crate::error::AccompanistError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix of environment variables that override file settings,
/// e.g. `ACCOMPANIST_EVOLUTION__POPULATION_SIZE=120`.
pub const ENV_PREFIX: &str = "ACCOMPANIST";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub timing: TimingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AccompanistError> {
        self.evolution.validate()?;
        self.timing.validate()?;
        Ok(())
    }

    /// Load from an optional TOML file overlaid with `ACCOMPANIST_*` variables.
    pub fn load_layered<P: AsRef<Path>>(path: P) -> Result<Self, AccompanistError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AccompanistError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AccompanistError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| AccompanistError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    /// Replace the current config with a file + environment layered load.
    pub fn load_layered<P: AsRef<Path>>(&self, path: P) -> Result<(), AccompanistError> {
        let config = AppConfig::load_layered(path)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AccompanistError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| AccompanistError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| AccompanistError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to the config. Rejected edits leave the previous config in place.
    pub fn update<F>(&self, f: F) -> Result<(), AccompanistError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
