use super::{evolution::AlignConfig, traits::ConfigSection};
use crate::error::GenalignError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `GENALIGN_ALIGN__POPULATION_SIZE=200`.
pub const ENV_PREFIX: &str = "GENALIGN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub align: AlignConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GenalignError> {
        self.align.validate()
    }
}

/// Layers built-in defaults, an optional TOML file and `GENALIGN_*`
/// environment variables into one validated [`AppConfig`].
pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn load(path: Option<&Path>) -> Result<Self, GenalignError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(GenalignError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(Self { config })
    }

    /// Parse a TOML document without consulting files or the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self, GenalignError> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenalignError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `f` and re-validate; the previous configuration is kept on error.
    pub fn update<F>(&mut self, f: F) -> Result<(), GenalignError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
