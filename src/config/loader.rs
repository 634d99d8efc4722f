//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax schedules
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{CitSchedule, PitSchedule, StatuteMetadata, TaxConfig};

/// Loads and provides access to a tax configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/nta2025/
/// ├── statute.yaml   # Statute metadata
/// ├── pit.yaml       # Rent relief and progressive bands
/// └── cit.yaml       # Small company thresholds and rates
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nta2025").unwrap();
/// println!("Loaded statute: {}", loader.statute().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A schedule violates its structural invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<StatuteMetadata>(&path.join("statute.yaml"))?;
        let pit = Self::load_yaml::<PitSchedule>(&path.join("pit.yaml"))?;
        let cit = Self::load_yaml::<CitSchedule>(&path.join("cit.yaml"))?;

        let config = TaxConfig::new(metadata, pit, cit)?;

        info!(
            statute = %config.statute().code,
            effective_date = %config.statute().effective_date,
            bands = config.pit().bands.len(),
            "Loaded tax configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in statutory schedule.
    pub fn statutory() -> Self {
        Self {
            config: TaxConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the Personal Income Tax schedule.
    pub fn pit(&self) -> &PitSchedule {
        self.config.pit()
    }

    /// Returns the Company Income Tax schedule.
    pub fn cit(&self) -> &CitSchedule {
        self.config.cit()
    }
}
