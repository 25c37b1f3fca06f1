use crate::error::{ConfigError, SimError};
use crate::simulation::deck::LAND_COUNT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "mana_value_simulation_results.csv";

/// Settings for a full parameter sweep.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Command-line flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub iterations_per_simulation: usize,
    pub min_mana_value: u32,
    pub max_mana_value: u32,
    /// Include targets with off-color pips
    pub include_gold_cards: bool,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub output: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            iterations_per_simulation: 10_000,
            min_mana_value: 1,
            max_mana_value: 7,
            include_gold_cards: true,
            seed: None,
            workers: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl SweepConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path).map_err(|source| SimError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SimError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations_per_simulation < 1 {
            return Err(ConfigError::NoTrials);
        }
        if self.min_mana_value < 1 {
            return Err(ConfigError::ManaValueTooLow(self.min_mana_value));
        }
        if self.min_mana_value > self.max_mana_value {
            return Err(ConfigError::InvalidRange(format!(
                "min_mana_value {} > max_mana_value {}",
                self.min_mana_value, self.max_mana_value
            )));
        }
        // A card costing more than the deck's land count can never be cast
        if self.max_mana_value > LAND_COUNT {
            return Err(ConfigError::InvalidRange(format!(
                "max_mana_value {} > land count {}",
                self.max_mana_value, LAND_COUNT
            )));
        }
        if self.workers == Some(0) {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }
}
