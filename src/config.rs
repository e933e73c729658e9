//! Configuration management for the job comparison tool

use crate::error::{JobCompareError, Result};
use crate::scoring::composite::{Weights, DEFAULT_WEIGHTS, HOT_BONUS};
use crate::scoring::sectors::DEFAULT_SECTOR_SCORE;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub hot_bonus: u32,
    pub default_sector_score: u32,
    #[serde(default)]
    pub sectors: SectorOverrides,
}

/// Extra or replacement sector scores, merged over the built-in tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorOverrides {
    #[serde(default)]
    pub growth: BTreeMap<String, u32>,
    #[serde(default)]
    pub demand: BTreeMap<String, u32>,
    #[serde(default)]
    pub balance: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            hot_bonus: HOT_BONUS,
            default_sector_score: DEFAULT_SECTOR_SCORE,
            sectors: SectorOverrides::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No configuration found, writing defaults to {}", config_path.display());
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JobCompareError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobCompareError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-compare")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let weights = &self.scoring.weights;
        let all = [
            ("salary", weights.salary),
            ("growth", weights.growth),
            ("demand", weights.demand),
            ("balance", weights.balance),
            ("access", weights.access),
        ];

        if let Some((name, value)) = all.iter().find(|(_, value)| !value.is_finite() || *value < 0.0) {
            return Err(JobCompareError::Configuration(format!(
                "Weight '{}' must be a non-negative number, got {}",
                name, value
            )));
        }

        if (weights.sum() - 1.0).abs() > 1e-6 {
            return Err(JobCompareError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.4}",
                weights.sum()
            )));
        }

        if self.scoring.default_sector_score > 100 {
            return Err(JobCompareError::Configuration(format!(
                "default_sector_score must be at most 100, got {}",
                self.scoring.default_sector_score
            )));
        }

        if self.scoring.hot_bonus > 100 {
            return Err(JobCompareError::Configuration(format!(
                "hot_bonus must be at most 100, got {}",
                self.scoring.hot_bonus
            )));
        }

        let overrides = &self.scoring.sectors;
        for (table, entries) in [
            ("growth", &overrides.growth),
            ("demand", &overrides.demand),
            ("balance", &overrides.balance),
        ] {
            if let Some((sector, score)) = entries.iter().find(|(_, score)| **score > 100) {
                return Err(JobCompareError::Configuration(format!(
                    "Sector score for '{}' in {} table must be at most 100, got {}",
                    sector, table, score
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.hot_bonus, 15);
        assert_eq!(config.scoring.default_sector_score, 60);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.sectors.growth.insert("fintech".to_string(), 88);
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sectors_table_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[scoring]
hot_bonus = 10
default_sector_score = 50

[scoring.weights]
salary = 0.2
growth = 0.2
demand = 0.2
balance = 0.2
access = 0.2

[output]
format = "json"
detailed = true
color_output = false
pretty_json = false
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scoring.hot_bonus, 10);
        assert!(config.scoring.sectors.growth.is_empty());
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = Config::default();
        config.scoring.weights.salary = 0.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, JobCompareError::Configuration(_)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = Config::default();
        config.scoring.weights.salary = -0.25;
        config.scoring.weights.growth = 0.75;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_override_above_100_rejected() {
        let mut config = Config::default();
        config.scoring.sectors.balance.insert("gaming".to_string(), 120);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hot_bonus_above_100_rejected() {
        let mut config = Config::default();
        config.scoring.hot_bonus = u32::MAX;
        assert!(matches!(config.validate(), Err(JobCompareError::Configuration(_))));

        config.scoring.hot_bonus = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(JobCompareError::Io(_))));
    }
}
