//! CLI configuration.
//!
//! Settings live in `~/.config/chartkit/config.toml` by default:
//!
//! ```toml
//! [chart]
//! default_stats_period = "14d"
//! truncate_length = 80
//! high_fidelity = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use chartkit_core::{DEFAULT_TRUNCATE_LENGTH, IntervalSelector, StatsPeriod};

use crate::error::{CliError, CliResult};

/// Configuration for the chartkit CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart settings.
    pub chart: ChartSettings,
}

/// Defaults applied to chart commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Period used when a range has neither bounds nor a period.
    pub default_stats_period: StatsPeriod,

    /// Label length used when `truncate` gets no `--length` (0 disables).
    pub truncate_length: usize,

    /// Always request high-fidelity intervals.
    pub high_fidelity: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_stats_period: StatsPeriod::default_period(),
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            high_fidelity: false,
        }
    }
}

impl ChartConfig {
    /// Loads configuration from the default path, or defaults if the file
    /// does not exist.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`, and rejects settings that fail [`validate`](Self::validate).
    pub fn load_checked(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that parse but make no sense.
    pub fn validate(&self) -> CliResult<()> {
        if self.chart.default_stats_period.amount() == 0 {
            return Err(CliError::Config(
                "chart.default_stats_period must be longer than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds an interval selector using the configured default period.
    pub fn selector(&self) -> IntervalSelector {
        IntervalSelector::new(self.chart.default_stats_period)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chartkit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.chart.default_stats_period.to_string(), "14d");
        assert_eq!(config.chart.truncate_length, 80);
        assert!(!config.chart.high_fidelity);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_full_file() {
        let file = write_config(
            r#"
[chart]
default_stats_period = "24h"
truncate_length = 20
high_fidelity = true
"#,
        );
        let config = ChartConfig::load_from(file.path()).unwrap();
        assert_eq!(config.chart.default_stats_period.to_string(), "24h");
        assert_eq!(config.chart.truncate_length, 20);
        assert!(config.chart.high_fidelity);
        assert_eq!(config.selector().default_period().minutes(), 1440);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let file = write_config("[chart]\ntruncate_length = 10\n");
        let config = ChartConfig::load_from(file.path()).unwrap();
        assert_eq!(config.chart.truncate_length, 10);
        assert_eq!(config.chart.default_stats_period, StatsPeriod::default_period());

        let empty = write_config("");
        assert_eq!(
            ChartConfig::load_from(empty.path()).unwrap(),
            ChartConfig::default()
        );
    }

    #[test]
    fn bad_period_fails_to_load() {
        let file = write_config("[chart]\ndefault_stats_period = \"fortnight\"\n");
        let err = ChartConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChartConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn zero_period_is_invalid() {
        let file = write_config("[chart]\ndefault_stats_period = \"0d\"\n");
        let config = ChartConfig::load_from(file.path()).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_checked_rejects_invalid_settings() {
        let file = write_config("[chart]\ndefault_stats_period = \"0d\"\n");
        let err = ChartConfig::load_checked(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("default_stats_period"));

        let file = write_config("[chart]\ndefault_stats_period = \"24h\"\n");
        let config = ChartConfig::load_checked(Some(file.path())).unwrap();
        assert_eq!(config.chart.default_stats_period.to_string(), "24h");
    }

    #[test]
    fn toml_roundtrip() {
        let config = ChartConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("default_stats_period = \"14d\""));
        let parsed: ChartConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
